use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use spdlog::{info, warn};

use crate::error::MigrateError;
use crate::export::{parse_export, Entry, Export};
use crate::pacing::Pacer;
use crate::post_filter::is_post;
use crate::post_render::PostRenderer;
use crate::rewrite::Rewriter;
use crate::target::{already_exists, target_path};

pub const DEFAULT_EXTENSION: &str = "md";

#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub out_dir: PathBuf,
    pub extension: String,
    /// Extra front matter line added to every post written in the run
    pub extra: Option<String>,
}

impl MigrateOptions {
    pub fn new(out_dir: &Path) -> MigrateOptions {
        MigrateOptions {
            out_dir: out_dir.to_path_buf(),
            extension: DEFAULT_EXTENSION.to_string(),
            extra: None,
        }
    }
}

/// Counters of a run. Posts found on disk are counted as published and also in `existing`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub published: usize,
    pub drafts: usize,
    pub existing: usize,
}

impl Summary {
    fn report(&self) {
        info!("Wrote {} published posts to disk ({} already there).", self.published, self.existing);
        info!("Wrote {} drafts to disk.", self.drafts);
    }
}

/// The output directory is created when missing. Anything else than a directory is refused.
pub fn prepare_output_dir(dir: &Path) -> Result<(), MigrateError> {
    let directory_error = |reason: String| MigrateError::Directory {
        path: dir.to_path_buf(),
        reason,
    };

    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(directory_error("not a directory".to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("Creating output directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|e| directory_error(e.to_string()))
        }
        Err(e) => Err(directory_error(e.to_string())),
    }
}

pub fn read_export(path: &Path) -> Result<Export, MigrateError> {
    let raw = fs::read(path).map_err(|source| MigrateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_export(&raw)?)
}

fn write_document(path: &Path, document: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(document.as_bytes())?;
    file.flush()
}

/// Sequential export-to-files conversion. One rewrite call per new post, no retries.
pub struct Pipeline<'a> {
    rewriter: &'a dyn Rewriter,
    pacer: &'a dyn Pacer,
    renderer: PostRenderer<'static>,
    options: MigrateOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(rewriter: &'a dyn Rewriter, pacer: &'a dyn Pacer, options: MigrateOptions) -> Result<Self, MigrateError> {
        Ok(Pipeline {
            rewriter,
            pacer,
            renderer: PostRenderer::new()?,
            options,
        })
    }

    /// Processes every post of the export in order. The first rewrite or write failure ends
    /// the run, files written before it stay on disk.
    pub async fn run(&self, export: Export) -> Result<Summary, MigrateError> {
        if export.entries.is_empty() {
            return Err(MigrateError::EmptyExport);
        }

        let mut summary = Summary::default();
        let res = self.process_all(export.entries, &mut summary).await;
        if let Err(ref e) = res {
            warn!("Stopping migration: {}", e);
        }
        summary.report();

        res.map(|_| summary)
    }

    async fn process_all(&self, entries: Vec<Entry>, summary: &mut Summary) -> Result<(), MigrateError> {
        for entry in entries {
            if !is_post(&entry) {
                continue;
            }
            self.process(entry, summary).await?;
        }
        Ok(())
    }

    async fn process(&self, mut entry: Entry, summary: &mut Summary) -> Result<(), MigrateError> {
        let MigrateOptions { out_dir, extension, extra } = &self.options;

        if extra.is_some() {
            entry.extra = extra.clone();
        }

        info!("{}", entry.title);

        if already_exists(&entry, out_dir, extension) {
            info!("Already exists!");
            summary.published += 1;
            summary.existing += 1;
            return Ok(());
        }

        entry.content = self
            .rewriter
            .rewrite(&entry.content)
            .await
            .map_err(|source| MigrateError::Rewrite {
                title: entry.title.clone(),
                source,
            })?;

        let path = target_path(&entry, out_dir, extension);
        let document = self.renderer.render(&entry);
        write_document(&path, &document).map_err(|source| MigrateError::Write {
            title: entry.title.clone(),
            path: path.clone(),
            source,
        })?;

        if entry.is_draft {
            summary.drafts += 1;
        } else {
            summary.published += 1;
        }

        self.pacer.pause().await;
        Ok(())
    }
}

/// Full run: output directory check, export decoding, then the pipeline.
pub async fn migrate(
    export_path: &Path,
    options: MigrateOptions,
    rewriter: &dyn Rewriter,
    pacer: &dyn Pacer,
) -> Result<Summary, MigrateError> {
    prepare_output_dir(&options.out_dir)?;
    let export = read_export(export_path)?;
    info!("Read {} entries from {}", export.entries.len(), export_path.display());

    let pipeline = Pipeline::new(rewriter, pacer, options)?;
    pipeline.run(export).await
}
