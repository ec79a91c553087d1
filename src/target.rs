use std::path::{Path, PathBuf};

use crate::export::Entry;
use crate::slug::slugify;

/// Where an entry is written: `<dir>/<slug(title)>.<extension>`.
/// Only the title counts, so two posts with the same title share a path.
pub fn target_path(entry: &Entry, dir: &Path, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", slugify(&entry.title), extension))
}

/// Presence only, the content of an existing file is never looked at.
pub fn already_exists(entry: &Entry, dir: &Path, extension: &str) -> bool {
    target_path(entry, dir, extension).exists()
}
