use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while decoding the export document.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed export document: {0}")]
    Malformed(#[from] quick_xml::de::DeError),

    #[error("invalid timestamp {value:?}: {reason}")]
    Timestamp { value: String, reason: String },

    #[error("unknown value for draft flag: {0:?}")]
    DraftFlag(String),
}

/// Failures of the external rewrite capability.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("response carried no rewritten text")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

/// Fatal errors of a migration run. None of them is retried.
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("error reading export file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid front matter template: {0}")]
    Template(#[from] ramhorns::Error),

    #[error("no blog entries found")]
    EmptyExport,

    #[error("output path {path:?} is unusable: {reason}")]
    Directory { path: PathBuf, reason: String },

    #[error("failed rewriting post {title:?}: {source}")]
    Rewrite { title: String, source: RewriteError },

    #[error("failed writing post {title:?} to {path:?}: {source}")]
    Write {
        title: String,
        path: PathBuf,
        source: io::Error,
    },
}
