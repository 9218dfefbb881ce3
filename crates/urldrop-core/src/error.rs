//! Error type for reading link sources and writing link lists.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading an input file or writing a saved list.
///
/// Validation rejections and unsupported extensions are not errors; they are
/// skipped silently by the extractors.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    /// Path of the file the failed operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ExtractError::Read { path, .. } | ExtractError::Write { path, .. } => path,
        }
    }
}
