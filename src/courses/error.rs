//! Error kinds surfaced by the resolution pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    /// The category alias is not in the configured table. Detected before
    /// any filesystem access.
    #[error("unknown category alias '{alias}' (available: {known})")]
    UnknownCategory { alias: String, known: String },

    /// No explicit course identifier and no course directory exists yet.
    #[error("no course directory found under {dir:?}; specify one with -c")]
    NoCourseSelected { dir: PathBuf },

    /// No explicit week identifier and no week directory exists yet.
    #[error("no week directory found under {dir:?}; specify one with -w")]
    NoWeekSelected { dir: PathBuf },

    /// A prefix-matching entry whose suffix does not parse as an integer.
    /// Fatal rather than skipped: silently ignoring it could select the
    /// wrong "latest" entry.
    #[error("directory name '{name}' has a non-numeric suffix after '{prefix}'")]
    MalformedDirectoryName { name: String, prefix: String },

    /// Listing or creating a directory failed at the filesystem level.
    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NavError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
