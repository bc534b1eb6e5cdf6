//! Error taxonomy for an export run. Every variant is fatal to the run.

use std::io;
use std::path::PathBuf;

use crate::revision::RevisionError;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A catalogued name has no table behind it.
    #[error("vocabulary '{name}' is catalogued but has no table")]
    MissingVocabulary { name: String },

    #[error("revision lookup failed for '{name}': {source}")]
    Revision {
        name: String,
        #[source]
        source: RevisionError,
    },

    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode document for '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ExportError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
