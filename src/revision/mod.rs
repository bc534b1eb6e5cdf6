//! Revision-history lookup: the per-vocabulary change facts stamped into every
//! output document. The exporter only depends on [`RevisionProvider`].

pub mod git;
pub mod history;

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use git::GitFileHistory;
pub use history::{VersionHistory, DEFAULT_VERSION_HISTORY_PATH};

/// Last change to a single vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRevision {
    #[serde(rename = "timeStamp")]
    pub time_stamp: String,
    #[serde(rename = "commitMessage")]
    pub commit_message: String,
}

/// Everything the envelope needs from history for one vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRecord {
    pub time_stamp: String,
    pub commit_message: String,
    pub collection_version: String,
    pub previous_commit: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RevisionError {
    #[error("no revision entry for vocabulary '{0}'")]
    UnknownVocabulary(String),

    #[error("unable to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("git history lookup failed: {0}")]
    Git(String),
}

pub trait RevisionProvider {
    /// Collection-wide version identifier.
    fn collection_version(&self) -> Result<String, RevisionError>;

    /// Last commit recorded for the exporter's own source artifact, if any.
    fn previous_commit(&self, source_artifact: &Path) -> Result<Option<String>, RevisionError>;

    fn vocabulary_revision(&self, name: &str) -> Result<VocabularyRevision, RevisionError>;

    fn fetch(&self, name: &str, source_artifact: &Path) -> Result<RevisionRecord, RevisionError> {
        let previous_commit = self.previous_commit(source_artifact)?;
        let collection_version = self.collection_version()?;
        let revision = self.vocabulary_revision(name)?;
        Ok(RevisionRecord {
            time_stamp: revision.time_stamp,
            commit_message: revision.commit_message,
            collection_version,
            previous_commit,
        })
    }
}

impl<P: RevisionProvider + ?Sized> RevisionProvider for &P {
    fn collection_version(&self) -> Result<String, RevisionError> {
        (**self).collection_version()
    }

    fn previous_commit(&self, source_artifact: &Path) -> Result<Option<String>, RevisionError> {
        (**self).previous_commit(source_artifact)
    }

    fn vocabulary_revision(&self, name: &str) -> Result<VocabularyRevision, RevisionError> {
        (**self).vocabulary_revision(name)
    }

    fn fetch(&self, name: &str, source_artifact: &Path) -> Result<RevisionRecord, RevisionError> {
        (**self).fetch(name, source_artifact)
    }
}

impl<P: RevisionProvider + ?Sized> RevisionProvider for Box<P> {
    fn collection_version(&self) -> Result<String, RevisionError> {
        (**self).collection_version()
    }

    fn previous_commit(&self, source_artifact: &Path) -> Result<Option<String>, RevisionError> {
        (**self).previous_commit(source_artifact)
    }

    fn vocabulary_revision(&self, name: &str) -> Result<VocabularyRevision, RevisionError> {
        (**self).vocabulary_revision(name)
    }

    fn fetch(&self, name: &str, source_artifact: &Path) -> Result<RevisionRecord, RevisionError> {
        (**self).fetch(name, source_artifact)
    }
}
