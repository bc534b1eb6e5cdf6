//! Version-history file: a static JSON lookup table standing in for version
//! control. Written by maintainers alongside table edits; read once per run.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{RevisionError, RevisionProvider, VocabularyRevision};

pub const DEFAULT_VERSION_HISTORY_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/version_history.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionHistory {
    #[serde(rename = "versionId")]
    pub version_id: String,
    #[serde(default)]
    pub previous_commit: Option<String>,
    #[serde(default)]
    pub vocabularies: BTreeMap<String, VocabularyRevision>,
}

impl VersionHistory {
    pub fn new(version_id: impl Into<String>) -> Self {
        Self {
            version_id: version_id.into(),
            ..Self::default()
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RevisionError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RevisionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| RevisionError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_previous_commit(mut self, commit: impl Into<String>) -> Self {
        self.previous_commit = Some(commit.into());
        self
    }

    pub fn with_revision(
        mut self,
        name: impl Into<String>,
        time_stamp: impl Into<String>,
        commit_message: impl Into<String>,
    ) -> Self {
        self.vocabularies.insert(
            name.into(),
            VocabularyRevision {
                time_stamp: time_stamp.into(),
                commit_message: commit_message.into(),
            },
        );
        self
    }
}

impl RevisionProvider for VersionHistory {
    fn collection_version(&self) -> Result<String, RevisionError> {
        Ok(self.version_id.clone())
    }

    fn previous_commit(&self, _source_artifact: &Path) -> Result<Option<String>, RevisionError> {
        Ok(self.previous_commit.clone())
    }

    fn vocabulary_revision(&self, name: &str) -> Result<VocabularyRevision, RevisionError> {
        self.vocabularies
            .get(name)
            .cloned()
            .ok_or_else(|| RevisionError::UnknownVocabulary(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_history_file_layout() {
        let raw = r#"{
            "versionId": "6.2.58.49",
            "previous_commit": "a1b2c3",
            "vocabularies": {
                "activity_id": {"timeStamp": "2022-02-10T00:00:00Z", "commitMessage": "initialize"}
            }
        }"#;
        let history: VersionHistory = serde_json::from_str(raw).unwrap();
        let record = history
            .fetch("activity_id", Path::new("tables.rs"))
            .unwrap();
        assert_eq!(record.time_stamp, "2022-02-10T00:00:00Z");
        assert_eq!(record.commit_message, "initialize");
        assert_eq!(record.collection_version, "6.2.58.49");
        assert_eq!(record.previous_commit.as_deref(), Some("a1b2c3"));
    }

    #[test]
    fn previous_commit_is_optional() {
        let history: VersionHistory =
            serde_json::from_str(r#"{"versionId": "1", "vocabularies": {}}"#).unwrap();
        assert_eq!(history.previous_commit(Path::new("x")).unwrap(), None);
    }

    #[test]
    fn unknown_vocabulary_is_an_error() {
        let history = VersionHistory::new("1").with_revision("realm", "t", "m");
        assert!(matches!(
            history.vocabulary_revision("frequency"),
            Err(RevisionError::UnknownVocabulary(ref name)) if name == "frequency"
        ));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = VersionHistory::load("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"), "{err}");
    }
}
