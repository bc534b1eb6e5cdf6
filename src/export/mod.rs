//! Write one CV document per catalogued vocabulary.
//! Each document is `{<name>: <table>, "version_metadata": <envelope>}`, keys sorted.

pub mod format;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::error::ExportError;
use crate::revision::{RevisionProvider, RevisionRecord};
use crate::timestamp::CollectionTimestamp;
use crate::vocab::{Vocabulary, VocabularyCatalogue};

pub use format::{to_cv_json, CvFormatter};

/// Documents land one level above the working directory unless overridden.
pub const DEFAULT_OUTPUT_DIR: &str = "..";
pub const DEFAULT_AUTHOR: &str = "Paul J. Durack <durack1@llnl.gov>";
pub const DEFAULT_INSTITUTION_ID: &str = "PCMDI";
pub const SPECS_DOC: &str = "v6.2.7 (10th September 2018; https://goo.gl/v1drZl)";
pub const OUTPUT_PREFIX: &str = "CMIP6_";
pub const VERSION_METADATA_KEY: &str = "version_metadata";

/// Vocabularies written without [`OUTPUT_PREFIX`].
const UNPREFIXED: &[&str] = &["mip_era"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub author: String,
    pub institution_id: String,
    pub specs_doc: String,
    /// File whose commit history supplies `previous_commit`.
    pub source_artifact: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            author: DEFAULT_AUTHOR.to_string(),
            institution_id: DEFAULT_INSTITUTION_ID.to_string(),
            specs_doc: SPECS_DOC.to_string(),
            source_artifact: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/vocab/tables.rs"
            )),
        }
    }
}

impl ExportSettings {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        resolve_output_path(&self.output_dir, name)
    }
}

/// `mip_era` -> `<dir>/mip_era.json`, anything else -> `<dir>/CMIP6_<name>.json`.
pub fn resolve_output_path(output_dir: &Path, name: &str) -> PathBuf {
    if UNPREFIXED.contains(&name) {
        output_dir.join(format!("{name}.json"))
    } else {
        output_dir.join(format!("{OUTPUT_PREFIX}{name}.json"))
    }
}

/// Provenance block attached to every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMetadata {
    pub vocabulary: String,
    pub author: String,
    pub institution_id: String,
    pub collection_modified: String,
    pub collection_version: String,
    pub cv_modified: String,
    pub cv_note: String,
    pub previous_commit: Option<String>,
    pub specs_doc: String,
}

impl VersionMetadata {
    pub fn new(
        name: &str,
        settings: &ExportSettings,
        revision: &RevisionRecord,
        timestamp: &CollectionTimestamp,
    ) -> Self {
        Self {
            vocabulary: name.to_string(),
            author: settings.author.clone(),
            institution_id: settings.institution_id.clone(),
            collection_modified: timestamp.to_string(),
            collection_version: revision.collection_version.clone(),
            cv_modified: revision.time_stamp.clone(),
            cv_note: revision.commit_message.clone(),
            previous_commit: revision.previous_commit.clone(),
            specs_doc: settings.specs_doc.clone(),
        }
    }

    pub fn cv_modified_key(&self) -> String {
        format!("{}_CV_modified", self.vocabulary)
    }

    pub fn cv_note_key(&self) -> String {
        format!("{}_CV_note", self.vocabulary)
    }
}

impl Serialize for VersionMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut fields: BTreeMap<String, Option<&str>> = BTreeMap::new();
        fields.insert("author".to_string(), Some(self.author.as_str()));
        fields.insert("institution_id".to_string(), Some(self.institution_id.as_str()));
        fields.insert(
            "CV_collection_modified".to_string(),
            Some(self.collection_modified.as_str()),
        );
        fields.insert(
            "CV_collection_version".to_string(),
            Some(self.collection_version.as_str()),
        );
        fields.insert(self.cv_modified_key(), Some(self.cv_modified.as_str()));
        fields.insert(self.cv_note_key(), Some(self.cv_note.as_str()));
        fields.insert(
            "previous_commit".to_string(),
            self.previous_commit.as_deref(),
        );
        fields.insert("specs_doc".to_string(), Some(self.specs_doc.as_str()));
        fields.serialize(serializer)
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum DocumentEntry<'a> {
    Vocabulary(&'a Vocabulary),
    Metadata(&'a VersionMetadata),
}

/// The full contents of one output file.
#[derive(Debug, Clone)]
pub struct OutputDocument<'a> {
    pub name: &'a str,
    pub data: &'a Vocabulary,
    pub metadata: VersionMetadata,
}

impl Serialize for OutputDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries = BTreeMap::new();
        entries.insert(self.name, DocumentEntry::Vocabulary(self.data));
        entries.insert(VERSION_METADATA_KEY, DocumentEntry::Metadata(&self.metadata));
        entries.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub name: String,
    pub path: PathBuf,
    /// A stale copy was deleted before writing.
    pub purged: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub documents: Vec<ExportedDocument>,
}

impl ExportSummary {
    pub fn written(&self) -> usize {
        self.documents.len()
    }

    pub fn purged(&self) -> usize {
        self.documents.iter().filter(|doc| doc.purged).count()
    }
}

/// Encode and write a single vocabulary, replacing any existing file.
pub fn export_vocabulary(
    name: &str,
    data: &Vocabulary,
    revision: &RevisionRecord,
    timestamp: &CollectionTimestamp,
    settings: &ExportSettings,
) -> Result<ExportedDocument, ExportError> {
    let document = OutputDocument {
        name,
        data,
        metadata: VersionMetadata::new(name, settings, revision, timestamp),
    };
    let encoded = to_cv_json(&document).map_err(|source| ExportError::Serialize {
        name: name.to_string(),
        source,
    })?;

    let path = settings.output_path(name);
    let purged = replace_file(&path, &encoded)?;
    debug!(vocabulary = name, bytes = encoded.len(), "wrote {}", path.display());

    Ok(ExportedDocument {
        name: name.to_string(),
        path,
        purged,
    })
}

/// Delete-then-write. A failed write removes whatever part of the file made it to disk.
fn replace_file(path: &Path, contents: &[u8]) -> Result<bool, ExportError> {
    let purged = path.exists();
    if purged {
        info!("File existing, purging: {}", path.display());
        fs::remove_file(path).map_err(|err| ExportError::io("remove", path, err))?;
    }

    write_or_remove(path, |path| fs::write(path, contents))?;
    Ok(purged)
}

fn write_or_remove<W>(path: &Path, write: W) -> Result<(), ExportError>
where
    W: FnOnce(&Path) -> io::Result<()>,
{
    if let Err(err) = write(path) {
        if path.exists() {
            if let Err(cleanup) = fs::remove_file(path) {
                warn!("unable to remove partial document {}: {cleanup}", path.display());
            }
        }
        return Err(ExportError::io("write", path, err));
    }
    Ok(())
}

/// Export the whole catalogue, stamped with the current local time.
pub fn run<P: RevisionProvider + ?Sized>(
    catalogue: VocabularyCatalogue,
    settings: &ExportSettings,
    provider: &P,
) -> Result<ExportSummary, ExportError> {
    run_at(catalogue, settings, provider, &CollectionTimestamp::now())
}

/// Export the whole catalogue in order, stopping at the first error.
/// Takes the catalogue by value; its tables are released when the run returns.
pub fn run_at<P: RevisionProvider + ?Sized>(
    catalogue: VocabularyCatalogue,
    settings: &ExportSettings,
    provider: &P,
    timestamp: &CollectionTimestamp,
) -> Result<ExportSummary, ExportError> {
    let mut summary = ExportSummary::default();

    for name in catalogue.names() {
        let data = catalogue.get(name)?;
        let revision = provider
            .fetch(name, &settings.source_artifact)
            .map_err(|source| ExportError::Revision {
                name: name.clone(),
                source,
            })?;
        summary
            .documents
            .push(export_vocabulary(name, data, &revision, timestamp, settings)?);
    }

    info!(
        written = summary.written(),
        purged = summary.purged(),
        "CV collection written to {}",
        settings.output_dir.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revision() -> RevisionRecord {
        RevisionRecord {
            time_stamp: "2022-02-10T00:00:00Z".to_string(),
            commit_message: "initialize".to_string(),
            collection_version: "6.2.58.49".to_string(),
            previous_commit: None,
        }
    }

    fn timestamp() -> CollectionTimestamp {
        CollectionTimestamp {
            local_time: "Thu Feb 10 22:10:37 2022".to_string(),
            utc_offset_hours: -8,
        }
    }

    #[test]
    fn mip_era_is_the_only_unprefixed_name() {
        let dir = Path::new("..");
        assert_eq!(resolve_output_path(dir, "mip_era"), dir.join("mip_era.json"));
        assert_eq!(
            resolve_output_path(dir, "realm"),
            dir.join("CMIP6_realm.json")
        );
        assert!(resolve_output_path(dir, "realm").ends_with("CMIP6_realm.json"));
    }

    #[test]
    fn envelope_serializes_with_sorted_dynamic_keys() {
        let metadata = VersionMetadata::new(
            "activity_id",
            &ExportSettings::default(),
            &revision(),
            &timestamp(),
        );
        let encoded = String::from_utf8(to_cv_json(&metadata).unwrap()).unwrap();
        let expected = concat!(
            "{\n",
            "    \"CV_collection_modified\":\"Thu Feb 10 22:10:37 2022 -0800\",\n",
            "    \"CV_collection_version\":\"6.2.58.49\",\n",
            "    \"activity_id_CV_modified\":\"2022-02-10T00:00:00Z\",\n",
            "    \"activity_id_CV_note\":\"initialize\",\n",
            "    \"author\":\"Paul J. Durack <durack1@llnl.gov>\",\n",
            "    \"institution_id\":\"PCMDI\",\n",
            "    \"previous_commit\":null,\n",
            "    \"specs_doc\":\"v6.2.7 (10th September 2018; https://goo.gl/v1drZl)\"\n",
            "}",
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn document_puts_vocabulary_beside_metadata() {
        let data = Vocabulary::codes(&["AMIP1", "CMIP3"]);
        let document = OutputDocument {
            name: "mip_era",
            data: &data,
            metadata: VersionMetadata::new(
                "mip_era",
                &ExportSettings::default(),
                &revision(),
                &timestamp(),
            ),
        };
        let value = serde_json::to_value(&document).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["mip_era"], serde_json::json!(["AMIP1", "CMIP3"]));
        assert_eq!(
            object[VERSION_METADATA_KEY]["mip_era_CV_note"],
            serde_json::json!("initialize")
        );
    }

    #[test]
    fn failed_write_removes_partial_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CMIP6_realm.json");

        let err = write_or_remove(&path, |path| {
            fs::write(path, b"{\n    \"realm\":")?;
            Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"))
        })
        .unwrap_err();

        assert!(matches!(err, ExportError::Io { action: "write", .. }), "{err}");
        assert!(!path.exists());
    }

    #[test]
    fn replace_file_purges_existing_copy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mip_era.json");
        fs::write(&path, "stale").unwrap();

        assert!(replace_file(&path, b"[]").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(!replace_file(&dir.path().join("new.json"), b"{}").unwrap());
    }
}
