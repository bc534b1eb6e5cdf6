//! Shipped provenance data: the version-history file must cover the whole catalogue
//! so a bare `cmip_cvs` run can stamp every document.

use std::path::Path;

use cmip_cvs::revision::{RevisionProvider, VersionHistory, DEFAULT_VERSION_HISTORY_PATH};
use cmip_cvs::vocab::default_catalogue;

#[test]
fn shipped_history_covers_every_catalogued_vocabulary() {
    let history = VersionHistory::load(DEFAULT_VERSION_HISTORY_PATH)
        .expect("shipped version history should load");
    assert!(!history.version_id.is_empty(), "versionId should be set");

    let catalogue = default_catalogue().unwrap();
    for name in catalogue.names() {
        let record = history
            .fetch(name, Path::new("src/vocab/tables.rs"))
            .unwrap_or_else(|err| panic!("no history for {name}: {err}"));
        assert!(!record.time_stamp.is_empty(), "{name} timeStamp");
        assert!(!record.commit_message.is_empty(), "{name} commitMessage");
    }
}

#[test]
fn shipped_history_has_no_orphan_entries() {
    let history = VersionHistory::load(DEFAULT_VERSION_HISTORY_PATH).unwrap();
    let catalogue = default_catalogue().unwrap();
    for name in history.vocabularies.keys() {
        assert!(
            catalogue.get(name).is_ok(),
            "history entry '{name}' has no table"
        );
    }
}
