use std::fs;

use cmip_cvs::export::{self, ExportSettings};
use cmip_cvs::revision::VersionHistory;
use cmip_cvs::validate::{validate_output_dir, ValidationSeverity};
use cmip_cvs::vocab::{default_catalogue, tables::CATALOGUE_ORDER};

fn exported_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let history = CATALOGUE_ORDER
        .iter()
        .fold(VersionHistory::new("1"), |history, name| {
            history.with_revision(*name, "2022-02-10T00:00:00Z", "initialize")
        });
    let settings = ExportSettings::default().with_output_dir(dir.path());
    export::run(default_catalogue().unwrap(), &settings, &history).unwrap();
    dir
}

fn messages(report: &cmip_cvs::validate::ValidationReport, severity: ValidationSeverity) -> Vec<String> {
    report
        .diagnostics
        .iter()
        .filter(|diag| diag.severity == severity)
        .map(|diag| diag.message.clone())
        .collect()
}

#[test]
fn fresh_export_has_no_errors_or_warnings() {
    let dir = exported_dir();
    let report = validate_output_dir(&default_catalogue().unwrap(), dir.path());
    assert!(!report.has_errors(), "{:?}", report.diagnostics);
    assert_eq!(report.count(ValidationSeverity::Warning), 0);
    assert_eq!(
        report.count(ValidationSeverity::Info),
        CATALOGUE_ORDER.len(),
        "previous_commit is null in every document"
    );
}

#[test]
fn unsorted_keys_are_errors() {
    let dir = exported_dir();
    let path = dir.path().join("CMIP6_realm.json");
    let raw = fs::read_to_string(&path).unwrap();
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let unsorted = format!(
        "{{\"version_metadata\":{},\"realm\":{}}}",
        document["version_metadata"], document["realm"]
    );
    fs::write(&path, unsorted).unwrap();

    let report = validate_output_dir(&default_catalogue().unwrap(), dir.path());
    let errors = messages(&report, ValidationSeverity::Error);
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(errors[0].contains("'realm' is not sorted after 'version_metadata'"));
}

#[test]
fn stale_table_data_is_a_warning() {
    let dir = exported_dir();
    let path = dir.path().join("mip_era.json");
    let raw = fs::read_to_string(&path).unwrap();
    fs::write(&path, raw.replace("\"CMIP3\"", "\"CMIP4\"")).unwrap();

    let report = validate_output_dir(&default_catalogue().unwrap(), dir.path());
    assert!(!report.has_errors(), "{:?}", report.diagnostics);
    let warnings = messages(&report, ValidationSeverity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("'mip_era' differs"));
}

#[test]
fn extra_top_level_keys_and_missing_envelope_fields_are_errors() {
    let dir = exported_dir();
    let path = dir.path().join("CMIP6_frequency.json");
    fs::write(
        &path,
        r#"{"extra":1,"frequency":{},"version_metadata":{"author":"x"}}"#,
    )
    .unwrap();

    let report = validate_output_dir(&default_catalogue().unwrap(), dir.path());
    let errors = messages(&report, ValidationSeverity::Error);
    assert!(errors.iter().any(|msg| msg.contains("expected top-level keys")));
    assert!(errors
        .iter()
        .any(|msg| msg.contains("missing 'frequency_CV_note'")));
    assert!(errors
        .iter()
        .any(|msg| msg.contains("missing 'CV_collection_modified'")));
}

#[test]
fn non_ascii_documents_are_errors() {
    let dir = exported_dir();
    let path = dir.path().join("CMIP6_realm.json");
    let raw = fs::read_to_string(&path).unwrap();
    fs::write(&path, raw.replace("Sea Ice", "Sea Ice \u{2744}")).unwrap();

    let report = validate_output_dir(&default_catalogue().unwrap(), dir.path());
    let errors = messages(&report, ValidationSeverity::Error);
    assert_eq!(errors, vec!["document contains non-ASCII bytes".to_string()]);
}
