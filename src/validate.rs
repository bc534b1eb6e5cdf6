//! Structural checks over a written CV collection: every catalogued document is
//! present, ASCII, key-sorted at every depth, and carries a complete envelope.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde_json::Value;

use crate::export::{resolve_output_path, VERSION_METADATA_KEY};
use crate::vocab::VocabularyCatalogue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

const ENVELOPE_FIELDS: &[&str] = &[
    "CV_collection_modified",
    "CV_collection_version",
    "author",
    "institution_id",
    "previous_commit",
    "specs_doc",
];

pub fn validate_output_dir(catalogue: &VocabularyCatalogue, output_dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (name, table) in catalogue.iter() {
        let path = resolve_output_path(output_dir, name);
        let context = path.display().to_string();

        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) => {
                report.push(
                    ValidationSeverity::Error,
                    context,
                    format!("unable to read document: {err}"),
                );
                continue;
            }
        };

        if !raw.is_ascii() {
            report.push(
                ValidationSeverity::Error,
                &context,
                "document contains non-ASCII bytes",
            );
        }

        let mut order_violations = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_slice(&raw);
        let ordered = KeyOrderSeed {
            path: "$".to_string(),
            violations: &mut order_violations,
        }
        .deserialize(&mut deserializer)
        .and_then(|()| deserializer.end());
        if let Err(err) = ordered {
            report.push(
                ValidationSeverity::Error,
                context,
                format!("document is not valid JSON: {err}"),
            );
            continue;
        }
        for violation in order_violations {
            report.push(ValidationSeverity::Error, &context, violation);
        }

        let document: Value = match serde_json::from_slice(&raw) {
            Ok(document) => document,
            Err(err) => {
                report.push(
                    ValidationSeverity::Error,
                    context,
                    format!("document is not valid JSON: {err}"),
                );
                continue;
            }
        };
        let Some(object) = document.as_object() else {
            report.push(
                ValidationSeverity::Error,
                context,
                "top-level value is not an object",
            );
            continue;
        };

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut expected = vec![name, VERSION_METADATA_KEY];
        expected.sort_unstable();
        if keys != expected {
            report.push(
                ValidationSeverity::Error,
                &context,
                format!("expected top-level keys {expected:?}, found {keys:?}"),
            );
        }

        match (object.get(name), serde_json::to_value(table)) {
            (Some(written), Ok(current)) if *written != current => report.push(
                ValidationSeverity::Warning,
                &context,
                format!("'{name}' differs from the current table; re-run the export"),
            ),
            _ => {}
        }

        match object.get(VERSION_METADATA_KEY).and_then(Value::as_object) {
            Some(envelope) => {
                let dynamic = [format!("{name}_CV_modified"), format!("{name}_CV_note")];
                let required = ENVELOPE_FIELDS
                    .iter()
                    .map(|field| field.to_string())
                    .chain(dynamic);
                for field in required {
                    if !envelope.contains_key(&field) {
                        report.push(
                            ValidationSeverity::Error,
                            &context,
                            format!("version_metadata is missing '{field}'"),
                        );
                    }
                }
                if envelope.get("previous_commit").is_some_and(Value::is_null) {
                    report.push(
                        ValidationSeverity::Info,
                        &context,
                        "previous_commit is null",
                    );
                }
            }
            None => report.push(
                ValidationSeverity::Error,
                &context,
                "version_metadata is missing or not an object",
            ),
        }
    }
    report
}

/// Walks a JSON document in text order, recording any object key that does not
/// sort strictly after its predecessor.
struct KeyOrderSeed<'v> {
    path: String,
    violations: &'v mut Vec<String>,
}

impl<'de> DeserializeSeed<'de> for KeyOrderSeed<'_> {
    type Value = ();

    fn deserialize<D: de::Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for KeyOrderSeed<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<(), E> {
        Ok(())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<(), E> {
        Ok(())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<(), E> {
        Ok(())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<(), E> {
        Ok(())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<(), E> {
        Ok(())
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        let mut index = 0usize;
        while seq
            .next_element_seed(KeyOrderSeed {
                path: format!("{}[{index}]", self.path),
                violations: &mut *self.violations,
            })?
            .is_some()
        {
            index += 1;
        }
        Ok(())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        let mut previous: Option<String> = None;
        while let Some(key) = map.next_key::<String>()? {
            if let Some(prev) = &previous {
                if key <= *prev {
                    self.violations.push(format!(
                        "{}: key '{key}' is not sorted after '{prev}'",
                        self.path
                    ));
                }
            }
            map.next_value_seed(KeyOrderSeed {
                path: format!("{}.{key}", self.path),
                violations: &mut *self.violations,
            })?;
            previous = Some(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(raw: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        KeyOrderSeed {
            path: "$".to_string(),
            violations: &mut found,
        }
        .deserialize(&mut deserializer)
        .unwrap();
        found
    }

    #[test]
    fn sorted_documents_have_no_order_violations() {
        assert!(violations(r#"{"CV":1,"a":{"x":[{"m":null,"n":true}],"y":"s"}}"#).is_empty());
    }

    #[test]
    fn nested_out_of_order_keys_are_reported_with_their_path() {
        let found = violations(r#"{"a":{"list":[{"z":1,"b":2}]},"b":0}"#);
        assert_eq!(found.len(), 1);
        assert!(found[0].starts_with("$.a.list[0]:"), "{}", found[0]);
    }

    #[test]
    fn duplicate_keys_count_as_unsorted() {
        assert_eq!(violations(r#"{"a":1,"a":2}"#).len(), 1);
    }

    #[test]
    fn severities_render_lowercase() {
        let mut report = ValidationReport::default();
        report.push(ValidationSeverity::Warning, "CMIP6_realm.json", "stale");
        assert!(!report.has_errors());
        assert_eq!(
            report.diagnostics[0].to_string(),
            "[warning] CMIP6_realm.json: stale"
        );
    }
}
