//! Controlled-vocabulary tables and the catalogue that orders them for export.
//! Built once at startup and passed by value into the exporter.

pub mod tables;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ExportError;

pub use tables::default_catalogue;

/// One controlled vocabulary. Serializes as its bare data: an object for
/// mappings, an array for the two list shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Vocabulary {
    /// Code -> description. Keys come out sorted.
    Mapping(BTreeMap<String, String>),
    /// Ordered codes without descriptions.
    Codes(Vec<String>),
    /// Free-text entries such as the license template.
    Text(Vec<String>),
}

impl Vocabulary {
    pub fn mapping(entries: &[(&str, &str)]) -> Self {
        Self::Mapping(
            entries
                .iter()
                .map(|(code, description)| (code.to_string(), description.to_string()))
                .collect(),
        )
    }

    pub fn codes(codes: &[&str]) -> Self {
        Self::Codes(codes.iter().map(|code| code.to_string()).collect())
    }

    pub fn text(lines: &[&str]) -> Self {
        Self::Text(lines.iter().map(|line| line.to_string()).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Mapping(entries) => entries.len(),
            Self::Codes(items) | Self::Text(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Codes(_) => "codes",
            Self::Text(_) => "text",
        }
    }
}

/// Immutable set of vocabularies plus the order they are exported in.
/// Every ordered name is guaranteed to have a table.
#[derive(Debug, Clone)]
pub struct VocabularyCatalogue {
    order: Vec<String>,
    tables: BTreeMap<String, Vocabulary>,
}

impl VocabularyCatalogue {
    /// Fails with a configuration error on the first ordered name that has no table.
    pub fn new(
        order: Vec<String>,
        tables: BTreeMap<String, Vocabulary>,
    ) -> Result<Self, ExportError> {
        if let Some(missing) = order.iter().find(|name| !tables.contains_key(*name)) {
            return Err(ExportError::MissingVocabulary {
                name: missing.clone(),
            });
        }
        Ok(Self { order, tables })
    }

    /// Names in processing order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn get(&self, name: &str) -> Result<&Vocabulary, ExportError> {
        self.tables
            .get(name)
            .ok_or_else(|| ExportError::MissingVocabulary {
                name: name.to_string(),
            })
    }

    /// (name, table) pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vocabulary)> {
        self.order
            .iter()
            .filter_map(|name| self.tables.get(name).map(|table| (name.as_str(), table)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
