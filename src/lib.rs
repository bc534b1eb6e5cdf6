//! Writer for the CMIP controlled-vocabulary (CV) JSON documents.
//!
//! The fixed tables in [`vocab::tables`] are stamped with provenance from a
//! [`revision::RevisionProvider`] and written one document per vocabulary by
//! [`export::run`].

pub mod cli;
pub mod error;
pub mod export;
pub mod logging;
pub mod revision;
pub mod timestamp;
pub mod validate;
pub mod vocab;

pub use error::ExportError;
