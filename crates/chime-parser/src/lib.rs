//! Chime Parser - Item model parsing for Chime
//!
//! This crate turns item model documents into override records:
//! - JSON and YAML model documents
//! - The path-flattening preprocessor that claims custom predicates
//! - The override list parser with stock property thresholds

pub mod document;
pub mod error;
pub mod flatten;
pub mod override_parser;

// Re-export main parser types
pub use document::{DocumentFormat, DocumentParser};
pub use error::{ParseError, Result};
pub use flatten::{flatten, PredicateFlattener, NBT_KEY};
pub use override_parser::OverrideParser;
