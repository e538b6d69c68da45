//! Document Parser
//!
//! Reads item model text into pattern documents. JSON is the native format;
//! YAML is accepted for hand-written models and converted to the same tree.

use crate::error::{ParseError, Result};
use chime_core::types::document::kind_name;
use chime_core::{PatternDocument, PatternObject};

/// Source format of a model document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Guess the format from the first meaningful character
    pub fn detect(text: &str) -> Self {
        match text.trim_start().chars().next() {
            Some('{') | Some('[') => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }

    /// Format by file extension, `None` for anything unrecognized
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// Document parsing utilities
pub struct DocumentParser;

impl DocumentParser {
    /// Parse text, detecting its format
    pub fn parse(text: &str) -> Result<PatternDocument> {
        Self::parse_as(text, DocumentFormat::detect(text))
    }

    pub fn parse_as(text: &str, format: DocumentFormat) -> Result<PatternDocument> {
        match format {
            DocumentFormat::Json => Ok(serde_json::from_str(text)?),
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }

    /// Get an optional array field
    pub fn get_optional_array<'a>(
        obj: &'a PatternObject,
        field: &str,
    ) -> Result<Option<&'a Vec<PatternDocument>>> {
        match obj.get(field) {
            None | Some(PatternDocument::Null) => Ok(None),
            Some(PatternDocument::Array(items)) => Ok(Some(items)),
            Some(other) => Err(mismatch(field, "array", other)),
        }
    }

    /// Get a required string field
    pub fn get_string<'a>(obj: &'a PatternObject, field: &str) -> Result<&'a str> {
        let value = obj.get(field).ok_or_else(|| ParseError::MissingField {
            field: field.to_string(),
        })?;
        value.as_str().ok_or_else(|| mismatch(field, "string", value))
    }
}

pub(crate) fn mismatch(field: &str, expected: &str, actual: &PatternDocument) -> ParseError {
    ParseError::TypeMismatch {
        field: field.to_string(),
        expected: expected.to_string(),
        actual: kind_name(actual).to_string(),
    }
}
