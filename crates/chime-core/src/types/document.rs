//! Pattern documents
//!
//! Pattern documents come out of an external JSON parser, so they are plain
//! `serde_json` values. Only the top-level predicate object of an override is
//! ever mutated, and only by the path-flattening preprocessor.

/// A declarative, user-authored condition tree
pub type PatternDocument = serde_json::Value;

/// The object form of a pattern document
pub type PatternObject = serde_json::Map<String, serde_json::Value>;

/// Short name of a document node's kind, used in diagnostics
pub fn kind_name(doc: &PatternDocument) -> &'static str {
    match doc {
        PatternDocument::Null => "null",
        PatternDocument::Bool(_) => "boolean",
        PatternDocument::Number(_) => "number",
        PatternDocument::String(_) => "string",
        PatternDocument::Array(_) => "array",
        PatternDocument::Object(_) => "object",
    }
}
