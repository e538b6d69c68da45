//! Typed predicate values and their parsers

use crate::condition::{parse_range, Range, RangeParseError};
use crate::types::document::kind_name;
use crate::types::{Identifier, PatternDocument, PatternObject};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The kind of value a predicate is registered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
    /// Regular expression, matched against the whole input
    Pattern,
    Identifier,
    /// Float range expression
    Range,
    /// Pattern object matched structurally at evaluation time
    SubDocument,
}

/// A parsed predicate value
#[derive(Debug, Clone)]
pub enum PredicateValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Str(String),
    Pattern(Regex),
    Identifier(Identifier),
    Range(Range<f32>),
    SubDocument(PatternObject),
}

/// Value parse error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueParseError {
    /// Leaf is not the scalar kind the predicate expects
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Number does not fit the target type
    #[error("Number out of range for {target}: {value}")]
    OutOfRange { target: &'static str, value: String },

    /// Regular expression failed to compile
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Range expression failed to parse
    #[error(transparent)]
    InvalidRange(#[from] RangeParseError),
}

impl ValueKind {
    /// Name of the kind as written in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::Pattern => "pattern",
            ValueKind::Identifier => "identifier",
            ValueKind::Range => "range",
            ValueKind::SubDocument => "object",
        }
    }

    /// Parse a document leaf into this kind's value
    pub fn parse(&self, leaf: &PatternDocument) -> Result<PredicateValue, ValueParseError> {
        match self {
            ValueKind::Bool => leaf
                .as_bool()
                .map(PredicateValue::Bool)
                .ok_or_else(|| self.mismatch(leaf)),
            ValueKind::Int => {
                let n = leaf.as_i64().ok_or_else(|| self.mismatch(leaf))?;
                i32::try_from(n)
                    .map(PredicateValue::Int)
                    .map_err(|_| ValueParseError::OutOfRange {
                        target: "integer",
                        value: n.to_string(),
                    })
            }
            ValueKind::Float => leaf
                .as_f64()
                .map(|n| PredicateValue::Float(n as f32))
                .ok_or_else(|| self.mismatch(leaf)),
            ValueKind::Str => leaf
                .as_str()
                .map(|s| PredicateValue::Str(s.to_string()))
                .ok_or_else(|| self.mismatch(leaf)),
            ValueKind::Pattern => {
                let source = leaf.as_str().ok_or_else(|| self.mismatch(leaf))?;
                compile_full_match(source).map(PredicateValue::Pattern)
            }
            ValueKind::Identifier => leaf
                .as_str()
                .map(|s| PredicateValue::Identifier(Identifier::parse(s)))
                .ok_or_else(|| self.mismatch(leaf)),
            ValueKind::Range => {
                let text = leaf.as_str().ok_or_else(|| self.mismatch(leaf))?;
                Ok(PredicateValue::Range(parse_range::<f32>(text)?))
            }
            ValueKind::SubDocument => leaf
                .as_object()
                .map(|object| PredicateValue::SubDocument(object.clone()))
                .ok_or_else(|| self.mismatch(leaf)),
        }
    }

    fn mismatch(&self, leaf: &PatternDocument) -> ValueParseError {
        ValueParseError::TypeMismatch {
            expected: self.name(),
            actual: kind_name(leaf),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anchor a pattern so it must cover the whole input
fn compile_full_match(source: &str) -> Result<Regex, ValueParseError> {
    Regex::new(&format!("^(?:{})$", source)).map_err(|e| ValueParseError::InvalidPattern {
        pattern: source.to_string(),
        message: e.to_string(),
    })
}

impl PredicateValue {
    /// The kind this value was parsed as
    pub fn kind(&self) -> ValueKind {
        match self {
            PredicateValue::Bool(_) => ValueKind::Bool,
            PredicateValue::Int(_) => ValueKind::Int,
            PredicateValue::Float(_) => ValueKind::Float,
            PredicateValue::Str(_) => ValueKind::Str,
            PredicateValue::Pattern(_) => ValueKind::Pattern,
            PredicateValue::Identifier(_) => ValueKind::Identifier,
            PredicateValue::Range(_) => ValueKind::Range,
            PredicateValue::SubDocument(_) => ValueKind::SubDocument,
        }
    }
}

/// Rust types that are the payload of exactly one [`ValueKind`]
///
/// Lets evaluators be written against `bool`, `Identifier`, ... directly
/// while the registry still stores one uniform value type.
pub trait PredicateType: Send + Sync + 'static {
    const KIND: ValueKind;

    fn extract(value: &PredicateValue) -> Option<&Self>;
}

macro_rules! predicate_type {
    ($ty:ty, $variant:ident) => {
        impl PredicateType for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            fn extract(value: &PredicateValue) -> Option<&Self> {
                match value {
                    PredicateValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

predicate_type!(bool, Bool);
predicate_type!(i32, Int);
predicate_type!(f32, Float);
predicate_type!(String, Str);
predicate_type!(Regex, Pattern);
predicate_type!(Identifier, Identifier);
predicate_type!(Range<f32>, Range);
predicate_type!(PatternObject, SubDocument);
