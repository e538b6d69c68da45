//! Chime Core - Core types and matching primitives for Chime item overrides
//!
//! This crate provides the building blocks shared across the Chime workspace:
//! - Pattern documents and the host attribute tree they are matched against
//! - Namespaced identifiers
//! - The range expression grammar and the structural matcher
//! - Predicate value kinds and their typed parsers

pub mod condition;
pub mod predicate;
pub mod types;

// Re-export commonly used types
pub use condition::{matches, matches_object, parse_range, Range, RangeNumber, RangeParseError};
pub use predicate::{PredicateType, PredicateValue, ValueKind, ValueParseError};
pub use types::{AttributeTree, Identifier, PatternDocument, PatternObject};
