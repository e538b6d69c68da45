//! Predicate value kinds
//!
//! Every registered predicate declares one [`ValueKind`]. The kind selects the
//! parser that turns a raw document leaf into a [`PredicateValue`]; evaluators
//! receive the parsed value and never see the raw document.

mod value;

pub use value::{PredicateType, PredicateValue, ValueKind, ValueParseError};
