//! Type definitions for Chime
//!
//! This module contains the data the engine reads:
//! - Pattern documents supplied by item model files
//! - Attribute trees read from the live host state
//! - Namespaced identifiers

pub mod attribute;
pub mod document;
pub mod identifier;

pub use attribute::{AttributeTree, Numeric};
pub use document::{PatternDocument, PatternObject};
pub use identifier::{Identifier, DEFAULT_NAMESPACE};
