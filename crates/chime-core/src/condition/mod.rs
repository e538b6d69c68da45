//! Condition Matching Module
//!
//! This module provides the matching logic used by predicate evaluators:
//! - Range expressions for numeric bounds (`entity/y`, numeric leaves in `nbt`)
//! - Structural matching of a pattern document against an attribute tree
//!
//! # Range Syntax
//!
//! Checked in this order against the trimmed text:
//! ```text
//! <=N        at most N
//! <N         below N
//! >=N        at least N
//! >N         at least N (lower bound is inclusive, same as >=)
//! [A..B)     bracketed interval, `[`/`]` inclusive, `(`/`)` exclusive
//! A..B       closed interval
//! N          exactly N
//! ```
//!
//! # Structural Matching
//!
//! ```json
//! {
//!   "Damage": "0..10",
//!   "Unbreakable": null,
//!   "Enchantments": [{"id": "minecraft:sharpness"}]
//! }
//! ```
//! Object keys are a subset constraint, `null` means "must be absent", and
//! every array element must match at least one list element.

mod matcher;
mod range;

pub use matcher::{matches, matches_object};
pub use range::{parse_range, Range, RangeBound, RangeNumber, RangeParseError};
