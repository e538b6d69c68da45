//! Claimed predicate sets
//!
//! The typed conditions pulled out of one override's predicate document,
//! keyed by full predicate path.

use super::registry::PredicateEntry;
use crate::context::EvalContext;
use chime_core::PredicateValue;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone)]
struct ClaimedPredicate {
    entry: PredicateEntry,
    value: PredicateValue,
}

/// Parsed conditions attached to one override
#[derive(Debug, Clone, Default)]
pub struct ClaimedPredicateSet {
    predicates: BTreeMap<String, ClaimedPredicate>,
}

impl ClaimedPredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a parsed value under the entry's name, replacing any earlier one
    pub fn claim(&mut self, entry: &PredicateEntry, value: PredicateValue) {
        self.predicates.insert(
            entry.name().to_string(),
            ClaimedPredicate {
                entry: entry.clone(),
                value,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&PredicateValue> {
        self.predicates.get(name).map(|claimed| &claimed.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Claimed paths with their values, in path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PredicateValue)> {
        self.predicates
            .iter()
            .map(|(name, claimed)| (name.as_str(), &claimed.value))
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True when every claimed predicate passes; an empty set passes
    pub fn matches(&self, ctx: &EvalContext<'_>) -> bool {
        self.predicates.iter().all(|(name, claimed)| {
            let passed = claimed.entry.evaluate(ctx, &claimed.value);
            if !passed {
                debug!("Predicate '{}' did not match", name);
            }
            passed
        })
    }
}
