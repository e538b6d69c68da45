//! Path-flattening preprocessor
//!
//! Walks an override's predicate object, joining nested keys with `/`, and
//! claims every leaf whose path names a registered predicate. The predicate
//! object is rebuilt afterwards with only the entries left for the stock
//! override parser:
//!
//! - a top-level entry holding an object is always dropped, whatever was
//!   claimed beneath it
//! - a top-level leaf is dropped only when it was claimed
//! - a leaf whose value fails to parse stays unclaimed
//!
//! `nbt` objects are never recursed into; the sub-document parser takes the
//! whole object as one value.

use chime_core::{PatternDocument, PatternObject};
use chime_runtime::{ClaimedPredicateSet, PredicateRegistry};
use log::debug;

/// Key whose object value is a single sub-document leaf
pub const NBT_KEY: &str = "nbt";

/// Flattens predicate objects against one registry
pub struct PredicateFlattener<'a> {
    registry: &'a PredicateRegistry,
}

impl<'a> PredicateFlattener<'a> {
    pub fn new(registry: &'a PredicateRegistry) -> Self {
        Self { registry }
    }

    /// Claim registered predicates and strip them from `object`
    pub fn flatten(&self, object: &mut PatternObject) -> ClaimedPredicateSet {
        let mut claimed = ClaimedPredicateSet::new();
        let mut retained = PatternObject::new();

        for (key, value) in std::mem::take(object) {
            let consumed = match &value {
                PatternDocument::Object(child) if key != NBT_KEY => {
                    self.walk(child, &key, &mut claimed);
                    true
                }
                leaf => self.claim(&key, leaf, &mut claimed),
            };
            if !consumed {
                retained.insert(key, value);
            }
        }

        *object = retained;
        claimed
    }

    fn walk(&self, object: &PatternObject, parent: &str, claimed: &mut ClaimedPredicateSet) {
        for (key, value) in object {
            let path = format!("{}/{}", parent, key);
            match value {
                PatternDocument::Object(child) if key != NBT_KEY => self.walk(child, &path, claimed),
                leaf => {
                    self.claim(&path, leaf, claimed);
                }
            }
        }
    }

    /// Parse and store one leaf; false when the path stays unclaimed
    fn claim(&self, path: &str, leaf: &PatternDocument, claimed: &mut ClaimedPredicateSet) -> bool {
        let Some(entry) = self.registry.lookup(path) else {
            return false;
        };

        match entry.parse(leaf) {
            Ok(value) => {
                debug!("Claimed predicate '{}' as {}", path, entry.kind());
                claimed.claim(entry, value);
                true
            }
            Err(e) => {
                debug!("Leaving predicate '{}' unclaimed: {}", path, e);
                false
            }
        }
    }
}

/// Flatten `object` against `registry`
pub fn flatten(object: &mut PatternObject, registry: &PredicateRegistry) -> ClaimedPredicateSet {
    PredicateFlattener::new(registry).flatten(object)
}
