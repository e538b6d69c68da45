//! Item property providers
//!
//! Stock override predicates compare a numeric item property against a
//! threshold. Providers are looked up by identifier.

use crate::context::EvalContext;
use chime_core::Identifier;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type PropertyFn = Arc<dyn Fn(&EvalContext<'_>) -> f32 + Send + Sync>;

/// Identifier-keyed numeric item properties
#[derive(Clone, Default)]
pub struct ItemPropertyRegistry {
    properties: HashMap<Identifier, PropertyFn>,
}

impl ItemPropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the `count` property
    pub fn with_builtin_properties() -> Self {
        Self::new().with_property("count", |ctx| ctx.item.count() as f32)
    }

    /// Add or replace a property provider
    pub fn with_property<F>(mut self, id: impl Into<Identifier>, provider: F) -> Self
    where
        F: Fn(&EvalContext<'_>) -> f32 + Send + Sync + 'static,
    {
        self.properties.insert(id.into(), Arc::new(provider));
        self
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.properties.contains_key(id)
    }

    /// Property value; unknown properties read as zero
    pub fn value(&self, id: &Identifier, ctx: &EvalContext<'_>) -> f32 {
        self.properties.get(id).map_or(0.0, |provider| provider(ctx))
    }
}

impl fmt::Debug for ItemPropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<String> = self.properties.keys().map(ToString::to_string).collect();
        ids.sort();
        f.debug_struct("ItemPropertyRegistry").field("properties", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ItemSnapshot;

    #[test]
    fn test_count_property() {
        let properties = ItemPropertyRegistry::with_builtin_properties();
        let item = ItemSnapshot::new(1, "Arrow").with_count(12);
        let ctx = EvalContext::new(&item);

        assert!(properties.contains(&Identifier::parse("minecraft:count")));
        assert_eq!(properties.value(&Identifier::parse("count"), &ctx), 12.0);
    }

    #[test]
    fn test_unknown_property_reads_zero() {
        let properties = ItemPropertyRegistry::new();
        let item = ItemSnapshot::new(1, "Bow");
        let ctx = EvalContext::new(&item);
        assert_eq!(properties.value(&Identifier::parse("pull"), &ctx), 0.0);
    }

    #[test]
    fn test_custom_property_replaces() {
        let properties = ItemPropertyRegistry::with_builtin_properties()
            .with_property("count", |_| 99.0);
        let item = ItemSnapshot::new(1, "Arrow");
        assert_eq!(
            properties.value(&Identifier::parse("count"), &EvalContext::new(&item)),
            99.0
        );
    }
}
