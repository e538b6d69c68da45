//! Item override records

use crate::context::EvalContext;
use crate::predicate::ClaimedPredicateSet;
use crate::property::ItemPropertyRegistry;
use chime_core::Identifier;
use std::collections::BTreeMap;

/// One entry of an item model's override list
#[derive(Debug, Clone)]
pub struct ItemOverride {
    /// Model used when this override applies
    pub model: Identifier,
    /// Stock property thresholds
    pub stock: BTreeMap<Identifier, f32>,
    /// Predicates claimed by the preprocessor
    pub custom: ClaimedPredicateSet,
    /// Set when part of the predicate could not be read; never matches
    pub disabled: bool,
}

impl ItemOverride {
    pub fn new(model: impl Into<Identifier>) -> Self {
        Self {
            model: model.into(),
            stock: BTreeMap::new(),
            custom: ClaimedPredicateSet::new(),
            disabled: false,
        }
    }

    pub fn with_stock(mut self, property: impl Into<Identifier>, threshold: f32) -> Self {
        self.stock.insert(property.into(), threshold);
        self
    }

    pub fn with_custom(mut self, custom: ClaimedPredicateSet) -> Self {
        self.custom = custom;
        self
    }

    /// Mark the override as never applying
    pub fn disable(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Every stock property reaches its threshold and every custom predicate passes
    pub fn matches(&self, ctx: &EvalContext<'_>, properties: &ItemPropertyRegistry) -> bool {
        !self.disabled
            && self
                .stock
                .iter()
                .all(|(property, threshold)| properties.value(property, ctx) >= *threshold)
            && self.custom.matches(ctx)
    }
}
