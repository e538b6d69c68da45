//! Owned snapshots implementing the host views
//!
//! Useful for tools that evaluate overrides outside a live game, and for
//! tests. Each snapshot is a plain value assembled with `with_*` builders.

use super::host::{
    BlockTarget, DimensionProperties, EntityView, Hand, HitResult, ItemView, Position, WorldView,
};
use chime_core::{AttributeTree, Identifier};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Item state captured at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub stack_id: u64,
    pub display_name: String,
    pub count: u32,
    #[serde(default)]
    pub attributes: Option<AttributeTree>,
    /// Blocks this item can harvest
    #[serde(default)]
    pub harvestable: HashSet<Identifier>,
}

impl ItemSnapshot {
    pub fn new(stack_id: u64, display_name: impl Into<String>) -> Self {
        Self {
            stack_id,
            display_name: display_name.into(),
            count: 1,
            attributes: None,
            harvestable: HashSet::new(),
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeTree) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_harvestable(mut self, block: impl Into<Identifier>) -> Self {
        self.harvestable.insert(block.into());
        self
    }
}

impl ItemView for ItemSnapshot {
    fn stack_id(&self) -> u64 {
        self.stack_id
    }

    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn count(&self) -> u32 {
        self.count
    }

    fn attributes(&self) -> Option<&AttributeTree> {
        self.attributes.as_ref()
    }

    fn can_harvest(&self, block: &BlockTarget) -> bool {
        self.harvestable.contains(&block.id)
    }
}

/// World state captured at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub dimension_id: Identifier,
    pub dimension: DimensionProperties,
    #[serde(default)]
    pub raining: bool,
    #[serde(default)]
    pub thundering: bool,
    /// Block tag to member blocks
    #[serde(default)]
    pub block_tags: HashMap<Identifier, HashSet<Identifier>>,
    /// Entity type tag to member types
    #[serde(default)]
    pub entity_type_tags: HashMap<Identifier, HashSet<Identifier>>,
}

impl WorldSnapshot {
    pub fn new(dimension_id: impl Into<Identifier>, dimension: DimensionProperties) -> Self {
        Self {
            dimension_id: dimension_id.into(),
            dimension,
            raining: false,
            thundering: false,
            block_tags: HashMap::new(),
            entity_type_tags: HashMap::new(),
        }
    }

    pub fn overworld() -> Self {
        Self::new("minecraft:overworld", DimensionProperties::overworld())
    }

    pub fn nether() -> Self {
        Self::new("minecraft:the_nether", DimensionProperties::nether())
    }

    pub fn end() -> Self {
        Self::new("minecraft:the_end", DimensionProperties::end())
    }

    pub fn with_rain(mut self, raining: bool) -> Self {
        self.raining = raining;
        self
    }

    pub fn with_thunder(mut self, thundering: bool) -> Self {
        self.thundering = thundering;
        self
    }

    pub fn with_block_tag<I, B>(mut self, tag: impl Into<Identifier>, blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Identifier>,
    {
        self.block_tags
            .entry(tag.into())
            .or_default()
            .extend(blocks.into_iter().map(Into::into));
        self
    }

    pub fn with_entity_type_tag<I, E>(mut self, tag: impl Into<Identifier>, types: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Identifier>,
    {
        self.entity_type_tags
            .entry(tag.into())
            .or_default()
            .extend(types.into_iter().map(Into::into));
        self
    }
}

impl WorldView for WorldSnapshot {
    fn dimension_id(&self) -> Identifier {
        self.dimension_id.clone()
    }

    fn dimension(&self) -> DimensionProperties {
        self.dimension
    }

    fn is_raining(&self) -> bool {
        self.raining
    }

    fn is_thundering(&self) -> bool {
        self.thundering
    }

    fn block_has_tag(&self, block: &Identifier, tag: &Identifier) -> bool {
        self.block_tags
            .get(tag)
            .map_or(false, |members| members.contains(block))
    }

    fn entity_type_has_tag(&self, entity_type: &Identifier, tag: &Identifier) -> bool {
        self.entity_type_tags
            .get(tag)
            .map_or(false, |members| members.contains(entity_type))
    }
}

/// Entity state captured at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub position: Position,
    pub attributes: AttributeTree,
    #[serde(default)]
    pub main_hand: Option<u64>,
    #[serde(default)]
    pub off_hand: Option<u64>,
    /// `None` for entities other than the local player
    #[serde(default)]
    pub line_of_sight: Option<HitResult>,
}

impl EntitySnapshot {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            attributes: AttributeTree::Compound(HashMap::new()),
            main_hand: None,
            off_hand: None,
            line_of_sight: None,
        }
    }

    pub fn with_attributes(mut self, attributes: AttributeTree) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn holding(mut self, hand: Hand, stack_id: u64) -> Self {
        match hand {
            Hand::Main => self.main_hand = Some(stack_id),
            Hand::Off => self.off_hand = Some(stack_id),
        }
        self
    }

    pub fn looking_at(mut self, hit: HitResult) -> Self {
        self.line_of_sight = Some(hit);
        self
    }
}

impl EntityView for EntitySnapshot {
    fn position(&self) -> Position {
        self.position
    }

    fn attributes(&self) -> AttributeTree {
        self.attributes.clone()
    }

    fn held_stack(&self, hand: Hand) -> Option<u64> {
        match hand {
            Hand::Main => self.main_hand,
            Hand::Off => self.off_hand,
        }
    }

    fn line_of_sight(&self) -> Option<HitResult> {
        self.line_of_sight.clone()
    }
}
