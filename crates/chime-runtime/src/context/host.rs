//! Host views
//!
//! Traits the host implements for its item, world and entity handles, plus
//! the [`EvalContext`] that groups one evaluation's triple.

use chime_core::{AttributeTree, Identifier};
use serde::{Deserialize, Serialize};

/// The item instance being rendered
pub trait ItemView {
    /// Identity of this stack instance, used to tell which hand holds it
    fn stack_id(&self) -> u64;

    /// Display name as shown to the player
    fn display_name(&self) -> String;

    /// Number of items in the stack
    fn count(&self) -> u32;

    /// The item's attribute tree, if it carries one
    fn attributes(&self) -> Option<&AttributeTree>;

    /// Whether this item can harvest the given block
    fn can_harvest(&self, block: &BlockTarget) -> bool;
}

/// The world the item is rendered in
pub trait WorldView {
    fn dimension_id(&self) -> Identifier;

    fn dimension(&self) -> DimensionProperties;

    fn is_raining(&self) -> bool;

    fn is_thundering(&self) -> bool;

    /// Block tag membership; unknown tags hold nothing
    fn block_has_tag(&self, block: &Identifier, tag: &Identifier) -> bool;

    /// Entity type tag membership; unknown tags hold nothing
    fn entity_type_has_tag(&self, entity_type: &Identifier, tag: &Identifier) -> bool;
}

/// The entity holding or using the item
pub trait EntityView {
    fn position(&self) -> Position;

    /// Fresh attribute tree for the entity
    fn attributes(&self) -> AttributeTree;

    /// Stack id held in the given hand
    fn held_stack(&self, hand: Hand) -> Option<u64>;

    /// What the entity is looking at
    ///
    /// `None` when the host does not track line of sight for this entity
    /// (anything other than the locally controlled player). Resolved on
    /// every call; nothing caches it.
    fn line_of_sight(&self) -> Option<HitResult>;
}

/// Fixed properties of a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionProperties {
    pub has_sky_light: bool,
    pub has_ceiling: bool,
    pub ultrawarm: bool,
    pub natural: bool,
    pub has_ender_dragon_fight: bool,
    pub piglin_safe: bool,
    pub bed_works: bool,
    pub respawn_anchor_works: bool,
    pub has_raids: bool,
}

impl DimensionProperties {
    /// Properties of the overworld
    pub fn overworld() -> Self {
        Self {
            has_sky_light: true,
            has_ceiling: false,
            ultrawarm: false,
            natural: true,
            has_ender_dragon_fight: false,
            piglin_safe: false,
            bed_works: true,
            respawn_anchor_works: false,
            has_raids: true,
        }
    }

    /// Properties of the nether
    pub fn nether() -> Self {
        Self {
            has_sky_light: false,
            has_ceiling: true,
            ultrawarm: true,
            natural: false,
            has_ender_dragon_fight: false,
            piglin_safe: true,
            bed_works: false,
            respawn_anchor_works: true,
            has_raids: false,
        }
    }

    /// Properties of the end
    pub fn end() -> Self {
        Self {
            has_sky_light: false,
            has_ceiling: false,
            ultrawarm: false,
            natural: false,
            has_ender_dragon_fight: true,
            piglin_safe: false,
            bed_works: false,
            respawn_anchor_works: false,
            has_raids: true,
        }
    }
}

/// Entity position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Main,
    Off,
}

/// A targeted block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTarget {
    pub id: Identifier,
}

impl BlockTarget {
    pub fn new(id: impl Into<Identifier>) -> Self {
        Self { id: id.into() }
    }

    /// Stand-in when nothing solid is targeted
    pub fn air() -> Self {
        Self::new("minecraft:air")
    }
}

/// A targeted entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTarget {
    pub entity_type: Identifier,
    pub attributes: AttributeTree,
}

impl EntityTarget {
    pub fn new(entity_type: impl Into<Identifier>, attributes: AttributeTree) -> Self {
        Self {
            entity_type: entity_type.into(),
            attributes,
        }
    }
}

/// Result of a line-of-sight query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HitResult {
    Miss,
    Block(BlockTarget),
    Entity(EntityTarget),
}

impl HitResult {
    /// `miss`, `block` or `entity`
    pub fn kind_name(&self) -> &'static str {
        match self {
            HitResult::Miss => "miss",
            HitResult::Block(_) => "block",
            HitResult::Entity(_) => "entity",
        }
    }
}

/// Everything one evaluation can look at
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    pub item: &'a dyn ItemView,
    pub world: Option<&'a dyn WorldView>,
    pub entity: Option<&'a dyn EntityView>,
}

impl<'a> EvalContext<'a> {
    /// Context with only an item; outside a game session
    pub fn new(item: &'a dyn ItemView) -> Self {
        Self {
            item,
            world: None,
            entity: None,
        }
    }

    pub fn with_world(mut self, world: &'a dyn WorldView) -> Self {
        self.world = Some(world);
        self
    }

    pub fn with_entity(mut self, entity: &'a dyn EntityView) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Resolve the entity's line of sight
    pub fn target(&self) -> Option<HitResult> {
        self.entity.and_then(|entity| entity.line_of_sight())
    }

    /// The targeted block, air when no block is targeted
    pub fn target_block(&self) -> BlockTarget {
        match self.target() {
            Some(HitResult::Block(block)) => block,
            _ => BlockTarget::air(),
        }
    }

    /// The targeted entity, if any
    pub fn target_entity(&self) -> Option<EntityTarget> {
        match self.target() {
            Some(HitResult::Entity(entity)) => Some(entity),
            _ => None,
        }
    }
}

impl std::fmt::Debug for EvalContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvalContext")
            .field("item", &self.item.stack_id())
            .field("world", &self.world.map(|w| w.dimension_id()))
            .field("entity", &self.entity.map(|e| e.position()))
            .finish()
    }
}
