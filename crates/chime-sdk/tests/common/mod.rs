//! Common test utilities for SDK integration tests
//!
//! A small in-memory host: item, world and entity types implementing the
//! view traits the engine evaluates against.

#![allow(dead_code)]

use chime_core::{AttributeTree, Identifier};
use chime_runtime::context::{
    BlockTarget, DimensionProperties, EntityView, Hand, HitResult, ItemView, Position, WorldView,
};
use std::cell::Cell;
use std::collections::HashMap;

/// Item held by the test host
pub struct TestItem {
    pub id: u64,
    pub name: String,
    pub count: u32,
    pub tag: Option<AttributeTree>,
    pub mines: Vec<Identifier>,
}

impl TestItem {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            count: 1,
            tag: None,
            mines: Vec::new(),
        }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn tag(mut self, tag: AttributeTree) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn mines(mut self, block: &str) -> Self {
        self.mines.push(Identifier::parse(block));
        self
    }
}

impl ItemView for TestItem {
    fn stack_id(&self) -> u64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn count(&self) -> u32 {
        self.count
    }

    fn attributes(&self) -> Option<&AttributeTree> {
        self.tag.as_ref()
    }

    fn can_harvest(&self, block: &BlockTarget) -> bool {
        self.mines.contains(&block.id)
    }
}

/// World of the test host
pub struct TestWorld {
    pub dimension: &'static str,
    pub properties: DimensionProperties,
    pub raining: bool,
    pub thundering: bool,
    pub block_tags: HashMap<Identifier, Vec<Identifier>>,
}

impl TestWorld {
    pub fn overworld() -> Self {
        Self {
            dimension: "minecraft:overworld",
            properties: DimensionProperties::overworld(),
            raining: false,
            thundering: false,
            block_tags: HashMap::new(),
        }
    }

    pub fn nether() -> Self {
        Self {
            dimension: "minecraft:the_nether",
            properties: DimensionProperties::nether(),
            ..Self::overworld()
        }
    }

    pub fn raining(mut self) -> Self {
        self.raining = true;
        self
    }

    pub fn block_tag(mut self, tag: &str, blocks: &[&str]) -> Self {
        self.block_tags.insert(
            Identifier::parse(tag),
            blocks.iter().map(|b| Identifier::parse(b)).collect(),
        );
        self
    }
}

impl WorldView for TestWorld {
    fn dimension_id(&self) -> Identifier {
        Identifier::parse(self.dimension)
    }

    fn dimension(&self) -> DimensionProperties {
        self.properties
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
            .map_or(false, |blocks| blocks.contains(block))
    }

    fn entity_type_has_tag(&self, _entity_type: &Identifier, _tag: &Identifier) -> bool {
        false
    }
}

/// Entity of the test host
///
/// Counts line-of-sight queries so tests can check that nothing caches them.
pub struct TestEntity {
    pub position: Position,
    pub main_hand: Option<u64>,
    pub off_hand: Option<u64>,
    pub target: Option<HitResult>,
    pub raycasts: Cell<usize>,
}

impl TestEntity {
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Position::new(x, y, z),
            main_hand: None,
            off_hand: None,
            target: None,
            raycasts: Cell::new(0),
        }
    }

    pub fn main_hand(mut self, stack: u64) -> Self {
        self.main_hand = Some(stack);
        self
    }

    pub fn off_hand(mut self, stack: u64) -> Self {
        self.off_hand = Some(stack);
        self
    }

    pub fn looking_at(mut self, hit: HitResult) -> Self {
        self.target = Some(hit);
        self
    }
}

impl EntityView for TestEntity {
    fn position(&self) -> Position {
        self.position
    }

    fn attributes(&self) -> AttributeTree {
        AttributeTree::compound([
            ("Pos", AttributeTree::list([
                AttributeTree::Double(self.position.x),
                AttributeTree::Double(self.position.y),
                AttributeTree::Double(self.position.z),
            ])),
        ])
    }

    fn held_stack(&self, hand: Hand) -> Option<u64> {
        match hand {
            Hand::Main => self.main_hand,
            Hand::Off => self.off_hand,
        }
    }

    fn line_of_sight(&self) -> Option<HitResult> {
        self.raycasts.set(self.raycasts.get() + 1);
        self.target.clone()
    }
}

/// Item model with one override per custom predicate family
pub const LANTERN_MODEL: &str = r##"{
  "parent": "item/generated",
  "overrides": [
    {"predicate": {"dimension": {"id": "the_nether"}}, "model": "item/lantern_soul"},
    {"predicate": {"world": {"raining": true}, "entity": {"hand": "off"}}, "model": "item/lantern_wet"},
    {"predicate": {"entity": {"target_block": {"id": "#minecraft:logs", "can_mine": true}}}, "model": "item/lantern_lumber"},
    {"predicate": {"nbt": {"Lit": true}}, "model": "item/lantern_lit"},
    {"predicate": {"count": 4}, "model": "item/lantern_stack"}
  ]
}"##;

pub fn models(overrides: &[&chime_runtime::ItemOverride]) -> Vec<String> {
    overrides.iter().map(|o| o.model.to_string()).collect()
}
