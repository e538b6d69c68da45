//! Built-in predicate catalogue

use super::registry::{PredicateRegistry, RegistryBuilder};
use crate::context::{DimensionProperties, EvalContext, Hand, Position};
use crate::error::Result;
use chime_core::{matches_object, Identifier, PatternObject, Range};
use regex::Regex;
use tracing::info;

type DimensionFlag = fn(&DimensionProperties) -> bool;

type Axis = fn(&Position) -> f64;

/// Build a registry holding only the built-in predicates
pub fn build_registry() -> Result<PredicateRegistry> {
    Ok(register_builtins(RegistryBuilder::new())?.build())
}

/// Add the built-in predicates to a builder
pub fn register_builtins(builder: RegistryBuilder) -> Result<RegistryBuilder> {
    let mut builder = builder
        .register_typed::<PatternObject, _>("nbt", |ctx, pattern| {
            ctx.item
                .attributes()
                .map_or(false, |tree| matches_object(pattern, tree))
        })?
        .register_typed::<Regex, _>("name", |ctx, pattern| {
            pattern.is_match(&ctx.item.display_name())
        })?
        .register_typed::<Identifier, _>("dimension/id", |ctx, id| {
            ctx.world.map_or(false, |world| world.dimension_id() == *id)
        })?;

    let dimension_flags: [(&str, DimensionFlag); 9] = [
        ("dimension/has_sky_light", |d| d.has_sky_light),
        ("dimension/has_ceiling", |d| d.has_ceiling),
        ("dimension/ultrawarm", |d| d.ultrawarm),
        ("dimension/natural", |d| d.natural),
        ("dimension/has_ender_dragon_fight", |d| d.has_ender_dragon_fight),
        ("dimension/piglin_safe", |d| d.piglin_safe),
        ("dimension/bed_works", |d| d.bed_works),
        ("dimension/respawn_anchor_works", |d| d.respawn_anchor_works),
        ("dimension/has_raids", |d| d.has_raids),
    ];
    for (name, flag) in dimension_flags {
        builder = builder.register_typed::<bool, _>(name, move |ctx, expected| {
            ctx.world
                .map_or(false, |world| flag(&world.dimension()) == *expected)
        })?;
    }

    builder = builder
        .register_typed::<bool, _>("world/raining", |ctx, expected| {
            ctx.world.map_or(false, |world| world.is_raining() == *expected)
        })?
        .register_typed::<bool, _>("world/thundering", |ctx, expected| {
            ctx.world.map_or(false, |world| world.is_thundering() == *expected)
        })?
        .register_typed::<PatternObject, _>("entity/nbt", |ctx, pattern| {
            ctx.entity
                .map_or(false, |entity| matches_object(pattern, &entity.attributes()))
        })?;

    let axes: [(&str, Axis); 3] = [
        ("entity/x", |p| p.x),
        ("entity/y", |p| p.y),
        ("entity/z", |p| p.z),
    ];
    for (name, axis) in axes {
        builder = builder.register_typed::<Range<f32>, _>(name, move |ctx, range| {
            ctx.entity
                .map_or(false, |entity| range.contains(axis(&entity.position()) as f32))
        })?;
    }

    let builder = builder
        .register_typed::<String, _>("entity/hand", held_in_hand)?
        .register_typed::<String, _>("entity/target", |ctx, expected| {
            ctx.entity.map_or(false, |entity| {
                let kind = entity.line_of_sight().map_or("none", |hit| hit.kind_name());
                kind == expected.as_str()
            })
        })?
        .register_typed::<bool, _>("entity/target_block/can_mine", |ctx, expected| {
            ctx.entity.is_some() && ctx.item.can_harvest(&ctx.target_block()) == *expected
        })?
        .register_typed::<String, _>("entity/target_block/id", target_block_id)?
        .register_typed::<String, _>("entity/target_entity/id", target_entity_id)?
        .register_typed::<PatternObject, _>("entity/target_entity/nbt", |ctx, pattern| {
            ctx.target_entity()
                .map_or(false, |target| matches_object(pattern, &target.attributes))
        })?;

    info!("Registered {} built-in predicates", builder.len());
    Ok(builder)
}

fn held_in_hand(ctx: &EvalContext<'_>, expected: &String) -> bool {
    let Some(entity) = ctx.entity else {
        return false;
    };
    let stack = ctx.item.stack_id();
    let main = entity.held_stack(Hand::Main) == Some(stack);
    let off = entity.held_stack(Hand::Off) == Some(stack);

    match expected.as_str() {
        "main" => main,
        "off" => off,
        "either" => main || off,
        "neither" | "none" => !(main || off),
        _ => false,
    }
}

/// `#tag` tests tag membership, anything else is an identifier
enum IdQuery {
    Tag(Identifier),
    Exact(Identifier),
}

impl IdQuery {
    fn parse(text: &str) -> Self {
        match text.strip_prefix('#') {
            Some(tag) => IdQuery::Tag(Identifier::parse(tag)),
            None => IdQuery::Exact(Identifier::parse(text)),
        }
    }
}

fn target_block_id(ctx: &EvalContext<'_>, expected: &String) -> bool {
    if ctx.entity.is_none() {
        return false;
    }
    let block = ctx.target_block();

    match IdQuery::parse(expected) {
        IdQuery::Tag(tag) => ctx
            .world
            .map_or(false, |world| world.block_has_tag(&block.id, &tag)),
        IdQuery::Exact(id) => block.id == id,
    }
}

fn target_entity_id(ctx: &EvalContext<'_>, expected: &String) -> bool {
    let Some(target) = ctx.target_entity() else {
        return false;
    };

    match IdQuery::parse(expected) {
        IdQuery::Tag(tag) => ctx
            .world
            .map_or(false, |world| world.entity_type_has_tag(&target.entity_type, &tag)),
        IdQuery::Exact(id) => target.entity_type == id,
    }
}
