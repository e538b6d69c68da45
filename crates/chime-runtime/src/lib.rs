//! Chime Runtime - Predicate registry and evaluation for Chime
//!
//! This crate owns everything that runs against live host state:
//! - Host context traits (item, world, entity) and plain snapshot implementations
//! - The predicate registry and the built-in predicate catalogue
//! - Item property providers for stock override predicates
//! - Claimed predicate sets and override records

pub mod context;
pub mod error;
pub mod item_override;
pub mod predicate;
pub mod property;

// Re-export main types
pub use context::{
    BlockTarget, DimensionProperties, EntitySnapshot, EntityTarget, EntityView, EvalContext, Hand,
    HitResult, ItemSnapshot, ItemView, Position, WorldSnapshot, WorldView,
};
pub use error::{Result, RuntimeError};
pub use item_override::ItemOverride;
pub use predicate::{
    build_registry, global_registry, install_global_registry, register_builtins,
    ClaimedPredicateSet, PredicateEntry, PredicateRegistry, RegistryBuilder,
};
pub use property::ItemPropertyRegistry;
