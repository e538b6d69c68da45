//! Chime SDK
//!
//! High-level API for loading item models and selecting the overrides that
//! apply to a live item, world and entity.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;

// Re-export main types
pub use builder::ChimeEngineBuilder;
pub use config::{EngineConfig, DEFAULT_LOG_FILTER};
pub use engine::ChimeEngine;
pub use error::{Result, SdkError};
pub use logging::init_tracing;

// Re-export commonly used types from dependencies
pub use chime_core::{AttributeTree, Identifier, PatternDocument};
pub use chime_runtime::{
    BlockTarget, DimensionProperties, EntityTarget, EntityView, EvalContext, Hand, HitResult,
    ItemOverride, ItemView, Position, PredicateRegistry, RegistryBuilder, WorldView,
};
