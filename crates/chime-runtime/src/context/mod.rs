//! Evaluation context module
//!
//! Evaluators see the host through three read-only views: the item being
//! rendered, the world it is rendered in and the entity holding it. World and
//! entity are optional; an evaluator that needs a missing one returns false.

mod host;
mod snapshot;

pub use host::{
    BlockTarget, DimensionProperties, EntityTarget, EntityView, EvalContext, Hand, HitResult,
    ItemView, Position, WorldView,
};
pub use snapshot::{EntitySnapshot, ItemSnapshot, WorldSnapshot};
