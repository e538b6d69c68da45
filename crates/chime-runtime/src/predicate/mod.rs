//! Predicate module
//!
//! Registry of named predicates, the built-in catalogue and the claimed sets
//! produced when an override's predicate document is preprocessed.

mod builtin;
mod claimed;
mod registry;

pub use builtin::{build_registry, register_builtins};
pub use claimed::ClaimedPredicateSet;
pub use registry::{
    global_registry, install_global_registry, Evaluator, PredicateEntry, PredicateRegistry,
    RegistryBuilder,
};
