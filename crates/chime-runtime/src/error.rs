//! Runtime error types

use chime_core::ValueKind;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A predicate name was registered twice with different value kinds
    #[error("Predicate '{name}' already registered as {existing}, cannot register as {requested}")]
    RegistrationConflict {
        name: String,
        existing: ValueKind,
        requested: ValueKind,
    },

    /// Predicate name is empty or malformed
    #[error("Invalid predicate name: '{0}'")]
    InvalidName(String),

    /// The process-wide registry was already installed
    #[error("Global predicate registry already installed")]
    AlreadyInstalled,
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
