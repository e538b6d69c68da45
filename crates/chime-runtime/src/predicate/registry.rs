//! Predicate Registry Module
//!
//! Names map to a value kind and an evaluator. Registration happens on a
//! [`RegistryBuilder`] during startup; [`RegistryBuilder::build`] freezes the
//! table into a [`PredicateRegistry`] that is only ever read afterwards.

use super::builtin::build_registry;
use crate::context::EvalContext;
use crate::error::{Result, RuntimeError};
use chime_core::{PatternDocument, PredicateType, PredicateValue, ValueKind, ValueParseError};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Evaluator signature shared by every predicate
pub type Evaluator = Arc<dyn Fn(&EvalContext<'_>, &PredicateValue) -> bool + Send + Sync>;

/// One registered predicate
#[derive(Clone)]
pub struct PredicateEntry {
    name: String,
    kind: ValueKind,
    evaluator: Evaluator,
}

impl PredicateEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Parse a document leaf with this predicate's value parser
    pub fn parse(&self, leaf: &PatternDocument) -> std::result::Result<PredicateValue, ValueParseError> {
        self.kind.parse(leaf)
    }

    /// Run the evaluator; a value of the wrong kind never matches
    pub fn evaluate(&self, ctx: &EvalContext<'_>, value: &PredicateValue) -> bool {
        if value.kind() != self.kind {
            return false;
        }
        (self.evaluator)(ctx, value)
    }
}

impl fmt::Debug for PredicateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Mutable registration table used during startup
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, PredicateEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an evaluator over the raw predicate value
    ///
    /// A name already registered with another kind is a conflict. The same
    /// name and kind again replaces the earlier evaluator.
    pub fn register<F>(mut self, name: impl Into<String>, kind: ValueKind, evaluator: F) -> Result<Self>
    where
        F: Fn(&EvalContext<'_>, &PredicateValue) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        validate_name(&name)?;

        if let Some(existing) = self.entries.get(&name) {
            if existing.kind != kind {
                return Err(RuntimeError::RegistrationConflict {
                    name,
                    existing: existing.kind,
                    requested: kind,
                });
            }
            debug!("Replacing evaluator for predicate '{}'", name);
        }

        debug!("Registered predicate '{}' as {}", name, kind);
        let entry = PredicateEntry {
            name: name.clone(),
            kind,
            evaluator: Arc::new(evaluator),
        };
        self.entries.insert(name, entry);
        Ok(self)
    }

    /// Register an evaluator written against the value's payload type
    pub fn register_typed<T, F>(self, name: impl Into<String>, evaluator: F) -> Result<Self>
    where
        T: PredicateType,
        F: Fn(&EvalContext<'_>, &T) -> bool + Send + Sync + 'static,
    {
        self.register(name, T::KIND, move |ctx, value| {
            T::extract(value).map_or(false, |typed| evaluator(ctx, typed))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the table
    pub fn build(self) -> PredicateRegistry {
        debug!("Built predicate registry with {} entries", self.entries.len());
        PredicateRegistry {
            entries: self.entries,
        }
    }
}

/// Names are `/`-separated segments, none of them empty
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.split('/').any(str::is_empty) {
        return Err(RuntimeError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Immutable predicate table
pub struct PredicateRegistry {
    entries: HashMap<String, PredicateEntry>,
}

impl PredicateRegistry {
    /// Look up a predicate by its full path
    pub fn lookup(&self, name: &str) -> Option<&PredicateEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRegistry")
            .field("names", &self.names())
            .finish()
    }
}

static GLOBAL_REGISTRY: OnceCell<Arc<PredicateRegistry>> = OnceCell::new();

/// Install the process-wide registry
///
/// Succeeds once. Fails if a registry was installed before or the built-in
/// one was already initialized by [`global_registry`].
pub fn install_global_registry(registry: PredicateRegistry) -> Result<Arc<PredicateRegistry>> {
    let registry = Arc::new(registry);
    GLOBAL_REGISTRY
        .set(Arc::clone(&registry))
        .map_err(|_| RuntimeError::AlreadyInstalled)?;
    info!("Installed global predicate registry with {} entries", registry.len());
    Ok(registry)
}

/// The process-wide registry, initialized with the built-ins on first use
pub fn global_registry() -> Result<Arc<PredicateRegistry>> {
    GLOBAL_REGISTRY
        .get_or_try_init(|| -> Result<Arc<PredicateRegistry>> {
            let registry = build_registry()?;
            info!("Initialized global predicate registry with {} entries", registry.len());
            Ok(Arc::new(registry))
        })
        .map(Arc::clone)
}
