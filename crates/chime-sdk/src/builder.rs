//! Builder pattern for ChimeEngine

use crate::config::EngineConfig;
use crate::engine::ChimeEngine;
use crate::error::Result;
use crate::logging::init_tracing;
use chime_core::Identifier;
use chime_runtime::{
    install_global_registry, register_builtins, EvalContext, ItemPropertyRegistry,
    PredicateRegistry, RegistryBuilder,
};
use std::path::PathBuf;
use std::sync::Arc;

type Registration =
    Box<dyn FnOnce(RegistryBuilder) -> chime_runtime::Result<RegistryBuilder> + Send>;

/// Builder for ChimeEngine
///
/// # Example
///
/// ```rust,ignore
/// use chime_sdk::ChimeEngineBuilder;
///
/// let engine = ChimeEngineBuilder::new()
///     .add_model_dir("assets/models/item")
///     .with_registration(|builder| {
///         builder.register_typed::<bool, _>("world/day", |ctx, expected| {
///             ctx.world.map_or(false, |world| world.dimension().has_sky_light == *expected)
///         })
///     })
///     .build()?;
/// ```
pub struct ChimeEngineBuilder {
    config: EngineConfig,
    registrations: Vec<Registration>,
    properties: ItemPropertyRegistry,
    registry: Option<Arc<PredicateRegistry>>,
}

impl ChimeEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::from_config(EngineConfig::new())
    }

    /// Start from a loaded configuration
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            registrations: Vec::new(),
            properties: ItemPropertyRegistry::with_builtin_properties(),
            registry: None,
        }
    }

    /// Add a model file
    pub fn add_model_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.model_files.push(path.into());
        self
    }

    /// Add a directory of model files
    pub fn add_model_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.model_dirs.push(path.into());
        self
    }

    /// Add model content directly (alternative to file path)
    pub fn add_model_content(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.config.model_contents.push((id.into(), content.into()));
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.config.enable_tracing = enable;
        self
    }

    /// Set the default log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    /// Install the built registry process-wide
    pub fn install_global_registry(mut self, install: bool) -> Self {
        self.config.install_global_registry = install;
        self
    }

    /// Register extra predicates after the built-ins
    pub fn with_registration<F>(mut self, registration: F) -> Self
    where
        F: FnOnce(RegistryBuilder) -> chime_runtime::Result<RegistryBuilder> + Send + 'static,
    {
        self.registrations.push(Box::new(registration));
        self
    }

    /// Add or replace an item property provider
    pub fn with_property<F>(mut self, id: impl Into<Identifier>, provider: F) -> Self
    where
        F: Fn(&EvalContext<'_>) -> f32 + Send + Sync + 'static,
    {
        self.properties = self.properties.with_property(id, provider);
        self
    }

    /// Use an already built registry; registrations are then ignored
    pub fn with_registry(mut self, registry: Arc<PredicateRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the engine and load every configured model
    pub fn build(self) -> Result<ChimeEngine> {
        let Self {
            config,
            registrations,
            properties,
            registry,
        } = self;

        if config.enable_tracing {
            if let Err(e) = init_tracing(&config.log_filter) {
                tracing::warn!("Tracing not initialized: {}", e);
            }
        }

        let registry = match registry {
            Some(registry) => {
                if !registrations.is_empty() {
                    tracing::warn!(
                        "Ignoring {} registrations, a prebuilt registry was supplied",
                        registrations.len()
                    );
                }
                registry
            }
            None => {
                let mut builder = register_builtins(RegistryBuilder::new())?;
                for registration in registrations {
                    builder = registration(builder)?;
                }
                let registry = builder.build();
                if config.install_global_registry {
                    install_global_registry(registry)?
                } else {
                    Arc::new(registry)
                }
            }
        };

        let mut engine = ChimeEngine::new(registry, properties);

        for path in &config.model_files {
            engine.load_model_file(path)?;
        }
        for dir in &config.model_dirs {
            engine.load_model_dir(dir)?;
        }
        for (id, content) in &config.model_contents {
            engine.load_model(Identifier::parse(id), content)?;
        }

        tracing::info!(
            "Chime engine ready: {} predicates, {} models",
            engine.registry().len(),
            engine.model_count()
        );
        Ok(engine)
    }
}

impl Default for ChimeEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chime_runtime::{build_registry, ItemSnapshot, RuntimeError};

    #[test]
    fn test_build_with_inline_model() {
        let engine = ChimeEngineBuilder::new()
            .add_model_content("bow", r#"{"overrides": [{"predicate": {"pulling": 1}, "model": "item/bow_pulling"}]}"#)
            .build()
            .unwrap();

        assert_eq!(engine.model_count(), 1);
        assert_eq!(engine.overrides(&Identifier::parse("bow")).len(), 1);
        assert!(engine.registry().contains("entity/hand"));
    }

    #[test]
    fn test_custom_registration_is_claimed() {
        let engine = ChimeEngineBuilder::new()
            .with_registration(|builder| {
                builder.register_typed::<String, _>("item/name_prefix", |ctx, prefix| {
                    ctx.item.display_name().starts_with(prefix.as_str())
                })
            })
            .add_model_content(
                "sword",
                r#"{"overrides": [{"predicate": {"item": {"name_prefix": "Ancient"}}, "model": "item/ancient_sword"}]}"#,
            )
            .build()
            .unwrap();

        let id = Identifier::parse("sword");
        let ancient = ItemSnapshot::new(1, "Ancient Blade");
        let modern = ItemSnapshot::new(1, "Modern Blade");
        assert_eq!(engine.matching_overrides(&id, &EvalContext::new(&ancient)).len(), 1);
        assert!(engine.matching_overrides(&id, &EvalContext::new(&modern)).is_empty());
    }

    #[test]
    fn test_conflicting_registration_fails_build() {
        let result = ChimeEngineBuilder::new()
            .with_registration(|builder| builder.register_typed::<i32, _>("world/raining", |_, _| true))
            .build();

        assert!(matches!(
            result,
            Err(crate::SdkError::RuntimeError(RuntimeError::RegistrationConflict { .. }))
        ));
    }

    #[test]
    fn test_custom_property() {
        let engine = ChimeEngineBuilder::new()
            .with_property("name_length", |ctx| ctx.item.display_name().len() as f32)
            .add_model_content("tag", r#"{"overrides": [{"predicate": {"name_length": 10}, "model": "item/long_tag"}]}"#)
            .build()
            .unwrap();

        let id = Identifier::parse("tag");
        let long = ItemSnapshot::new(1, "A very long name");
        let short = ItemSnapshot::new(1, "Tag");
        assert_eq!(engine.matching_overrides(&id, &EvalContext::new(&long)).len(), 1);
        assert!(engine.matching_overrides(&id, &EvalContext::new(&short)).is_empty());
    }

    #[test]
    fn test_prebuilt_registry() {
        let registry = Arc::new(build_registry().unwrap());
        let engine = ChimeEngineBuilder::new()
            .with_registry(Arc::clone(&registry))
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(engine.registry(), &registry));
    }
}
