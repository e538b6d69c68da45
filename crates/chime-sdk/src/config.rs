//! Configuration types for ChimeEngine

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "chime_sdk=info,chime_runtime=info,chime_parser=info";

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Item model files to load
    pub model_files: Vec<PathBuf>,

    /// Directories scanned for `.json`, `.yaml` and `.yml` item models
    pub model_dirs: Vec<PathBuf>,

    /// Model contents (id, content) - alternative to file paths
    #[serde(skip)]
    pub model_contents: Vec<(String, String)>,

    /// Install a tracing subscriber when the engine is built
    pub enable_tracing: bool,

    /// Default tracing filter directive
    pub log_filter: String,

    /// Also install the built registry as the process-wide registry
    pub install_global_registry: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            model_files: Vec::new(),
            model_dirs: Vec::new(),
            model_contents: Vec::new(),
            enable_tracing: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            install_global_registry: false,
        }
    }

    /// Load configuration from a file, with `CHIME_*` environment variables on top
    ///
    /// The file format follows its extension (toml, yaml, json).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .add_source(config::Environment::with_prefix("CHIME").try_parsing(true))
            .build()
            .map_err(|e| {
                SdkError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
            })?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| SdkError::ConfigError(format!("Failed to deserialize config: {}", e)))?;
        tracing::debug!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    /// Add a model file
    pub fn with_model_file(mut self, path: PathBuf) -> Self {
        self.model_files.push(path);
        self
    }

    /// Add a model directory
    pub fn with_model_dir(mut self, path: PathBuf) -> Self {
        self.model_dirs.push(path);
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = enable;
        self
    }

    /// Set the default log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Install the registry process-wide on build
    pub fn install_global_registry(mut self, install: bool) -> Self {
        self.install_global_registry = install;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_default() {
        let config = EngineConfig::default();

        assert!(config.model_files.is_empty());
        assert!(config.model_dirs.is_empty());
        assert!(config.model_contents.is_empty());
        assert!(!config.enable_tracing);
        assert!(!config.install_global_registry);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_engine_config_builder_methods() {
        let config = EngineConfig::new()
            .with_model_file(PathBuf::from("models/bow.json"))
            .with_model_dir(PathBuf::from("models"))
            .enable_tracing(true)
            .with_log_filter("debug")
            .install_global_registry(true);

        assert_eq!(config.model_files, vec![PathBuf::from("models/bow.json")]);
        assert_eq!(config.model_dirs.len(), 1);
        assert!(config.enable_tracing);
        assert_eq!(config.log_filter, "debug");
        assert!(config.install_global_registry);
    }

    #[test]
    fn test_engine_config_serde_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"enable_tracing": true}"#).unwrap();
        assert!(config.enable_tracing);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_load_missing_file() {
        let result = EngineConfig::load("does/not/exist.toml");
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }
}
