//! ChimeEngine
//!
//! Holds the predicate registry, the item property providers and the parsed
//! override lists of every loaded item model. Loading happens during startup
//! through `&mut self`; evaluation afterwards only reads.

use crate::error::{Result, SdkError};
use chime_core::Identifier;
use chime_parser::{DocumentFormat, DocumentParser, OverrideParser};
use chime_runtime::{EvalContext, ItemOverride, ItemPropertyRegistry, PredicateRegistry};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Item override engine
pub struct ChimeEngine {
    registry: Arc<PredicateRegistry>,
    properties: ItemPropertyRegistry,
    models: HashMap<Identifier, Vec<ItemOverride>>,
}

impl ChimeEngine {
    /// Create an engine with no models loaded
    pub fn new(registry: Arc<PredicateRegistry>, properties: ItemPropertyRegistry) -> Self {
        Self {
            registry,
            properties,
            models: HashMap::new(),
        }
    }

    /// Parse model text and store its overrides under `id`
    ///
    /// Replaces any overrides previously loaded for the same model. Returns
    /// the number of overrides parsed.
    pub fn load_model(&mut self, id: impl Into<Identifier>, text: &str) -> Result<usize> {
        let overrides = OverrideParser::new(&self.registry).parse(text)?;
        Ok(self.store(id.into(), overrides))
    }

    /// Load one model file; the model id is the file stem
    pub fn load_model_file(&mut self, path: impl AsRef<Path>) -> Result<Identifier> {
        let path = path.as_ref();
        debug!("Loading item model from: {}", path.display());

        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(Identifier::parse)
            .ok_or_else(|| SdkError::InvalidModelFile(path.display().to_string()))?;
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(DocumentFormat::from_extension)
            .ok_or_else(|| SdkError::InvalidModelFile(path.display().to_string()))?;

        let text = std::fs::read_to_string(path)?;
        let document = DocumentParser::parse_as(&text, format)?;
        let overrides = OverrideParser::new(&self.registry).parse_document(document)?;
        self.store(id.clone(), overrides);
        Ok(id)
    }

    /// Load every model file in a directory
    ///
    /// Files that fail to load are logged and skipped. Returns the number of
    /// files loaded.
    pub fn load_model_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        info!("Loading item models from directory: {}", dir.display());

        if !dir.is_dir() {
            return Err(SdkError::InvalidModelFile(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let mut loaded_count = 0;
        let mut error_count = 0;

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_model = path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(DocumentFormat::from_extension)
                    .is_some();
            if !is_model {
                continue;
            }

            match self.load_model_file(&path) {
                Ok(_) => loaded_count += 1,
                Err(e) => {
                    warn!("Failed to load {}: {}", path.display(), e);
                    error_count += 1;
                }
            }
        }

        if error_count > 0 {
            warn!(
                "Loaded {} model files with {} errors from: {}",
                loaded_count,
                error_count,
                dir.display()
            );
        } else {
            info!("Loaded {} model files from: {}", loaded_count, dir.display());
        }

        Ok(loaded_count)
    }

    fn store(&mut self, id: Identifier, overrides: Vec<ItemOverride>) -> usize {
        let count = overrides.len();
        info!("Loaded {} overrides for model {}", count, id);
        if self.models.insert(id.clone(), overrides).is_some() {
            debug!("Replaced previously loaded overrides for model {}", id);
        }
        count
    }

    /// Overrides of a model in document order; empty for unknown models
    pub fn overrides(&self, id: &Identifier) -> &[ItemOverride] {
        self.models.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Overrides of a model that apply to the given context, in document order
    pub fn matching_overrides(&self, id: &Identifier, ctx: &EvalContext<'_>) -> Vec<&ItemOverride> {
        self.overrides(id)
            .iter()
            .filter(|item_override| item_override.matches(ctx, &self.properties))
            .collect()
    }

    pub fn registry(&self) -> &Arc<PredicateRegistry> {
        &self.registry
    }

    pub fn properties(&self) -> &ItemPropertyRegistry {
        &self.properties
    }

    /// Ids of all loaded models, sorted
    pub fn model_ids(&self) -> Vec<&Identifier> {
        let mut ids: Vec<&Identifier> = self.models.keys().collect();
        ids.sort();
        ids
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
