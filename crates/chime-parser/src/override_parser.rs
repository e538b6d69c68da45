//! Override Parser
//!
//! Parses the `overrides` list of an item model document into
//! [`ItemOverride`] records. Each entry's `predicate` object goes through the
//! path-flattening preprocessor first; whatever it leaves behind must be a
//! stock property threshold. A leftover that is not a number disables its
//! override instead of failing the model.

use crate::document::{mismatch, DocumentParser};
use crate::error::{ParseError, Result};
use crate::flatten::PredicateFlattener;
use chime_core::{Identifier, PatternDocument, PatternObject};
use chime_runtime::{ItemOverride, PredicateRegistry};
use log::{debug, warn};

/// Override list parser bound to one predicate registry
pub struct OverrideParser<'a> {
    flattener: PredicateFlattener<'a>,
}

impl<'a> OverrideParser<'a> {
    pub fn new(registry: &'a PredicateRegistry) -> Self {
        Self {
            flattener: PredicateFlattener::new(registry),
        }
    }

    /// Parse item model text in either format
    pub fn parse(&self, text: &str) -> Result<Vec<ItemOverride>> {
        let document = DocumentParser::parse(text)?;
        self.parse_document(document)
    }

    /// Parse an already decoded item model document
    ///
    /// A model without an `overrides` list has no overrides.
    pub fn parse_document(&self, document: PatternDocument) -> Result<Vec<ItemOverride>> {
        let model = match document {
            PatternDocument::Object(model) => model,
            other => return Err(mismatch("model", "object", &other)),
        };

        let entries = match DocumentParser::get_optional_array(&model, "overrides")? {
            Some(entries) => entries,
            None => return Ok(Vec::new()),
        };

        let overrides = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| self.parse_entry(index, entry))
            .collect::<Result<Vec<_>>>()?;

        debug!("Parsed {} item overrides", overrides.len());
        Ok(overrides)
    }

    fn parse_entry(&self, index: usize, entry: &PatternDocument) -> Result<ItemOverride> {
        let field = format!("overrides[{}]", index);
        let entry = entry
            .as_object()
            .ok_or_else(|| mismatch(&field, "object", entry))?;

        let model = DocumentParser::get_string(entry, "model").map_err(|e| qualify(&field, e))?;

        let mut predicate = match entry.get("predicate") {
            None => PatternObject::new(),
            Some(PatternDocument::Object(predicate)) => predicate.clone(),
            Some(other) => return Err(mismatch(&format!("{}.predicate", field), "object", other)),
        };

        let custom = self.flattener.flatten(&mut predicate);
        let mut item_override = ItemOverride::new(Identifier::parse(model)).with_custom(custom);

        for (key, value) in &predicate {
            match value.as_f64() {
                Some(threshold) => {
                    item_override = item_override.with_stock(Identifier::parse(key), threshold as f32);
                }
                None => {
                    warn!(
                        "Disabling {}: predicate '{}' is not a number and no predicate claimed it",
                        field, key
                    );
                    item_override = item_override.disable();
                }
            }
        }

        Ok(item_override)
    }
}

/// Prefix a field error with the entry it came from
fn qualify(prefix: &str, error: ParseError) -> ParseError {
    match error {
        ParseError::MissingField { field } => ParseError::MissingField {
            field: format!("{}.{}", prefix, field),
        },
        ParseError::TypeMismatch {
            field,
            expected,
            actual,
        } => ParseError::TypeMismatch {
            field: format!("{}.{}", prefix, field),
            expected,
            actual,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chime_runtime::build_registry;

    #[test]
    fn test_parse_mixed_predicates() {
        let registry = build_registry().unwrap();
        let parser = OverrideParser::new(&registry);

        let overrides = parser
            .parse(
                r#"{
                    "parent": "item/generated",
                    "overrides": [
                        {"predicate": {"pulling": 1, "world": {"raining": true}}, "model": "item/bow_wet"},
                        {"model": "item/bow_plain"}
                    ]
                }"#,
            )
            .unwrap();

        assert_eq!(overrides.len(), 2);
        let wet = &overrides[0];
        assert_eq!(wet.model, Identifier::parse("item/bow_wet"));
        assert_eq!(wet.stock.get(&Identifier::parse("pulling")), Some(&1.0));
        assert!(wet.custom.contains("world/raining"));

        assert!(overrides[1].stock.is_empty());
        assert!(overrides[1].custom.is_empty());
    }

    #[test]
    fn test_unreadable_predicate_disables_only_its_override() {
        let registry = build_registry().unwrap();
        let parser = OverrideParser::new(&registry);

        let overrides = parser
            .parse(
                r#"{"overrides": [
                    {"predicate": {"world": {"raining": true}}, "model": "item/good"},
                    {"predicate": {"name": "(bad", "count": 2}, "model": "item/bad"}
                ]}"#,
            )
            .unwrap();

        assert_eq!(overrides.len(), 2);
        assert!(!overrides[0].disabled);
        assert!(overrides[1].disabled);
        assert!(!overrides[1].custom.contains("name"));
        assert_eq!(overrides[1].stock.get(&Identifier::parse("count")), Some(&2.0));
    }

    #[test]
    fn test_missing_model() {
        let registry = build_registry().unwrap();
        let parser = OverrideParser::new(&registry);

        let result = parser.parse(r#"{"overrides": [{"predicate": {}}]}"#);
        assert!(matches!(
            result,
            Err(ParseError::MissingField { field }) if field == "overrides[0].model"
        ));
    }

    #[test]
    fn test_model_without_overrides() {
        let registry = build_registry().unwrap();
        let parser = OverrideParser::new(&registry);
        assert!(parser.parse(r#"{"parent": "item/handheld"}"#).unwrap().is_empty());
        assert!(parser.parse("[]").is_err());
    }
}
