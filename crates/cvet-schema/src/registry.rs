//! # Schema Registry
//!
//! The immutable per-run mapping from [`SchemaCategory`] to its parsed
//! schema document. Built once after cache warm-up, read-only for the
//! rest of the run.
//!
//! A category whose local file is absent simply has no entry — the
//! warm-up step tolerates fetch failures, so gaps are legal here and
//! only become fatal when [`SchemaRegistry::get`] is asked for the
//! missing category.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cvet_core::{RunError, SchemaCategory};
use serde_json::Value;

/// Read-only map from category to parsed schema document.
#[derive(Debug)]
pub struct SchemaRegistry {
    schema_dir: PathBuf,
    schemas: BTreeMap<SchemaCategory, Value>,
}

impl SchemaRegistry {
    /// Build the registry by reading each category's canonical schema
    /// file from `schema_dir`.
    ///
    /// Absent files leave a gap; present files must parse as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::SchemaDefinition`] if a schema file exists but
    /// cannot be read or is not valid JSON.
    pub fn load(schema_dir: impl AsRef<Path>) -> Result<Self, RunError> {
        let schema_dir = schema_dir.as_ref().to_path_buf();
        let mut schemas = BTreeMap::new();

        for category in SchemaCategory::all() {
            let path = schema_dir.join(category.schema_file_name());
            if !path.is_file() {
                continue;
            }
            let content =
                std::fs::read_to_string(&path).map_err(|e| RunError::SchemaDefinition {
                    category: *category,
                    reason: format!("cannot read {}: {e}", path.display()),
                })?;
            let value: Value =
                serde_json::from_str(&content).map_err(|e| RunError::SchemaDefinition {
                    category: *category,
                    reason: format!("invalid JSON in {}: {e}", path.display()),
                })?;
            schemas.insert(*category, value);
        }

        Ok(Self { schema_dir, schemas })
    }

    /// Returns the schema directory this registry was loaded from.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Look up the schema document for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::SchemaLookup`] if the category has no entry
    /// (its warm-up fetch most likely failed).
    pub fn get(&self, category: SchemaCategory) -> Result<&Value, RunError> {
        self.schemas
            .get(&category)
            .ok_or(RunError::SchemaLookup { category })
    }

    /// Whether `category` has a registered schema.
    pub fn contains(&self, category: SchemaCategory) -> bool {
        self.schemas.contains_key(&category)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True when no schemas are registered at all.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// True when every category has an entry.
    pub fn is_complete(&self) -> bool {
        self.schemas.len() == cvet_core::SCHEMA_CATEGORY_COUNT
    }

    /// Iterate over registered (category, schema) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SchemaCategory, &Value)> {
        self.schemas.iter().map(|(c, v)| (*c, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_schema(dir: &Path, category: SchemaCategory, schema: &Value) {
        std::fs::write(
            dir.join(category.schema_file_name()),
            serde_json::to_string(schema).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_load_with_gaps() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(dir.path(), SchemaCategory::Ruleset, &serde_json::json!({"type": "object"}));
        write_schema(dir.path(), SchemaCategory::Config, &serde_json::json!({"type": "object"}));

        let registry = SchemaRegistry::load(dir.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_complete());
        assert!(registry.contains(SchemaCategory::Ruleset));
        assert!(registry.get(SchemaCategory::Config).is_ok());
    }

    #[test]
    fn test_missing_category_is_lookup_error() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SchemaRegistry::load(dir.path()).unwrap();
        assert!(registry.is_empty());
        let err = registry.get(SchemaCategory::Agent).unwrap_err();
        assert!(
            matches!(err, RunError::SchemaLookup { category: SchemaCategory::Agent }),
            "got: {err}"
        );
    }

    #[test]
    fn test_malformed_schema_file_is_definition_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SchemaCategory::Event.schema_file_name()),
            "{not json",
        )
        .unwrap();
        let err = SchemaRegistry::load(dir.path()).unwrap_err();
        assert!(
            matches!(err, RunError::SchemaDefinition { category: SchemaCategory::Event, .. }),
            "got: {err}"
        );
    }

    #[test]
    fn test_complete_registry() {
        let dir = tempfile::tempdir().unwrap();
        for c in SchemaCategory::all() {
            write_schema(dir.path(), *c, &serde_json::json!({}));
        }
        let registry = SchemaRegistry::load(dir.path()).unwrap();
        assert!(registry.is_complete());
        assert_eq!(registry.iter().count(), cvet_core::SCHEMA_CATEGORY_COUNT);
    }
}
