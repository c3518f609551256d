//! # Validation Adapter
//!
//! Thin wrapper over the `jsonschema` crate. Given an artifact, a
//! category, and the registry, it compiles the category's schema and
//! reports the first violation with a rendered instance path.
//!
//! ## Schema Resolution
//!
//! Cross-schema `$ref`s are resolved locally against the registry via a
//! [`Retrieve`] implementation; URIs the registry does not know resolve
//! to a permissive empty schema. Validation therefore never performs
//! network I/O, even when a schema references a remote URI.

use std::collections::HashMap;

use cvet_core::{RunError, SchemaCategory};
use jsonschema::{Retrieve, Uri};
use serde_json::Value;

use crate::artifact::Artifact;
use crate::registry::SchemaRegistry;

/// Rendered location of a top-level violation.
const ROOT_MARKER: &str = "Root";

/// Resolves `$ref` URIs to schemas already loaded in the registry.
///
/// Registered keys per schema: the category's remote URL, its canonical
/// local filename, and the schema's own `$id` if it declares one. Any
/// other URI yields `{}` so validation proceeds without the network.
struct RegistryRetriever {
    schemas_by_uri: HashMap<String, Value>,
}

impl RegistryRetriever {
    fn new(registry: &SchemaRegistry) -> Self {
        let mut schemas_by_uri = HashMap::new();
        for (category, schema) in registry.iter() {
            schemas_by_uri.insert(category.remote_url(), schema.clone());
            schemas_by_uri.insert(category.schema_file_name(), schema.clone());
            if let Some(id) = schema.get("$id").and_then(|v| v.as_str()) {
                schemas_by_uri.insert(id.to_string(), schema.clone());
            }
        }
        Self { schemas_by_uri }
    }
}

impl Retrieve for RegistryRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();

        if let Some(value) = self.schemas_by_uri.get(uri_str) {
            return Ok(value.clone());
        }

        // Fall back to the bare filename for relative references.
        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
        if let Some(value) = self.schemas_by_uri.get(filename) {
            return Ok(value.clone());
        }

        // Unknown URIs (draft metaschemas, absent categories) get a
        // permissive schema so validation never hits the network.
        Ok(serde_json::json!({}))
    }
}

/// Validate `artifact` against the schema registered for `category`.
///
/// # Errors
///
/// - [`RunError::SchemaLookup`] if the registry has no entry for the
///   category.
/// - [`RunError::SchemaDefinition`] if the schema document cannot be
///   compiled.
/// - [`RunError::Validation`] with the first violation's instance path
///   and message if the artifact does not conform.
pub fn validate(
    artifact: &Artifact,
    category: SchemaCategory,
    registry: &SchemaRegistry,
) -> Result<(), RunError> {
    let schema = registry.get(category)?;

    let mut opts = jsonschema::options();
    opts.with_retriever(RegistryRetriever::new(registry));
    let validator = opts.build(schema).map_err(|e| RunError::SchemaDefinition {
        category,
        reason: e.to_string(),
    })?;

    // Pull the first violation's data out before returning so the
    // error iterator's borrow of `validator` ends here.
    let first = validator
        .iter_errors(&artifact.value)
        .next()
        .map(|v| (v.instance_path.to_string(), v.to_string()));

    match first {
        None => Ok(()),
        Some((pointer, message)) => Err(RunError::Validation {
            file: artifact.path.clone(),
            instance_path: render_instance_path(&pointer),
            message,
        }),
    }
}

/// Render a JSON-pointer instance path as ` -> `-joined segments, or
/// [`ROOT_MARKER`] when the violation is at the document root.
///
/// Pointer escapes (`~1` for `/`, `~0` for `~`) are undone per segment.
fn render_instance_path(pointer: &str) -> String {
    if pointer.is_empty() || pointer == "/" {
        return ROOT_MARKER.to_string();
    }
    pointer
        .trim_start_matches('/')
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(" -> ")
}
