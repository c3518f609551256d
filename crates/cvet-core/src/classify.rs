//! # Shape-Based Classification
//!
//! Infers a document's [`SchemaCategory`] from its top-level keys. No
//! explicit type tag is required or consulted: the shape of the document
//! is the discriminator.
//!
//! ## Ordering Invariant
//!
//! The probes run in a fixed order and the FIRST match wins. The
//! categories overlap by key (an agent document may legally carry a
//! `ruleset_name` alongside `jobs`), so reordering the probes changes
//! observable behavior. The order below is load-bearing; it matches the
//! precedence the schemas were designed around.

use serde_json::Value;

use crate::category::SchemaCategory;

/// Infer the schema category of a loaded document.
///
/// Returns `None` when the root is not an object or no discriminating
/// key is present. `None` is not an error here; the orchestrator decides
/// that an unclassifiable document is fatal.
///
/// Decision order (first match wins):
///
/// 1. `ruleset_name` → [`SchemaCategory::Ruleset`]
/// 2. `database` or `crawler` → [`SchemaCategory::Config`]
/// 3. `event_type` and `details` → [`SchemaCategory::Event`]
/// 4. `jobs` → [`SchemaCategory::Agent`]
/// 5. `source_name` → [`SchemaCategory::Source`]
pub fn classify(value: &Value) -> Option<SchemaCategory> {
    let root = value.as_object()?;

    if root.contains_key("ruleset_name") {
        Some(SchemaCategory::Ruleset)
    } else if root.contains_key("database") || root.contains_key("crawler") {
        Some(SchemaCategory::Config)
    } else if root.contains_key("event_type") && root.contains_key("details") {
        Some(SchemaCategory::Event)
    } else if root.contains_key("jobs") {
        Some(SchemaCategory::Agent)
    } else if root.contains_key("source_name") {
        Some(SchemaCategory::Source)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_each_category_classifies_from_minimal_shape() {
        let cases = [
            (json!({"ruleset_name": "x"}), SchemaCategory::Ruleset),
            (json!({"database": {}}), SchemaCategory::Config),
            (json!({"crawler": {}}), SchemaCategory::Config),
            (json!({"event_type": "e", "details": {}}), SchemaCategory::Event),
            (json!({"jobs": []}), SchemaCategory::Agent),
            (json!({"source_name": "s"}), SchemaCategory::Source),
        ];
        for (doc, expected) in cases {
            assert_eq!(classify(&doc), Some(expected), "doc: {doc}");
        }
    }

    #[test]
    fn test_ruleset_takes_precedence_over_agent() {
        // Both discriminators present: rule 1 beats rule 4.
        let doc = json!({"ruleset_name": "x", "jobs": []});
        assert_eq!(classify(&doc), Some(SchemaCategory::Ruleset));
    }

    #[test]
    fn test_config_takes_precedence_over_event() {
        let doc = json!({"crawler": {}, "event_type": "e", "details": {}});
        assert_eq!(classify(&doc), Some(SchemaCategory::Config));
    }

    #[test]
    fn test_event_requires_both_keys() {
        assert_eq!(classify(&json!({"event_type": "e"})), None);
        assert_eq!(classify(&json!({"details": {}})), None);
    }

    #[test]
    fn test_unrecognized_shape_is_none() {
        assert_eq!(classify(&json!({"name": "x", "version": 1})), None);
        assert_eq!(classify(&json!({})), None);
    }

    #[test]
    fn test_non_object_roots_are_none() {
        assert_eq!(classify(&json!([1, 2, 3])), None);
        assert_eq!(classify(&json!("ruleset_name")), None);
        assert_eq!(classify(&json!(42)), None);
        assert_eq!(classify(&json!(null)), None);
    }
}
