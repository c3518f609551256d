//! # Artifact Loading
//!
//! Parses a single file into an in-memory value tree. The format is
//! chosen by extension alone: `.yaml`/`.yml` go through the YAML parser,
//! `.json` through the JSON parser, anything else is rejected before the
//! file is even read.
//!
//! YAML is converted into the `serde_json::Value` model so that the
//! classifier and the validator see one representation regardless of the
//! source format. Documents that parse to null (including whitespace-only
//! files) are rejected as [`LoadError::EmptyDocument`] — "no data" is a
//! distinct condition, not an empty mapping.

use std::path::{Path, PathBuf};

use cvet_core::LoadError;
use serde_json::Value;

/// A loaded document plus its originating path.
///
/// Created per file, handed to the classifier and the validator, then
/// dropped. Artifacts are never cached across files.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Where the document came from (used in every diagnostic).
    pub path: PathBuf,
    /// The parsed value tree, always in the JSON value model.
    pub value: Value,
}

impl Artifact {
    /// Load and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::UnsupportedFormat`] for any extension other than
    ///   `.json`, `.yaml`, `.yml`.
    /// - [`LoadError::Io`] if the file cannot be read.
    /// - [`LoadError::Parse`] if the content is malformed.
    /// - [`LoadError::EmptyDocument`] if the content parses to null.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let format = match ext {
            "yaml" | "yml" => "YAML",
            "json" => "JSON",
            _ => return Err(LoadError::UnsupportedFormat { path }),
        };

        let content = std::fs::read_to_string(&path).map_err(|e| LoadError::Io {
            path: path.clone(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Err(LoadError::EmptyDocument { path });
        }

        let value = match format {
            "YAML" => {
                let yaml: serde_yaml::Value =
                    serde_yaml::from_str(&content).map_err(|e| LoadError::Parse {
                        path: path.clone(),
                        format,
                        reason: e.to_string(),
                    })?;
                yaml_to_json_value(&yaml).map_err(|reason| LoadError::Parse {
                    path: path.clone(),
                    format,
                    reason,
                })?
            }
            _ => serde_json::from_str(&content).map_err(|e| LoadError::Parse {
                path: path.clone(),
                format,
                reason: e.to_string(),
            })?,
        };

        if value.is_null() {
            return Err(LoadError::EmptyDocument { path });
        }

        Ok(Self { path, value })
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// YAML has a richer type system than JSON (tags, non-string map keys),
/// but the documents we validate use only the JSON-compatible subset.
/// Non-string scalar keys are stringified; tags are stripped.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => {
            // Ignore YAML tags, just convert the inner value.
            yaml_to_json_value(&tagged.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "doc.json", r#"{"ruleset_name": "x", "rules": []}"#);
        let artifact = Artifact::load(&path).unwrap();
        assert_eq!(artifact.value["ruleset_name"], "x");
        assert_eq!(artifact.path, path);
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "doc.yaml", "database:\n  host: localhost\n  port: 5432\n");
        let artifact = Artifact::load(&path).unwrap();
        assert_eq!(artifact.value["database"]["port"], 5432);
    }

    #[test]
    fn test_yml_extension_is_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "doc.yml", "jobs: []\n");
        let artifact = Artifact::load(&path).unwrap();
        assert!(artifact.value["jobs"].is_array());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "doc.txt", "whatever");
        let err = Artifact::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }), "got: {err}");
    }

    #[test]
    fn test_missing_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got: {err}");
    }

    #[test]
    fn test_malformed_json_is_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.json", "{not json");
        let err = Artifact::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { format: "JSON", .. }), "got: {err}");
    }

    #[test]
    fn test_malformed_yaml_is_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.yaml", "a: [unclosed\nb: : :");
        let err = Artifact::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { format: "YAML", .. }), "got: {err}");
    }

    #[test]
    fn test_blank_file_is_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.yaml", "   \n\n");
        let err = Artifact::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::EmptyDocument { .. }), "got: {err}");
    }

    #[test]
    fn test_explicit_null_is_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "null.json", "null");
        let err = Artifact::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::EmptyDocument { .. }), "got: {err}");
    }

    #[test]
    fn test_empty_mapping_is_not_empty_document() {
        // An empty object is data (it will later fail classification);
        // only null is "no data".
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "obj.json", "{}");
        let artifact = Artifact::load(&path).unwrap();
        assert!(artifact.value.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_yaml_to_json_conversion() {
        let yaml_str = r#"
source_name: feeds
count: 42
ratio: 0.5
enabled: true
items:
  - one
  - two
1: numeric-key
"#;
        let yaml: serde_yaml::Value = serde_yaml::from_str(yaml_str).unwrap();
        let json = yaml_to_json_value(&yaml).unwrap();
        assert_eq!(json["source_name"], "feeds");
        assert_eq!(json["count"], 42);
        assert_eq!(json["ratio"], 0.5);
        assert_eq!(json["enabled"], true);
        assert_eq!(json["items"][1], "two");
        assert_eq!(json["1"], "numeric-key");
    }
}
