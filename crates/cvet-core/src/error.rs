//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout crawlervet. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every fatal condition has its own variant; the orchestrator aborts
//!   at the first occurrence and the variant's `Display` is the user
//!   diagnostic.
//! - Load failures are a focused sub-enum ([`LoadError`]) because the
//!   loader distinguishes four failure modes the caller may want to
//!   match on individually.
//! - The warm-up network failure is deliberately NOT an error type: the
//!   cache logs it and moves on, and the gap resurfaces later as
//!   [`RunError::SchemaLookup`] if a document of that category appears.

use std::path::PathBuf;
use thiserror::Error;

use crate::category::SchemaCategory;

/// Failure loading a single artifact file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported file format: {}", .path.display())]
    UnsupportedFormat {
        /// Path of the rejected file.
        path: PathBuf,
    },

    /// The document parsed successfully but holds no data (null or
    /// whitespace-only input). Distinct from [`LoadError::UnsupportedFormat`]
    /// so the diagnostic names the real problem.
    #[error("empty document: {} parses to no data", .path.display())]
    EmptyDocument {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// The file is not well-formed JSON or YAML.
    #[error("invalid {format} in {}: {reason}", .path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Which parser rejected it ("JSON" or "YAML").
        format: &'static str,
        /// Parser error message.
        reason: String,
    },

    /// The file could not be read at all.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error type for a validation run.
///
/// Every variant is pipeline-fatal: the run ends at the first occurrence
/// with exit code 1. See the crate docs for the non-fatal exception
/// (warm-up fetch failures).
#[derive(Error, Debug)]
pub enum RunError {
    /// Filesystem access failed during input resolution.
    #[error("input resolution failed: {0}")]
    Input(#[from] std::io::Error),

    /// An artifact file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The document's top-level shape matches no known category.
    #[error("could not determine schema type for {}; check the document structure", .path.display())]
    Unclassifiable {
        /// Path of the unclassifiable document.
        path: PathBuf,
    },

    /// A category identifier string did not name a known category.
    #[error("unknown schema category: {name:?}")]
    UnknownCategory {
        /// The unrecognized identifier.
        name: String,
    },

    /// No schema document is registered for the category, typically
    /// because the warm-up fetch failed and the local cache has a gap.
    #[error("no schema available for category '{category}' (is {file} missing from the schema directory?)", file = .category.schema_file_name())]
    SchemaLookup {
        /// Category with no registered schema.
        category: SchemaCategory,
    },

    /// The schema document itself is malformed and cannot be compiled.
    #[error("schema for category '{category}' is not a valid JSON Schema: {reason}")]
    SchemaDefinition {
        /// Category whose schema failed to compile.
        category: SchemaCategory,
        /// Compiler error message.
        reason: String,
    },

    /// The artifact violates its schema.
    #[error("validation error in {}: {message} (path: {instance_path})", .file.display())]
    Validation {
        /// The offending artifact file.
        file: PathBuf,
        /// Path from the document root to the violating node, rendered
        /// as ` -> `-joined segments, or `Root` for a top-level violation.
        instance_path: String,
        /// First violation's message.
        message: String,
    },

    /// Input resolution produced no files and no syntax-check fallback
    /// was available.
    #[error("no files provided for validation")]
    NoInputFiles,

    /// The external syntax-check tool could not be spawned.
    #[error("failed to run syntax check tool: {reason}")]
    SyntaxCheck {
        /// Spawn/wait failure description.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_lookup_error_names_the_cache_file() {
        let err = RunError::SchemaLookup {
            category: SchemaCategory::Agent,
        };
        let msg = err.to_string();
        assert!(msg.contains("agent"), "got: {msg}");
        assert!(msg.contains("agent-schema.json"), "got: {msg}");
    }

    #[test]
    fn test_validation_error_carries_path_and_message() {
        let err = RunError::Validation {
            file: Path::new("bad.json").to_path_buf(),
            instance_path: "rules".to_string(),
            message: "\"not-an-array\" is not of type \"array\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bad.json"));
        assert!(msg.contains("path: rules"));
    }

    #[test]
    fn test_load_error_is_transparent_in_run_error() {
        let load = LoadError::EmptyDocument {
            path: Path::new("empty.yaml").to_path_buf(),
        };
        let text = load.to_string();
        let wrapped: RunError = load.into();
        assert_eq!(wrapped.to_string(), text);
    }
}
