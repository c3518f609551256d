//! # cvet-schema — Schema Plumbing for crawlervet
//!
//! Everything between a file path and a validation verdict lives here:
//!
//! - [`artifact`] — loads one file into a [`serde_json::Value`] tree,
//!   dispatching on extension (YAML is converted to the JSON value model).
//! - [`registry`] — the immutable per-run map from [`SchemaCategory`] to
//!   its parsed schema document.
//! - [`cache`] — best-effort warm-up that fetches missing schema files
//!   from the upstream repository before any validation starts.
//! - [`validate`] — thin adapter over the `jsonschema` crate producing
//!   first-violation verdicts with a rendered instance path.
//!
//! ## Crate Policy
//!
//! - Validation never touches the network: cross-schema `$ref`s resolve
//!   against the registry, and anything unresolvable gets a permissive
//!   empty schema.
//! - The registry is constructed once, before any validator call, and is
//!   read-only afterwards.
//!
//! [`SchemaCategory`]: cvet_core::SchemaCategory

pub mod artifact;
pub mod cache;
pub mod registry;
pub mod validate;

pub use artifact::Artifact;
pub use cache::SchemaCache;
pub use registry::SchemaRegistry;
pub use validate::validate;
