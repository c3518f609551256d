//! # cvet-core — Foundational Types for crawlervet
//!
//! This crate is the leaf of the workspace DAG. It defines the schema
//! category taxonomy, the shape-based classifier that assigns a category
//! to a loaded document, and the error types used by the whole pipeline.
//!
//! ## Key Design Principles
//!
//! 1. **One `SchemaCategory` enum.** Every schema-addressable location
//!    (local cache filename, remote URL) derives from it; no bare strings
//!    for category identifiers anywhere in the workspace.
//!
//! 2. **Classification is pure.** [`classify::classify`] inspects only the
//!    top-level keys of an already-parsed value; it performs no I/O and
//!    never fails — an unrecognizable shape is `None`, and turning that
//!    into a fatal condition is the orchestrator's decision.
//!
//! 3. **Structured errors.** All fatal conditions are variants of
//!    [`RunError`] with enough context to print a one-line diagnostic;
//!    nothing is stringly-typed at the point of failure.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cvet-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod classify;
pub mod error;

pub use category::{SchemaCategory, SCHEMA_CATEGORY_COUNT};
pub use classify::classify;
pub use error::{LoadError, RunError};
