//! # cvet-cli — crawlervet Command-Line Interface
//!
//! The orchestration layer: turns a heterogeneous list of CLI tokens
//! into a sorted set of candidate files, warms the schema cache, and
//! runs the load → classify → validate pipeline over each file,
//! fail-fast, producing a single exit code for CI.
//!
//! ## Modules
//!
//! - `resolve` — input token expansion (files, comma lists, globs,
//!   directories)
//! - `syntax` — the external plugin syntax-check fallback
//! - `pipeline` — the sequential run state machine
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from pipeline logic; the pipeline is
//!   constructed with explicit paths so tests never depend on the
//!   process working directory.
//! - Per-file status lines go to stdout in processing order; a file's
//!   lines are flushed before the next file starts.

pub mod pipeline;
pub mod resolve;
pub mod syntax;

pub use pipeline::Pipeline;
