//! # Run Pipeline
//!
//! The sequential state machine behind the `cvet` binary:
//!
//! ```text
//! Idle -> ResolvingInputs -> WarmingCache -> ProcessingFile* -> Done(exit)
//!                 \
//!                  `-> (empty set) SyntaxCheckFallback -> Done(exit)
//! ```
//!
//! Files are processed in the resolved set's sorted order, strictly one
//! at a time: Load -> Classify -> Validate. The first fatal condition
//! ends the run; later files are not touched. This is a CI gate — one
//! violation blocks the pipeline, so exhaustive reporting buys nothing.
//!
//! Status lines for completed steps are printed to stdout as they
//! happen, so a file's output is visible before the next file starts.

use std::path::{Path, PathBuf};

use cvet_core::{classify, RunError, SchemaCategory};
use cvet_schema::{validate, Artifact, SchemaCache, SchemaRegistry};

use crate::resolve;
use crate::syntax::SyntaxCheck;

/// Default schema cache directory.
const DEFAULT_SCHEMA_DIR: &str = "schemas";

/// The validation run, configured with explicit locations so tests never
/// depend on the process working directory.
#[derive(Debug, Clone)]
pub struct Pipeline {
    schema_dir: PathBuf,
    cache: SchemaCache,
    syntax_check: SyntaxCheck,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Pipeline over the default locations (`./schemas`, `./plugins`).
    pub fn new() -> Self {
        Self {
            schema_dir: PathBuf::from(DEFAULT_SCHEMA_DIR),
            cache: SchemaCache::new(DEFAULT_SCHEMA_DIR),
            syntax_check: SyntaxCheck::default(),
        }
    }

    /// Use `schema_dir` for both the registry and the warm-up cache.
    pub fn with_schema_dir(mut self, schema_dir: impl AsRef<Path>) -> Self {
        self.schema_dir = schema_dir.as_ref().to_path_buf();
        self.cache = SchemaCache::new(&self.schema_dir);
        self
    }

    /// Replace the warm-up cache (tests point its sources at an
    /// unroutable address).
    pub fn with_cache(mut self, cache: SchemaCache) -> Self {
        self.cache = cache;
        self
    }

    /// Replace the syntax-check fallback.
    pub fn with_syntax_check(mut self, syntax_check: SyntaxCheck) -> Self {
        self.syntax_check = syntax_check;
        self
    }

    /// Run the whole pipeline over the caller's raw tokens.
    ///
    /// Returns the process exit code on orderly completion (0, or the
    /// syntax-check tool's code when the run was delegated).
    ///
    /// # Errors
    ///
    /// Any [`RunError`]: input resolution failure, the first per-file
    /// fatal condition, or an unspawnable syntax-check tool. All map to
    /// exit code 1.
    pub fn run<S: AsRef<str>>(&self, tokens: &[S]) -> Result<i32, RunError> {
        tracing::debug!("resolving inputs");
        let files = resolve::resolve(tokens)?;

        if files.is_empty() {
            return self.fallback();
        }

        tracing::debug!(files = files.len(), "warming schema cache");
        // Unconditional and for the full category set: all network I/O
        // happens up front, before any validation work.
        self.cache.ensure(SchemaCategory::all());

        let registry = SchemaRegistry::load(&self.schema_dir)?;
        tracing::debug!(schemas = registry.len(), "schema registry loaded");

        for file in &files {
            self.process_file(file, &registry)?;
        }

        Ok(0)
    }

    /// Branch taken when resolution yields nothing: delegate to the
    /// external syntax checker if its trigger directory exists, else the
    /// run failed for lack of input.
    fn fallback(&self) -> Result<i32, RunError> {
        if self.syntax_check.is_available() {
            println!("No JSON/YAML files resolved; delegating to plugin syntax check.");
            self.syntax_check.run()
        } else {
            Err(RunError::NoInputFiles)
        }
    }

    /// Load -> Classify -> Validate for one file. Fatal on any failure.
    fn process_file(&self, file: &Path, registry: &SchemaRegistry) -> Result<(), RunError> {
        let artifact = Artifact::load(file)?;

        let category = classify(&artifact.value).ok_or_else(|| RunError::Unclassifiable {
            path: file.to_path_buf(),
        })?;
        println!("Detected schema type: {category} for {}", file.display());

        validate(&artifact, category, registry)?;
        println!("Validation successful: {} is valid!", file.display());
        Ok(())
    }
}
