//! # Plugin Syntax-Check Fallback
//!
//! When input resolution produces no structured files but the repository
//! has a plugins directory, the run is delegated to the external
//! JavaScript syntax checker. The tool is opaque to us: we spawn it,
//! inherit its stdout/stderr, and adopt its exit status as our own.

use std::path::{Path, PathBuf};
use std::process::Command;

use cvet_core::RunError;

/// Default plugins directory checked for the fallback trigger.
const DEFAULT_PLUGINS_DIR: &str = "plugins";

/// Default command: the Node-based checker shipped alongside the plugins.
const DEFAULT_PROGRAM: &str = "node";
const DEFAULT_SCRIPT: &str = "check-js-syntax.js";

/// Handle to the external syntax-check collaborator.
#[derive(Debug, Clone)]
pub struct SyntaxCheck {
    plugins_dir: PathBuf,
    program: String,
    args: Vec<String>,
}

impl Default for SyntaxCheck {
    fn default() -> Self {
        Self {
            plugins_dir: PathBuf::from(DEFAULT_PLUGINS_DIR),
            program: DEFAULT_PROGRAM.to_string(),
            args: vec![DEFAULT_SCRIPT.to_string()],
        }
    }
}

impl SyntaxCheck {
    /// Fallback trigger over a specific plugins directory.
    pub fn new(plugins_dir: impl AsRef<Path>) -> Self {
        Self {
            plugins_dir: plugins_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Replace the spawned command. Used by tests.
    pub fn with_command(
        mut self,
        program: impl Into<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Self {
        self.program = program.into();
        self.args = args.into_iter().collect();
        self
    }

    /// Whether the fallback applies: the plugins directory exists.
    pub fn is_available(&self) -> bool {
        self.plugins_dir.is_dir()
    }

    /// Spawn the checker and wait for it; returns its exit code.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::SyntaxCheck`] only if the process cannot be
    /// spawned or waited on; a nonzero exit from the tool itself is a
    /// normal result, reported through the returned code.
    pub fn run(&self) -> Result<i32, RunError> {
        tracing::debug!(program = %self.program, "running external syntax check");
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|e| RunError::SyntaxCheck {
                reason: format!("{}: {e}", self.program),
            })?;
        // A signal-terminated child has no code; count that as failure.
        Ok(status.code().unwrap_or(1))
    }
}
