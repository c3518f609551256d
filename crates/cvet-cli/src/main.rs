//! # cvet CLI Entry Point
//!
//! Parses arguments, initializes tracing, runs the pipeline, and maps
//! the outcome to the process exit code: 0 when every resolved file
//! validated (or the syntax-check fallback succeeded), 1 on any fatal
//! condition.

use std::process::ExitCode;

use clap::Parser;

use cvet_cli::Pipeline;

/// Validate crawler JSON/YAML configuration files against their schemas.
///
/// Accepts any mix of file paths, comma-joined lists, glob patterns
/// (quote them to keep the shell out of it), and directories. The schema
/// for each file is inferred from its top-level structure.
#[derive(Parser, Debug)]
#[command(name = "cvet", version, about)]
struct Cli {
    /// Files, directories, or glob patterns to validate.
    #[arg(required = true)]
    inputs: Vec<String>,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match Pipeline::new().run(&cli.inputs) {
        Ok(code) => ExitCode::from(code.clamp(0, u8::MAX as i32) as u8),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
