//! CLI module for the sweep harness
//!
//! With no arguments the harness sweeps board sizes 5 through 20 against
//! `./target/debug/tenxten` with a 10 second per-worker deadline. Every flag
//! only overrides one of those defaults.
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use crate::sweep::SweepConfig;
use crate::sweep::config::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_SOLVER_PATH, DEFAULT_TIMEOUT};
use crate::version::SWEEP_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Run the tenxten solver from every distinct start across a range of board sizes
#[derive(Parser, Debug)]
#[command(name = "tenxten-sweep")]
#[command(version = SWEEP_VERSION)]
#[command(about = "Run the tenxten solver from every distinct start across a range of board sizes", long_about = None)]
pub struct Cli {
    /// Solver executable to launch
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SOLVER_PATH)]
    pub solver: PathBuf,

    /// Smallest board size to sweep
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MIN_SIZE)]
    pub min_size: usize,

    /// Largest board size to sweep
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: usize,

    /// Seconds each worker may run once it is being waited on
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl Cli {
    /// Build and validate the sweep configuration from parsed flags.
    pub fn to_config(&self) -> CliResult<SweepConfig> {
        let config = SweepConfig::new()
            .with_solver(&self.solver)
            .with_sizes(self.min_size..=self.max_size)
            .with_timeout(Duration::from_secs(self.timeout));
        config
            .validate()
            .map_err(|e| CliError::usage(format!("error: {}", e)))?;
        Ok(config)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.to_config()?;
    commands::run_sweep(config)
}

// ============================================================================
// Tests
// ============================================================================
