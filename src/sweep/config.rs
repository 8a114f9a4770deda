//! Sweep configuration

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Solver binary used when none is configured (a debug build next to the harness).
pub const DEFAULT_SOLVER_PATH: &str = "./target/debug/tenxten";
/// Smallest board size swept by default.
pub const DEFAULT_MIN_SIZE: usize = 5;
/// Largest board size swept by default.
pub const DEFAULT_MAX_SIZE: usize = 20;
/// Per-worker deadline used by default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sweep configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Solver executable launched for every point
    pub solver: PathBuf,
    /// Smallest board size (inclusive)
    pub min_size: usize,
    /// Largest board size (inclusive)
    pub max_size: usize,
    /// How long each worker may run once the collector reaches it
    pub timeout: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            solver: PathBuf::from(DEFAULT_SOLVER_PATH),
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SweepConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the solver executable
    pub fn with_solver(mut self, solver: impl Into<PathBuf>) -> Self {
        self.solver = solver.into();
        self
    }

    /// Set the inclusive board-size range
    pub fn with_sizes(mut self, sizes: RangeInclusive<usize>) -> Self {
        self.min_size = *sizes.start();
        self.max_size = *sizes.end();
        self
    }

    /// Set the per-worker timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn solver(&self) -> &Path {
        &self.solver
    }

    /// Board sizes in sweep order
    pub fn sizes(&self) -> RangeInclusive<usize> {
        self.min_size..=self.max_size
    }

    /// Check the config for values the sweep cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_size == 0 {
            return Err("board size must be at least 1".to_string());
        }
        if self.min_size > self.max_size {
            return Err(format!(
                "empty size range: min size {} is greater than max size {}",
                self.min_size, self.max_size
            ));
        }
        if self.timeout.is_zero() {
            return Err("timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}
