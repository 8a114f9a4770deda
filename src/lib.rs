#![forbid(unsafe_code)]
//! tenxten sweep harness
//!
//! Runs the `tenxten` board-traversal solver from every distinct starting
//! cell across a range of board sizes and checks that each run finishes
//! within a per-worker deadline. The solver itself is an external program;
//! this crate only launches, times, kills and reports on it.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod sweep;
pub mod version;

pub use sweep::{
    ConsoleReporter, DeadlineCollector, LaunchError, Outcome, ParameterPoint, SolverLauncher, SweepConfig, SweepError,
    SweepReporter, SweepRunner, SweepSummary, SweepTally, WorkerHandle, WorkerLauncher,
};
