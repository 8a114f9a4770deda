//! Parameter sweep over the `tenxten` solver
//!
//! For every board size in a range, the sweep starts one solver process per
//! distinct starting cell, gives each a bounded amount of wall-clock time to
//! finish, and reports which starts failed to finish in time.
//!
//! ## Pipeline (per size)
//!
//! 1. [`points`] - enumerate the distinct starts
//! 2. [`WorkerLauncher`] - start every worker, discarding its stdout
//! 3. [`DeadlineCollector`] - await workers in submission order, classify, kill
//! 4. [`SweepReporter`] - live status line and failure summary
//!
//! [`SweepRunner`] ties the stages together and walks the size range.

pub mod collector;
pub mod config;
pub mod errors;
pub mod launcher;
pub mod points;
pub mod reporter;
pub mod runner;
pub mod tally;

pub use collector::DeadlineCollector;
pub use config::SweepConfig;
pub use errors::{LaunchError, SweepError, SweepResult};
pub use launcher::{SolverLauncher, WorkerHandle, WorkerLauncher};
pub use points::{ParameterPoint, SweepPoints, point_count, points};
pub use reporter::{ConsoleReporter, SweepReporter};
pub use runner::{SweepPhase, SweepRunner};
pub use tally::{Outcome, SizeReport, SweepSummary, SweepTally};
