//! Worker process launch.
//!
//! ## WorkerLauncher Trait
//!
//! The runner never builds commands itself. It asks a [`WorkerLauncher`] for
//! one [`WorkerHandle`] per point, which keeps the solver's argument contract
//! in one place and lets tests substitute their own processes.
//!
//! Every handle is spawned with kill-on-drop, so a worker whose handle is
//! dropped (for example when a later launch fails and the sweep aborts) is
//! terminated along with it.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use tokio::process::{Child, Command};

use super::errors::LaunchError;
use super::points::ParameterPoint;

/// A running worker and the point it was started for.
#[derive(Debug)]
pub struct WorkerHandle {
    point: ParameterPoint,
    child: Child,
    started_at: Instant,
}

impl WorkerHandle {
    /// Spawn `command` as the worker for `point`.
    ///
    /// Standard output is discarded and the process is tied to the returned
    /// handle. Must be called from within a tokio runtime.
    pub fn spawn(point: ParameterPoint, command: &mut Command) -> Result<Self, LaunchError> {
        command.stdout(Stdio::null()).kill_on_drop(true);

        let child = match command.spawn() {
            Ok(child) => child,
            Err(source) => {
                return Err(LaunchError::Spawn {
                    program: PathBuf::from(command.as_std().get_program()),
                    point,
                    source,
                });
            }
        };

        tracing::debug!(row = point.row, col = point.col, size = point.size, pid = ?child.id(), "worker launched");

        Ok(Self {
            point,
            child,
            started_at: Instant::now(),
        })
    }

    pub fn point(&self) -> ParameterPoint {
        self.point
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// OS process id, or `None` once the process has been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    pub(crate) fn child_mut(&mut self) -> &mut Child {
        &mut self.child
    }

    /// Forcibly stop the worker and reap it.
    ///
    /// A worker that has already exited is left alone. Kill failures are
    /// logged and otherwise ignored.
    pub async fn terminate(mut self) {
        match self.child.try_wait() {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                if let Err(e) = self.child.kill().await {
                    tracing::warn!(
                        row = self.point.row,
                        col = self.point.col,
                        size = self.point.size,
                        error = %e,
                        "failed to kill worker"
                    );
                }
            }
        }
    }
}

/// Starts one worker process per parameter point.
pub trait WorkerLauncher {
    /// Start the worker for `point` without waiting for it.
    fn launch(&self, point: ParameterPoint) -> Result<WorkerHandle, LaunchError>;
}

/// Launches the board-traversal solver binary.
///
/// Invocation: `<solver> <row> <col> --board-size <size> --no-animation`.
#[derive(Debug, Clone)]
pub struct SolverLauncher {
    program: PathBuf,
}

impl SolverLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the solver for `point`.
    pub fn solver_args(point: ParameterPoint) -> Vec<String> {
        vec![
            point.row.to_string(),
            point.col.to_string(),
            "--board-size".to_string(),
            point.size.to_string(),
            "--no-animation".to_string(),
        ]
    }
}

impl WorkerLauncher for SolverLauncher {
    fn launch(&self, point: ParameterPoint) -> Result<WorkerHandle, LaunchError> {
        let mut command = Command::new(&self.program);
        command.args(Self::solver_args(point));
        WorkerHandle::spawn(point, &mut command)
    }
}
