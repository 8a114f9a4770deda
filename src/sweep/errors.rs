//! Error types for the sweep pipeline.
//!
//! Only fatal conditions live here. A worker missing its deadline is an
//! expected result and is reported through [`Outcome`](super::Outcome).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::points::ParameterPoint;

/// A worker process could not be started.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to launch `{}` for start ({}) on a {}x{} board: {source}", .program.display(), .point, .point.size, .point.size)]
    Spawn {
        program: PathBuf,
        point: ParameterPoint,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn point(&self) -> ParameterPoint {
        match self {
            LaunchError::Spawn { point, .. } => *point,
        }
    }
}

/// Errors that abort a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("failed to wait on worker for start ({point}): {source}")]
    Wait {
        point: ParameterPoint,
        #[source]
        source: io::Error,
    },

    #[error("failed to write sweep report: {0}")]
    Output(#[from] io::Error),
}

pub type SweepResult<T> = Result<T, SweepError>;
