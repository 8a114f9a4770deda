//! Deadline enforcement and classification.
//!
//! Handles are awaited strictly in submission order. Each one gets a fresh
//! deadline window that opens when the collector reaches it, not when the
//! worker was launched, so workers late in the list have usually been
//! running for a while before their window even starts.

use std::time::{Duration, Instant};

use super::errors::{SweepError, SweepResult};
use super::launcher::WorkerHandle;
use super::reporter::SweepReporter;
use super::tally::{Outcome, SweepTally};

/// Awaits workers against a fixed per-worker timeout.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineCollector {
    timeout: Duration,
}

impl DeadlineCollector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Wait for one worker, classify it and terminate it.
    ///
    /// The worker is terminated on every path. On a wait error the handle is
    /// dropped, which kills the process.
    pub async fn await_one(&self, mut handle: WorkerHandle) -> SweepResult<Outcome> {
        let point = handle.point();
        let window_start = Instant::now();

        let outcome = match tokio::time::timeout(self.timeout, handle.child_mut().wait()).await {
            Ok(Ok(status)) => {
                tracing::debug!(
                    row = point.row,
                    col = point.col,
                    size = point.size,
                    %status,
                    waited_ms = window_start.elapsed().as_millis() as u64,
                    "worker exited"
                );
                Outcome::Success
            }
            Ok(Err(source)) => return Err(SweepError::Wait { point, source }),
            Err(_) => {
                tracing::info!(
                    row = point.row,
                    col = point.col,
                    size = point.size,
                    running_ms = handle.started_at().elapsed().as_millis() as u64,
                    "worker missed its deadline"
                );
                Outcome::TimedOut(point)
            }
        };

        handle.terminate().await;
        Ok(outcome)
    }

    /// Classify every handle in order, recording into `tally` and notifying
    /// `reporter` after each one.
    pub async fn collect<R: SweepReporter + ?Sized>(
        &self,
        handles: Vec<WorkerHandle>,
        tally: &mut SweepTally,
        reporter: &mut R,
    ) -> SweepResult<()> {
        // on early return the remaining handles drop and their workers are killed
        for handle in handles {
            let outcome = self.await_one(handle).await?;
            tally.record(&outcome);
            reporter.on_outcome(tally, &outcome)?;
        }
        Ok(())
    }
}
