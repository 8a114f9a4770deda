//! Top-level sweep driver.
//!
//! Sizes run one after another. Within a size every worker is launched before
//! any is awaited, so all of a size's solver processes run concurrently while
//! the collector walks them in order.

use std::fmt;

use super::collector::DeadlineCollector;
use super::config::SweepConfig;
use super::errors::SweepResult;
use super::launcher::{SolverLauncher, WorkerHandle, WorkerLauncher};
use super::points::{self, ParameterPoint};
use super::reporter::{ConsoleReporter, SweepReporter};
use super::tally::{SizeReport, SweepSummary, SweepTally};

/// Stage of a single size's sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepPhase {
    Generating,
    Launching,
    Collecting,
    Reporting,
    Done,
}

impl fmt::Display for SweepPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SweepPhase::Generating => "generating",
            SweepPhase::Launching => "launching",
            SweepPhase::Collecting => "collecting",
            SweepPhase::Reporting => "reporting",
            SweepPhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Drives the generator, launcher, collector and reporter for each size.
pub struct SweepRunner<L, R> {
    config: SweepConfig,
    launcher: L,
    reporter: R,
}

impl SweepRunner<SolverLauncher, ConsoleReporter<std::io::Stdout>> {
    /// Runner that launches `config.solver` and reports to stdout.
    pub fn console(config: SweepConfig) -> Self {
        let launcher = SolverLauncher::new(config.solver());
        Self::new(config, launcher, ConsoleReporter::stdout())
    }
}

impl<L: WorkerLauncher, R: SweepReporter> SweepRunner<L, R> {
    pub fn new(config: SweepConfig, launcher: L, reporter: R) -> Self {
        Self {
            config,
            launcher,
            reporter,
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Sweep every configured size in ascending order.
    ///
    /// Stops at the first fatal error; timed-out workers are not errors.
    pub async fn run(&mut self) -> SweepResult<SweepSummary> {
        let mut summary = SweepSummary::default();
        for size in self.config.sizes() {
            let report = self.run_size(size).await?;
            summary.sizes.push(report);
        }

        tracing::info!(
            sizes = summary.sizes.len(),
            total = summary.total(),
            failed = summary.failed(),
            "sweep finished"
        );
        self.reporter.on_sweep_complete(&summary)?;
        Ok(summary)
    }

    /// Sweep a single board size.
    #[tracing::instrument(skip_all, fields(size = size))]
    pub async fn run_size(&mut self, size: usize) -> SweepResult<SizeReport> {
        tracing::debug!(phase = %SweepPhase::Generating);
        let points: Vec<ParameterPoint> = points::points(size).collect();
        tracing::info!(points = points.len(), "sweeping board size");

        self.reporter.on_size_start(size)?;

        tracing::debug!(phase = %SweepPhase::Launching);
        let handles = self.launch_all(&points)?;

        tracing::debug!(phase = %SweepPhase::Collecting);
        let collector = DeadlineCollector::new(self.config.timeout);
        let mut tally = SweepTally::new(size, handles.len());
        collector.collect(handles, &mut tally, &mut self.reporter).await?;

        tracing::debug!(phase = %SweepPhase::Reporting);
        self.reporter.on_size_complete(&tally)?;

        tracing::debug!(phase = %SweepPhase::Done);
        let report = tally.finish();
        tracing::info!(
            succeeded = report.succeeded,
            failed = report.failed_points.len(),
            "board size done"
        );
        Ok(report)
    }

    // A failed launch drops the handles started so far, which kills them.
    fn launch_all(&self, points: &[ParameterPoint]) -> SweepResult<Vec<WorkerHandle>> {
        let mut handles = Vec::with_capacity(points.len());
        for &point in points {
            handles.push(self.launcher.launch(point)?);
        }
        Ok(handles)
    }
}
