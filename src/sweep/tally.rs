//! Per-size result accounting.

use super::points::ParameterPoint;

/// Classification of one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The worker exited before its deadline, whatever its exit status.
    Success,
    /// The worker was still running when its deadline elapsed.
    TimedOut(ParameterPoint),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Running counts for the sweep of a single board size.
///
/// `submitted` counts classified workers, so
/// `succeeded + failed_points.len() == submitted` holds after every
/// [`record`](Self::record). `total` is the number of workers launched for the
/// size and is the denominator shown in progress output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepTally {
    size: usize,
    total: usize,
    submitted: usize,
    succeeded: usize,
    failed_points: Vec<ParameterPoint>,
}

impl SweepTally {
    pub fn new(size: usize, total: usize) -> Self {
        Self {
            size,
            total,
            submitted: 0,
            succeeded: 0,
            failed_points: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.submitted += 1;
        match outcome {
            Outcome::Success => self.succeeded += 1,
            Outcome::TimedOut(point) => self.failed_points.push(*point),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn submitted(&self) -> usize {
        self.submitted
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed_points.len()
    }

    /// Timed-out points in submission order.
    pub fn failed_points(&self) -> &[ParameterPoint] {
        &self.failed_points
    }

    pub fn is_complete(&self) -> bool {
        self.submitted == self.total
    }

    pub fn finish(self) -> SizeReport {
        SizeReport {
            size: self.size,
            total: self.total,
            succeeded: self.succeeded,
            failed_points: self.failed_points,
        }
    }
}

/// Final result of one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub size: usize,
    pub total: usize,
    pub succeeded: usize,
    pub failed_points: Vec<ParameterPoint>,
}

impl SizeReport {
    pub fn has_failures(&self) -> bool {
        !self.failed_points.is_empty()
    }
}

/// Results of a whole run, one report per size in sweep order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub sizes: Vec<SizeReport>,
}

impl SweepSummary {
    pub fn total(&self) -> usize {
        self.sizes.iter().map(|s| s.total).sum()
    }

    pub fn succeeded(&self) -> usize {
        self.sizes.iter().map(|s| s.succeeded).sum()
    }

    pub fn failed(&self) -> usize {
        self.sizes.iter().map(|s| s.failed_points.len()).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.sizes.iter().any(SizeReport::has_failures)
    }
}
