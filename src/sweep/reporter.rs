//! Progress and summary output.
//!
//! ## SweepReporter Trait
//!
//! Reporting is separated from orchestration so the runner never writes
//! output directly. Reporters only observe; nothing they do feeds back into
//! control flow or the tally.

use std::io::{self, Write};

use super::tally::{Outcome, SweepSummary, SweepTally};

/// Separator printed after every size.
pub const SIZE_SEPARATOR: &str = "----------";

/// Receives sweep lifecycle events.
pub trait SweepReporter {
    /// Called before any worker of `size` is launched.
    fn on_size_start(&mut self, size: usize) -> io::Result<()>;

    /// Called after each worker is classified, in submission order.
    fn on_outcome(&mut self, tally: &SweepTally, outcome: &Outcome) -> io::Result<()>;

    /// Called once every worker of the size has been classified.
    fn on_size_complete(&mut self, tally: &SweepTally) -> io::Result<()>;

    /// Called after the last size.
    fn on_sweep_complete(&mut self, _summary: &SweepSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Plain-text reporter with a single rewritable status line per size.
///
/// ```text
/// size: 6
/// success: 5/6, failed: 1/6
/// FAILED:
/// 2 3
/// ----------
/// ```
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The status line for `tally`, without the leading carriage return.
pub fn status_line(tally: &SweepTally) -> String {
    format!(
        "success: {}/{}, failed: {}/{}",
        tally.succeeded(),
        tally.total(),
        tally.failed(),
        tally.total()
    )
}

impl<W: Write> SweepReporter for ConsoleReporter<W> {
    fn on_size_start(&mut self, size: usize) -> io::Result<()> {
        writeln!(self.out, "size: {}", size)?;
        self.out.flush()
    }

    fn on_outcome(&mut self, tally: &SweepTally, _outcome: &Outcome) -> io::Result<()> {
        write!(self.out, "\r{}", status_line(tally))?;
        self.out.flush()
    }

    fn on_size_complete(&mut self, tally: &SweepTally) -> io::Result<()> {
        writeln!(self.out)?;
        if tally.failed() > 0 {
            writeln!(self.out, "FAILED:")?;
            for point in tally.failed_points() {
                writeln!(self.out, "{}", point)?;
            }
        }
        writeln!(self.out, "{}", SIZE_SEPARATOR)?;
        self.out.flush()
    }
}
