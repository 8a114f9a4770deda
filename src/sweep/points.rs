//! Starting-position enumeration for one board size.
//!
//! The solver's board is symmetric under reflection across both axes and the
//! main diagonal, so every distinct start lies in the upper triangle of the
//! top-left quadrant. For a board of side `n` that quadrant has side
//! `ceil(n / 2)` and we keep only the cells with `row <= col`.

use std::fmt;
use std::iter::FusedIterator;

/// One solver invocation: a board size and a 1-based starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterPoint {
    pub size: usize,
    pub row: usize,
    pub col: usize,
}

impl ParameterPoint {
    pub fn new(size: usize, row: usize, col: usize) -> Self {
        Self { size, row, col }
    }
}

impl fmt::Display for ParameterPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Side length of the quadrant that contains every distinct start.
pub fn half_board(size: usize) -> usize {
    size.div_ceil(2)
}

/// Number of points [`points`] yields for `size`.
pub fn point_count(size: usize) -> usize {
    let half = half_board(size);
    half * (half + 1) / 2
}

/// Enumerate the starting positions for `size` in row-major order.
///
/// The returned iterator is lazy and cheap to clone; cloning it (or calling
/// this function again) restarts the sequence.
pub fn points(size: usize) -> SweepPoints {
    SweepPoints {
        size,
        half: half_board(size),
        row: 0,
        col: 0,
    }
}

/// Iterator over the points of one board size. See [`points`].
#[derive(Debug, Clone)]
pub struct SweepPoints {
    size: usize,
    half: usize,
    // zero-based cursor; `col` always satisfies `row <= col`
    row: usize,
    col: usize,
}

impl SweepPoints {
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Iterator for SweepPoints {
    type Item = ParameterPoint;

    fn next(&mut self) -> Option<ParameterPoint> {
        if self.row >= self.half {
            return None;
        }

        let point = ParameterPoint::new(self.size, self.row + 1, self.col + 1);

        self.col += 1;
        if self.col >= self.half {
            self.row += 1;
            self.col = self.row;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.row >= self.half {
            0
        } else {
            // rest of the current row plus every full row below it
            let rest_of_row = self.half - self.col;
            let below = self.half - self.row - 1;
            rest_of_row + below * (below + 1) / 2
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SweepPoints {}

impl FusedIterator for SweepPoints {}
