//! Anti-ghosting for an unbuffered (diode-less) switch matrix.
//!
//! When three switches on the corners of a rectangle are closed the fourth
//! corner reads as closed too. A press is treated as a ghost whenever its
//! row and its column each already carry two or more closed switches. This
//! over-rejects some genuine multi-key presses but never lets the classic
//! rectangle ghost through.

use crate::dispatch::KeyAction;
use crate::geometry::MatrixCoord;
use crate::hal::MatrixSource;
use crate::keymap::{MAX_COLS, MAX_ROWS};
use tracing::warn;

/// A row or column with at least this many closed switches is "busy".
pub const GHOST_LINE_THRESHOLD: u8 = 2;

/// Closed-switch counts per row and per column of one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCounts {
    pub rows: [u8; MAX_ROWS],
    pub cols: [u8; MAX_COLS],
}

impl LineCounts {
    pub fn scan<M: MatrixSource + ?Sized>(matrix: &M) -> Self {
        let mut counts = Self {
            rows: [0; MAX_ROWS],
            cols: [0; MAX_COLS],
        };

        let rows = (matrix.rows() as usize).min(MAX_ROWS);
        let cols = (matrix.cols() as usize).min(MAX_COLS);
        for row in 0..rows {
            for col in 0..cols {
                if matrix.is_closed(MatrixCoord::new(row as u8, col as u8)) {
                    counts.rows[row] += 1;
                    counts.cols[col] += 1;
                }
            }
        }
        counts
    }

    pub fn row(&self, row: u8) -> u8 {
        self.rows.get(row as usize).copied().unwrap_or(0)
    }

    pub fn col(&self, col: u8) -> u8 {
        self.cols.get(col as usize).copied().unwrap_or(0)
    }

    pub fn is_ghost(&self, coord: MatrixCoord) -> bool {
        self.row(coord.row) >= GHOST_LINE_THRESHOLD && self.col(coord.col) >= GHOST_LINE_THRESHOLD
    }
}

/// True when `matrix` shows the pressed coordinate in a busy row and a busy
/// column.
pub fn is_ghost<M: MatrixSource + ?Sized>(matrix: &M, coord: MatrixCoord) -> bool {
    LineCounts::scan(matrix).is_ghost(coord)
}

/// Decides whether a press at `coord` should reach the dispatcher.
///
/// Only call this for presses. Releases bypass the filter so a key can
/// never get stuck down. `attempted` is only used for the diagnostic.
pub fn should_accept<M: MatrixSource + ?Sized>(
    matrix: &M,
    coord: MatrixCoord,
    attempted: &KeyAction,
) -> bool {
    let counts = LineCounts::scan(matrix);
    if counts.is_ghost(coord) {
        warn!(
            "Ghosting detected: ignoring {} at row {}, col {} (row closed={}, col closed={})",
            attempted,
            coord.row,
            coord.col,
            counts.row(coord.row),
            counts.col(coord.col)
        );
        return false;
    }
    true
}
