use crate::hal::MatrixSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One physical switch position in the scan matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatrixCoord {
    pub row: u8,
    pub col: u8,
}

impl MatrixCoord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for MatrixCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Owned rows x cols switch state. Used by the simulator and tests as the
/// matrix snapshot provider; firmware supplies its own `MatrixSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGrid {
    rows: u8,
    cols: u8,
    cells: Vec<bool>,
}

impl MatrixGrid {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows as usize * cols as usize],
        }
    }

    /// Builds a grid with the given coordinates closed. Out-of-range
    /// coordinates are dropped.
    pub fn with_closed(rows: u8, cols: u8, closed: &[MatrixCoord]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &coord in closed {
            grid.set(coord, true);
        }
        grid
    }

    fn index(&self, coord: MatrixCoord) -> Option<usize> {
        if coord.row < self.rows && coord.col < self.cols {
            Some(coord.row as usize * self.cols as usize + coord.col as usize)
        } else {
            None
        }
    }

    /// Returns false when the coordinate is outside the matrix.
    pub fn set(&mut self, coord: MatrixCoord, closed: bool) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = closed;
                true
            }
            None => false,
        }
    }
}

impl MatrixSource for MatrixGrid {
    fn rows(&self) -> u8 {
        self.rows
    }

    fn cols(&self) -> u8 {
        self.cols
    }

    fn is_closed(&self, coord: MatrixCoord) -> bool {
        self.index(coord).map(|i| self.cells[i]).unwrap_or(false)
    }
}
