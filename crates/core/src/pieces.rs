//! Pieces module - tetromino matrices and rotation
//!
//! Every kind has a square spawn matrix (2x2 for O, 4x4 for I, 3x3 otherwise).
//! Rotation is a plain matrix turn: the cell at `[row][col]` moves to
//! `[col][size - 1 - row]`. Kicks are horizontal only and are resolved by the
//! caller against the board (see [`try_rotate`]).

use crate::types::{PieceKind, BOARD_WIDTH, ROTATION_KICKS};

/// Largest matrix side (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// A square occupancy matrix, stored in a fixed 4x4 array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    /// `rows[row][col]`; only the top-left `size x size` block is meaningful.
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

const X: bool = true;
const O: bool = false;

impl Shape {
    const fn new(size: u8, rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, rows }
    }

    /// Spawn matrix for a kind.
    pub const fn spawn(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::new(4, [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]]),
            PieceKind::J => Self::new(3, [[X, O, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]]),
            PieceKind::L => Self::new(3, [[O, O, X, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]]),
            PieceKind::O => Self::new(2, [[X, X, O, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]]),
            PieceKind::S => Self::new(3, [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]]),
            PieceKind::T => Self::new(3, [[O, X, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]]),
            PieceKind::Z => Self::new(3, [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]]),
        }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at (col, row) is filled. Out-of-matrix cells are empty.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        let n = self.size as usize;
        col < n && row < n && self.rows[row][col]
    }

    /// Offsets `(dx, dy)` of the filled cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |row| {
            (0..n)
                .filter(move |&col| self.rows[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// The same matrix turned 90° clockwise.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (row, line) in self.rows.iter().enumerate().take(n) {
            for (col, &filled) in line.iter().enumerate().take(n) {
                rows[col][n - 1 - row] = filled;
            }
        }
        Self { size: self.size, rows }
    }

    /// Row offset of the lowest filled cell.
    pub fn bottom(&self) -> i8 {
        self.cells().map(|(_, dy)| dy).max().unwrap_or(0)
    }
}

/// Spawn column: the matrix is centred horizontally (rounded down).
pub fn spawn_x(shape: &Shape) -> i8 {
    ((BOARD_WIDTH - shape.size()) / 2) as i8
}

/// Rotate `shape` clockwise and look for a horizontal kick that fits.
///
/// Offsets are tried in [`ROTATION_KICKS`] order. Returns the rotated shape and
/// the accepted column offset, or `None` when every offset collides.
pub fn try_rotate(shape: &Shape, mut fits: impl FnMut(&Shape, i8) -> bool) -> Option<(Shape, i8)> {
    let rotated = shape.rotated_cw();
    ROTATION_KICKS
        .iter()
        .copied()
        .find(|&dx| fits(&rotated, dx))
        .map(|dx| (rotated, dx))
}
