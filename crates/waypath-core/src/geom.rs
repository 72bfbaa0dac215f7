//! Geometry primitives: [`Cell`], [`CellKey`] and [`GridSize`].
//!
//! Cells are addressed as `(row, col)` with row growing down. [`GridSize`]
//! doubles as the cell codec: it maps every in-bounds cell to a compact
//! [`CellKey`] and back.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. Rows grow down, columns grow right.
///
/// Coordinates are signed so that neighbour offsets can step off the grid
/// and be rejected by [`GridSize::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four cardinal neighbours, in the order up, down, left, right.
    ///
    /// Search and maze carving both rely on this order for reproducible
    /// output.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` shares an edge with `self`.
    #[inline]
    pub fn is_adjacent_4(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// CellKey
// ---------------------------------------------------------------------------

/// Compact, unique encoding of an in-bounds cell: `row * cols + col`.
///
/// Keys are only meaningful together with the [`GridSize`] that produced
/// them. They order like a row-major scan of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CellKey(pub usize);

impl CellKey {
    /// The flat index this key stands for.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Grid extents: `rows × cols` cells, all coordinates in `[0, rows) × [0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub rows: i32,
    pub cols: i32,
}

impl GridSize {
    /// Create new extents. No validation; see [`is_valid`](Self::is_valid).
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Whether both dimensions are strictly positive.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.rows > 0 && self.cols > 0
    }

    /// Total number of cells (0 for invalid extents).
    #[inline]
    pub fn len(self) -> usize {
        if !self.is_valid() {
            return 0;
        }
        self.rows as usize * self.cols as usize
    }

    /// Whether the grid holds no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub const fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Encode an in-bounds cell as a key.
    ///
    /// Out-of-bounds cells are a caller bug; use
    /// [`try_encode`](Self::try_encode) when the cell is not known to be
    /// inside the grid.
    #[inline]
    pub fn encode(self, c: Cell) -> CellKey {
        debug_assert!(self.contains(c), "cell {c} outside {self}");
        CellKey(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Encode `c`, or `None` if it lies outside the grid.
    #[inline]
    pub fn try_encode(self, c: Cell) -> Option<CellKey> {
        if self.contains(c) {
            Some(self.encode(c))
        } else {
            None
        }
    }

    /// Decode a key produced by [`encode`](Self::encode).
    #[inline]
    pub fn decode(self, key: CellKey) -> Cell {
        debug_assert!(key.0 < self.len(), "key {key} outside {self}");
        let cols = self.cols as usize;
        Cell::new((key.0 / cols) as i32, (key.0 % cols) as i32)
    }

    /// In-bounds cardinal neighbours of `c`, in [`Cell::neighbors_4`] order.
    pub fn neighbors_4(self, c: Cell) -> impl Iterator<Item = Cell> {
        c.neighbors_4().into_iter().filter(move |&n| self.contains(n))
    }

    /// Row-major iterator over every cell in the grid.
    #[inline]
    pub fn cells(self) -> CellIter {
        CellIter {
            size: self,
            cur: Cell::ZERO,
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// CellIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`GridSize`].
#[derive(Clone, Debug)]
pub struct CellIter {
    size: GridSize,
    cur: Cell,
}

impl Iterator for CellIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if !self.size.is_valid() || self.cur.row >= self.size.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.size.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.size.is_valid() || self.cur.row >= self.size.rows {
            return (0, Some(0));
        }
        let cols = self.size.cols as usize;
        let remaining_in_row = (self.size.cols - self.cur.col) as usize;
        let remaining_rows = (self.size.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * cols;
        (total, Some(total))
    }
}

impl ExactSizeIterator for CellIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn key_is_transparent() {
        let json = serde_json::to_string(&CellKey(42)).unwrap();
        assert_eq!(json, "42");
    }
}
