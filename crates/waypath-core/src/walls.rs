//! Wall storage and the [`WallMap`] query seam.
//!
//! [`WallSet`] is a flat bitmap of impassable cells owned by the caller.
//! Algorithms never mutate it; they read it through [`WallMap`], which is
//! also implemented for plain closures.

use crate::geom::{Cell, CellKey, GridSize};

/// Read-only "is this cell blocked" query.
pub trait WallMap {
    /// Whether `c` is impassable. Only called with in-bounds cells.
    fn is_wall(&self, c: Cell) -> bool;
}

impl<F: Fn(Cell) -> bool> WallMap for F {
    #[inline]
    fn is_wall(&self, c: Cell) -> bool {
        self(c)
    }
}

/// A set of wall cells over a fixed [`GridSize`].
///
/// Stored as one flag per cell, indexed by [`CellKey`], so membership tests
/// are a single index and iteration yields keys in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallSet {
    size: GridSize,
    cells: Vec<bool>,
    count: usize,
}

impl WallSet {
    /// An empty wall set.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![false; size.len()],
            count: 0,
        }
    }

    /// A wall set with every cell blocked.
    pub fn filled(size: GridSize) -> Self {
        let len = size.len();
        Self {
            size,
            cells: vec![true; len],
            count: len,
        }
    }

    /// The grid this set covers.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of walls.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether `c` is a wall. Out-of-bounds cells are not walls.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.size
            .try_encode(c)
            .is_some_and(|k| self.cells[k.index()])
    }

    /// Whether the cell behind `key` is a wall.
    #[inline]
    pub fn contains_key(&self, key: CellKey) -> bool {
        self.cells.get(key.index()).copied().unwrap_or(false)
    }

    /// Mark `c` as a wall. Returns `true` if the set changed.
    ///
    /// Out-of-bounds cells are ignored.
    pub fn insert(&mut self, c: Cell) -> bool {
        self.set(c, true)
    }

    /// Clear the wall at `c`. Returns `true` if the set changed.
    pub fn remove(&mut self, c: Cell) -> bool {
        self.set(c, false)
    }

    /// Set or clear the wall at `c`. Returns `true` if the set changed.
    pub fn set(&mut self, c: Cell, wall: bool) -> bool {
        let Some(k) = self.size.try_encode(c) else {
            return false;
        };
        let slot = &mut self.cells[k.index()];
        if *slot == wall {
            return false;
        }
        *slot = wall;
        if wall {
            self.count += 1;
        } else {
            self.count -= 1;
        }
        true
    }

    /// Remove every wall.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.count = 0;
    }

    /// Keys of all walls, ascending.
    pub fn keys(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w)
            .map(|(i, _)| CellKey(i))
    }

    /// All wall cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.keys().map(|k| self.size.decode(k))
    }
}

impl WallMap for WallSet {
    #[inline]
    fn is_wall(&self, c: Cell) -> bool {
        self.contains(c)
    }
}
