//! Caller-side editing state: endpoints plus a wall set.
//!
//! A [`Board`] keeps the invariant that neither endpoint is ever a wall,
//! whatever sequence of presses, drags, endpoint moves or wall replacements
//! is applied.

use thiserror::Error;

use crate::geom::{Cell, GridSize};
use crate::line::rasterize;
use crate::walls::{WallMap, WallSet};

/// What a press-and-drag gesture does to the cells it passes over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stroke {
    /// Add walls.
    Paint,
    /// Remove walls.
    Erase,
    /// The press landed on the start cell; drags move it.
    MoveStart,
    /// The press landed on the target cell; drags move it.
    MoveTarget,
}

/// Errors from building a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("grid size {0} has no cells")]
    EmptyGrid(GridSize),
    #[error("cell {cell} is outside the {size} grid")]
    OutOfBounds { cell: Cell, size: GridSize },
    #[error("start and target are both {0}")]
    SameEndpoints(Cell),
}

/// Endpoints and walls for one grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    start: Cell,
    target: Cell,
    walls: WallSet,
}

impl Board {
    /// Create an empty board. Endpoints must be distinct and in bounds.
    pub fn new(size: GridSize, start: Cell, target: Cell) -> Result<Self, BoardError> {
        if !size.is_valid() {
            return Err(BoardError::EmptyGrid(size));
        }
        for cell in [start, target] {
            if !size.contains(cell) {
                return Err(BoardError::OutOfBounds { cell, size });
            }
        }
        if start == target {
            return Err(BoardError::SameEndpoints(start));
        }
        Ok(Self {
            start,
            target,
            walls: WallSet::new(size),
        })
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.walls.size()
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Cell {
        self.target
    }

    #[inline]
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    fn is_endpoint(&self, c: Cell) -> bool {
        c == self.start || c == self.target
    }

    /// Begin a gesture at `cell`.
    ///
    /// Pressing an endpoint selects it for moving. Otherwise the mode is
    /// decided by the pressed cell (a wall starts an erase stroke, anything
    /// else a paint stroke) and applied to that cell immediately.
    pub fn press(&mut self, cell: Cell) -> Stroke {
        if cell == self.start {
            return Stroke::MoveStart;
        }
        if cell == self.target {
            return Stroke::MoveTarget;
        }
        if self.walls.contains(cell) {
            self.walls.remove(cell);
            Stroke::Erase
        } else {
            self.walls.insert(cell);
            Stroke::Paint
        }
    }

    /// Continue a gesture from `from` to `to`.
    ///
    /// Paint and erase strokes apply to every cell on the rasterized segment
    /// so fast drags leave no gaps; endpoints are skipped. Move strokes
    /// relocate the selected endpoint to `to`. Returns the number of cells
    /// whose state changed.
    pub fn drag(&mut self, from: Cell, to: Cell, stroke: Stroke) -> usize {
        match stroke {
            Stroke::MoveStart => usize::from(self.move_start(to)),
            Stroke::MoveTarget => usize::from(self.move_target(to)),
            Stroke::Paint | Stroke::Erase => {
                let wall = stroke == Stroke::Paint;
                let mut changed = 0;
                for c in rasterize(from, to) {
                    if self.is_endpoint(c) {
                        continue;
                    }
                    if self.walls.set(c, wall) {
                        changed += 1;
                    }
                }
                changed
            }
        }
    }

    /// Move the start cell. Refused when `cell` is out of bounds or is the
    /// target. Any wall under the new start is cleared.
    pub fn move_start(&mut self, cell: Cell) -> bool {
        if !self.size().contains(cell) || cell == self.target || cell == self.start {
            return false;
        }
        self.start = cell;
        self.walls.remove(cell);
        true
    }

    /// Move the target cell. Same rules as [`move_start`](Self::move_start).
    pub fn move_target(&mut self, cell: Cell) -> bool {
        if !self.size().contains(cell) || cell == self.start || cell == self.target {
            return false;
        }
        self.target = cell;
        self.walls.remove(cell);
        true
    }

    /// Install a new wall set, such as a generated maze.
    ///
    /// The set is resized to this board's grid if it was built for another
    /// one; walls outside the board are dropped. Endpoints are cleared.
    pub fn replace_walls(&mut self, walls: WallSet) {
        if walls.size() == self.size() {
            self.walls = walls;
        } else {
            let mut resized = WallSet::new(self.size());
            for c in walls.iter() {
                resized.insert(c);
            }
            self.walls = resized;
        }
        self.walls.remove(self.start);
        self.walls.remove(self.target);
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }
}

impl WallMap for Board {
    #[inline]
    fn is_wall(&self, c: Cell) -> bool {
        self.walls.contains(c)
    }
}
