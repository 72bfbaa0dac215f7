//! **waypath-core** — grid geometry shared by the *waypath* crates.
//!
//! This crate provides the cell coordinate and key codec, the caller-owned
//! wall set, the integer line rasterizer used to turn sparse pointer samples
//! into continuous strokes, and a [`Board`] that ties them together for
//! interactive wall editing.

pub mod board;
pub mod geom;
pub mod line;
pub mod walls;

pub use board::{Board, BoardError, Stroke};
pub use geom::{Cell, CellIter, CellKey, GridSize};
pub use line::rasterize;
pub use walls::{WallMap, WallSet};
