//! Maze generation for waypath grids.
//!
//! Provides a randomized depth-first carver ([`generate`], [`MazeGen`]) that
//! turns a fully walled grid into a perfect maze: exactly one simple path
//! joins any two carved cells. The random source is injected, so seeded
//! generators give reproducible layouts.

pub mod maze;

pub use maze::{MazeGen, generate};
