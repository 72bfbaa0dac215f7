use thiserror::Error;
use waypath_core::{Cell, GridSize};

/// Errors returned by [`search`](crate::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request violates a precondition; nothing was searched.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Which precondition a search request violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("grid size {0} has no cells")]
    EmptyGrid(GridSize),
    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Cell),
    #[error("target {0} is outside the grid")]
    TargetOutOfBounds(Cell),
    #[error("start {0} is a wall")]
    StartIsWall(Cell),
    #[error("target {0} is a wall")]
    TargetIsWall(Cell),
}
