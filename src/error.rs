use thiserror::Error;

use crate::maze::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("Invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: u8, height: u8 },

    #[error("Cell {0:?} does not belong to this maze")]
    UnknownCell(Coord),

    #[error("Cannot remove a cell from an empty frontier")]
    EmptyFrontier,

    #[error("Back-pointer chain broke at {0:?} before reaching the start cell")]
    BrokenPathChain(Coord),

    #[error("Cannot search a maze with no cells")]
    EmptyMaze,

    #[error("A search is already active; clear it before starting another")]
    SearchInProgress,

    #[error("No search is running")]
    SearchNotRunning,
}

pub type Result<T> = std::result::Result<T, MazeError>;
