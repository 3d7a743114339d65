pub mod frontier;
pub mod search;

use frontier::{CellQueue, CellStack, WorkList};
pub use search::{Search, SearchOutcome, SearchStatus};

use crate::{
    error::Result,
    maze::{Coord, Maze},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
}

impl Solver {
    /// A fresh, empty work-list with this solver's removal order.
    pub fn work_list(&self) -> Box<dyn WorkList> {
        match self {
            Solver::Dfs => Box::new(CellStack::default()),
            Solver::Bfs => Box::new(CellQueue::default()),
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Runs a search to completion in one go, returning the path from goal back to start
/// if one was found.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Result<Option<Vec<Coord>>> {
    let mut search = Search::new();
    search.start(maze, solver)?;
    while search.is_running() {
        search.step(maze)?;
    }
    Ok(search.current_path().map(<[_]>::to_vec))
}
