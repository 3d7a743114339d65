use std::collections::{HashMap, HashSet};

use super::{Solver, frontier::WorkList};
use crate::{
    error::{MazeError, Result},
    maze::{Coord, Maze},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached and the path reconstructed
    Found,
    /// The work-list ran dry before the goal was reached
    Exhausted,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Running,
    Complete(SearchOutcome),
}

/// A resumable search from the maze's start to its goal, advanced one cell per [`Search::step`].
///
/// The whole traversal state lives here so an external timer can drive it a tick at a time.
/// The maze itself is borrowed per call and must not change between `start` and completion.
#[derive(Default)]
pub struct Search {
    status: SearchStatus,
    solver: Option<Solver>,
    work_list: Option<Box<dyn WorkList>>,
    /// Cells removed from the work-list, for membership checks
    visited: HashSet<Coord>,
    /// Same cells as `visited`, in the order they were visited
    visit_order: Vec<Coord>,
    /// Maps each discovered cell to the cell that first discovered it
    came_from: HashMap<Coord, Coord>,
    start: Coord,
    goal: Coord,
    /// Goal-to-start path, filled once the goal is reached
    path: Vec<Coord>,
    steps: usize,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new search from the maze's start cell using `solver`'s work-list order.
    ///
    /// Only valid while idle; call [`Search::clear`] first to restart.
    pub fn start(&mut self, maze: &Maze, solver: Solver) -> Result<()> {
        if self.status != SearchStatus::Idle {
            return Err(MazeError::SearchInProgress);
        }
        if maze.is_empty() {
            return Err(MazeError::EmptyMaze);
        }

        self.clear();
        self.start = maze.start();
        self.goal = maze.goal();
        let mut work_list = solver.work_list();
        work_list.add(self.start);
        self.work_list = Some(work_list);
        self.solver = Some(solver);
        self.status = SearchStatus::Running;

        tracing::debug!(
            "[search] started {} from {:?} toward {:?}",
            solver,
            self.start,
            self.goal
        );
        Ok(())
    }

    /// Removes one cell from the work-list and visits it.
    ///
    /// Reaching the goal reconstructs the path and completes the search. Otherwise every
    /// neighbor not yet visited or discovered is recorded as discovered by this cell and
    /// added to the work-list.
    pub fn step(&mut self, maze: &Maze) -> Result<SearchStatus> {
        if self.status != SearchStatus::Running {
            return Err(MazeError::SearchNotRunning);
        }
        let Some(work_list) = self.work_list.as_mut() else {
            return Err(MazeError::SearchNotRunning);
        };
        if work_list.is_empty() {
            return Ok(self.exhaust());
        }

        let cell = work_list.remove()?;
        self.steps += 1;
        if self.visited.insert(cell) {
            self.visit_order.push(cell);
        }

        if cell == self.goal {
            self.path = self.reconstruct_path()?;
            self.status = SearchStatus::Complete(SearchOutcome::Found);
            tracing::info!(
                "[search] goal {:?} reached after {} steps, path length {}",
                self.goal,
                self.steps,
                self.path.len()
            );
            return Ok(self.status);
        }

        for &next in maze.neighbors(cell)? {
            if next == self.start
                || self.visited.contains(&next)
                || self.came_from.contains_key(&next)
            {
                continue;
            }
            self.came_from.insert(next, cell);
            work_list.add(next);
        }

        if work_list.is_empty() {
            return Ok(self.exhaust());
        }
        Ok(self.status)
    }

    fn exhaust(&mut self) -> SearchStatus {
        tracing::warn!(
            "[search] work-list exhausted after {} steps without reaching {:?}",
            self.steps,
            self.goal
        );
        self.status = SearchStatus::Complete(SearchOutcome::Exhausted);
        self.status
    }

    /// Walks back-pointers from the goal to the start. The returned path runs goal first.
    fn reconstruct_path(&self) -> Result<Vec<Coord>> {
        let mut path = vec![self.goal];
        let mut current = self.goal;
        while current != self.start {
            // A chain longer than the number of back-pointers must have looped.
            if path.len() > self.came_from.len() {
                return Err(MazeError::BrokenPathChain(current));
            }
            current = *self
                .came_from
                .get(&current)
                .ok_or(MazeError::BrokenPathChain(current))?;
            path.push(current);
        }
        Ok(path)
    }

    /// Abandons any search in progress and returns to idle.
    pub fn clear(&mut self) {
        if self.status != SearchStatus::Idle {
            tracing::debug!("[search] cleared after {} steps", self.steps);
        }
        *self = Self::default();
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SearchStatus::Running
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, SearchStatus::Complete(_))
    }

    pub fn is_idle(&self) -> bool {
        self.status == SearchStatus::Idle
    }

    /// The path from goal back to start, available once the goal has been found.
    pub fn current_path(&self) -> Option<&[Coord]> {
        match self.status {
            SearchStatus::Complete(SearchOutcome::Found) => Some(&self.path),
            _ => None,
        }
    }

    /// Visited cells, in visit order.
    pub fn visited(&self) -> &[Coord] {
        &self.visit_order
    }

    pub fn has_visited(&self, cell: Coord) -> bool {
        self.visited.contains(&cell)
    }

    pub fn frontier_len(&self) -> usize {
        self.work_list.as_ref().map_or(0, |w| w.len())
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn solver(&self) -> Option<Solver> {
        self.solver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{build, build_with_edges, edge::CandidateEdge};

    /// 2x2 maze whose tree is the path (0,0) - (0,1) - (1,1) - (1,0).
    fn square() -> Maze {
        build_with_edges(
            2,
            2,
            vec![
                CandidateEdge::new((0, 0), (0, 1), 1),
                CandidateEdge::new((0, 1), (1, 1), 2),
                CandidateEdge::new((1, 1), (1, 0), 3),
                CandidateEdge::new((0, 0), (1, 0), 4),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bfs_on_square() {
        let maze = square();
        let mut search = Search::new();
        search.start(&maze, Solver::Bfs).unwrap();

        let mut steps = 0;
        while search.is_running() {
            search.step(&maze).unwrap();
            steps += 1;
        }
        assert!(steps <= 3);
        assert_eq!(search.status(), SearchStatus::Complete(SearchOutcome::Found));

        let path = search.current_path().unwrap();
        assert_eq!(path.first(), Some(&(1, 1)));
        assert_eq!(path.last(), Some(&(0, 0)));
        assert_eq!(path.len(), 1 + maze.distance_to_start((1, 1)).unwrap());
    }

    #[test]
    fn test_paths_agree_across_solvers() {
        let maze = build(15, 9, Some(5)).unwrap();
        let expected = 1 + maze.distance_to_start(maze.goal()).unwrap();
        for solver in [Solver::Dfs, Solver::Bfs] {
            let mut search = Search::new();
            search.start(&maze, solver).unwrap();
            while search.is_running() {
                search.step(&maze).unwrap();
            }
            let path = search.current_path().unwrap();
            assert_eq!(path.len(), expected);
            // Consecutive cells on the path are connected
            assert!(
                path.windows(2)
                    .all(|w| maze.is_adjacent(w[0], w[1].0, w[1].1).unwrap())
            );
            // A cell is never visited twice
            assert_eq!(search.visited().len(), search.steps());
        }
    }

    #[test]
    fn test_bfs_visits_in_distance_order() {
        let maze = build(10, 10, Some(9)).unwrap();
        let mut search = Search::new();
        search.start(&maze, Solver::Bfs).unwrap();
        while search.is_running() {
            search.step(&maze).unwrap();
        }
        let distances = search
            .visited()
            .iter()
            .map(|&c| maze.distance_to_start(c).unwrap())
            .collect::<Vec<_>>();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = build(1, 1, None).unwrap();
        let mut search = Search::new();
        search.start(&maze, Solver::Dfs).unwrap();
        assert_eq!(
            search.step(&maze),
            Ok(SearchStatus::Complete(SearchOutcome::Found))
        );
        assert_eq!(search.current_path(), Some(&[(0, 0)][..]));
    }

    #[test]
    fn test_state_transitions() {
        let maze = square();
        let mut search = Search::new();
        assert!(search.is_idle());
        assert_eq!(search.step(&maze), Err(MazeError::SearchNotRunning));
        assert!(search.current_path().is_none());

        search.start(&maze, Solver::Dfs).unwrap();
        assert_eq!(
            search.start(&maze, Solver::Bfs),
            Err(MazeError::SearchInProgress)
        );
        search.step(&maze).unwrap();
        assert!(search.current_path().is_none());
    }

    #[test]
    fn test_clear_allows_fresh_search() {
        let maze = build(6, 6, Some(2)).unwrap();
        let mut search = Search::new();
        search.start(&maze, Solver::Dfs).unwrap();
        for _ in 0..5 {
            search.step(&maze).unwrap();
        }
        search.clear();
        assert!(search.is_idle());
        assert!(search.visited().is_empty());
        assert_eq!(search.frontier_len(), 0);

        search.start(&maze, Solver::Bfs).unwrap();
        assert_eq!(search.frontier_len(), 1);
        assert_eq!(search.steps(), 0);
        search.step(&maze).unwrap();
        assert_eq!(search.visited(), &[(0u8, 0u8)]);
    }

    #[test]
    fn test_disconnected_maze_is_exhausted() {
        // Only the start's row is connected; the goal row is unreachable.
        let maze = build_with_edges(2, 2, vec![CandidateEdge::new((0, 0), (1, 0), 0)]).unwrap();
        let mut search = Search::new();
        search.start(&maze, Solver::Bfs).unwrap();
        while search.is_running() {
            search.step(&maze).unwrap();
        }
        assert_eq!(
            search.status(),
            SearchStatus::Complete(SearchOutcome::Exhausted)
        );
        assert!(search.current_path().is_none());
    }

    #[test]
    fn test_broken_path_chain() {
        let mut search = Search::new();
        search.start = (0, 0);
        search.goal = (2, 0);
        search.came_from.insert((2, 0), (1, 0));
        assert_eq!(
            search.reconstruct_path(),
            Err(MazeError::BrokenPathChain((1, 0)))
        );

        // A back-pointer cycle that never reaches the start
        search.came_from.insert((1, 0), (2, 0));
        assert!(matches!(
            search.reconstruct_path(),
            Err(MazeError::BrokenPathChain(_))
        ));
    }
}
