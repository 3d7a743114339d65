use crate::{
    error::Result,
    maze::{Coord, Direction, Maze},
};

/// Manual exploration of a maze, one move at a time.
pub struct GameState {
    /// Tracks where the player currently is
    current: Coord,
    /// Goal position
    goal: Coord,
    /// The trail from the start to `current`, without detours that were walked back
    path: Vec<Coord>,
    /// Every distinct cell entered so far, in order
    seen: Vec<Coord>,
    /// Set once the goal is reached; no further moves are accepted
    complete: bool,
}

impl GameState {
    /// Places the player on the maze's start cell.
    pub fn initialize(maze: &Maze) -> Self {
        let start = maze.start();
        GameState {
            current: start,
            goal: maze.goal(),
            path: vec![start],
            seen: vec![start],
            complete: start == maze.goal(),
        }
    }

    pub fn current(&self) -> Coord {
        self.current
    }

    /// Check if the goal has been reached.
    pub fn goal_reached(&self) -> bool {
        self.complete
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn seen(&self) -> &[Coord] {
        &self.seen
    }

    /// Cells entered that are no longer on the trail.
    pub fn wrong_moves(&self) -> usize {
        self.seen.len().saturating_sub(self.path.len())
    }

    /// Attempt to move the player in the specified direction.
    ///
    /// Moving back onto the trail drops the cell being left from it; moving anywhere else
    /// extends the trail. Returns the new position if a passage leads that way, None otherwise.
    pub fn move_player(&mut self, maze: &Maze, direction: Direction) -> Result<Option<Coord>> {
        if self.complete {
            return Ok(None);
        }
        let Some(next) = maze.neighbor_toward(self.current, direction)? else {
            return Ok(None);
        };

        if self.path.contains(&next) {
            tracing::debug!("[game] Backtracking to {:?}", next);
            if let Some(idx) = self.path.iter().position(|&c| c == self.current) {
                self.path.remove(idx);
            }
        } else {
            tracing::debug!("[game] Moving to new cell at {:?}", next);
            self.path.push(next);
        }
        if !self.seen.contains(&next) {
            self.seen.push(next);
        }

        self.current = next;
        if self.current == self.goal {
            self.complete = true;
            tracing::info!(
                "[game] Goal reached with {} wrong moves",
                self.wrong_moves()
            );
        }
        Ok(Some(self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{build_with_edges, edge::CandidateEdge};

    /// 3x2 maze:
    /// (0,0) - (1,0) - (2,0)
    ///   |
    /// (0,1) - (1,1) - (2,1)
    fn fork() -> Maze {
        build_with_edges(
            3,
            2,
            vec![
                CandidateEdge::new((0, 0), (1, 0), 0),
                CandidateEdge::new((1, 0), (2, 0), 1),
                CandidateEdge::new((0, 0), (0, 1), 2),
                CandidateEdge::new((0, 1), (1, 1), 3),
                CandidateEdge::new((1, 1), (2, 1), 4),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_blocked_moves() {
        let maze = fork();
        let mut game = GameState::initialize(&maze);
        assert_eq!(game.move_player(&maze, Direction::Up), Ok(None));
        assert_eq!(game.move_player(&maze, Direction::Left), Ok(None));
        assert_eq!(game.current(), (0, 0));
        game.move_player(&maze, Direction::Right).unwrap();
        // Wall between (1,0) and (1,1)
        assert_eq!(game.move_player(&maze, Direction::Down), Ok(None));
    }

    #[test]
    fn test_detour_counts_as_wrong_moves() {
        let maze = fork();
        let mut game = GameState::initialize(&maze);
        for direction in [Direction::Right, Direction::Right, Direction::Left, Direction::Left] {
            assert!(game.move_player(&maze, direction).unwrap().is_some());
        }
        assert_eq!(game.path(), &[(0, 0)]);
        assert_eq!(game.wrong_moves(), 2);

        for direction in [Direction::Down, Direction::Right, Direction::Right] {
            game.move_player(&maze, direction).unwrap();
        }
        assert!(game.goal_reached());
        assert_eq!(game.path(), &[(0, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(game.wrong_moves(), 2);
        // No moves once the goal is reached
        assert_eq!(game.move_player(&maze, Direction::Left), Ok(None));
    }
}
