pub mod game_state;

use rand::rngs::StdRng;

use crate::{
    error::Result,
    generators::{generate_maze, get_rng},
    maze::{Coord, Direction, Maze},
    solvers::{Search, SearchStatus, Solver},
};
use game_state::GameState;

pub struct SessionConfig {
    /// Maze width in cells
    pub width: u8,
    /// Maze height in cells
    pub height: u8,
    /// Seed for edge weights. Each regeneration draws fresh weights from the same generator,
    /// so a seeded session replays the same sequence of mazes.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            seed: None,
        }
    }
}

/// Everything a front end drives: the current maze, an automated search over it, and the
/// player's manual exploration.
///
/// The maze is only replaced by [`Session::regenerate`], which also resets both kinds of
/// exploration, so a search never sees the maze change under it.
pub struct Session {
    rng: StdRng,
    maze: Maze,
    search: Search,
    game: GameState,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let mut rng = get_rng(config.seed);
        let maze = generate_maze(config.width, config.height, &mut rng)?;
        let game = GameState::initialize(&maze);
        tracing::info!(
            "[session] started with a {}x{} maze",
            config.width,
            config.height
        );
        Ok(Session {
            rng,
            maze,
            search: Search::new(),
            game,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Replaces the maze with a new one of the same size.
    pub fn regenerate(&mut self) -> Result<()> {
        self.maze = generate_maze(self.maze.width(), self.maze.height(), &mut self.rng)?;
        self.clear();
        tracing::info!("[session] maze regenerated");
        Ok(())
    }

    /// Abandons any search and puts the player back on the start cell.
    pub fn clear(&mut self) {
        self.search.clear();
        self.game = GameState::initialize(&self.maze);
    }

    /// Clears previous exploration and starts a new search with `solver`.
    pub fn start_search(&mut self, solver: Solver) -> Result<()> {
        self.clear();
        self.search.start(&self.maze, solver)
    }

    /// Advances a running search by one step. Does nothing otherwise.
    pub fn tick(&mut self) -> Result<SearchStatus> {
        if self.search.is_running() {
            self.search.step(&self.maze)
        } else {
            Ok(self.search.status())
        }
    }

    /// Moves the player, unless an automated search owns the maze.
    pub fn move_player(&mut self, direction: Direction) -> Result<Option<Coord>> {
        if !self.search.is_idle() {
            tracing::debug!("[session] ignoring move while a search is active");
            return Ok(None);
        }
        self.game.move_player(&self.maze, direction)
    }

    pub fn current_position(&self) -> Coord {
        self.game.current()
    }

    /// Whether the goal was reached, by the search or by the player.
    pub fn is_complete(&self) -> bool {
        self.search.is_complete() || self.game.goal_reached()
    }
}
