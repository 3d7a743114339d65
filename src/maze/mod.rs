pub mod cell;
mod distance;
pub mod grid;

pub use cell::{Direction, Endpoint, Tile};
use grid::Grid;

use crate::error::{MazeError, Result};

/// A cell position `(x, y)`, with `(0, 0)` at the top left.
pub type Coord = (u8, u8);

/// A width×height grid of tiles whose adjacency, once generated, forms a spanning tree.
///
/// Tiles are created once here and never removed. Connections are only added by the
/// generators, so from the outside adjacency and distances are read-only.
pub struct Maze {
    tiles: Grid<Tile>,
    width: u8,
    height: u8,
    /// Number of bidirectional connections made so far
    edge_count: usize,
}

impl Maze {
    /// Creates a maze with no connections between its cells.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] if either dimension is 0.
    pub fn new(width: u8, height: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Maze {
            tiles: Grid::from_fn(width, height, Tile::new),
            width,
            height,
            edge_count: 0,
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The top-left cell, where searches and manual exploration begin.
    pub fn start(&self) -> Coord {
        (0, 0)
    }

    /// The bottom-right cell.
    pub fn goal(&self) -> Coord {
        (self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> Coord {
        match endpoint {
            Endpoint::Start => self.start(),
            Endpoint::End => self.goal(),
        }
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.tiles.is_in_bounds(coord)
    }

    pub fn tile(&self, coord: Coord) -> Result<&Tile> {
        self.tiles.get(coord).ok_or(MazeError::UnknownCell(coord))
    }

    fn tile_mut(&mut self, coord: Coord) -> Result<&mut Tile> {
        self.tiles.get_mut(coord).ok_or(MazeError::UnknownCell(coord))
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Opens a passage between two cells, recording each as the other's neighbor.
    pub(crate) fn connect(&mut self, a: Coord, b: Coord) -> Result<()> {
        // Validate both ends before mutating either
        self.tile(b)?;
        self.tile_mut(a)?.add_connection(b);
        self.tile_mut(b)?.add_connection(a);
        self.edge_count += 1;
        Ok(())
    }

    /// Recomputes every cell's distance to the start and to the goal.
    pub(crate) fn annotate_distances(&mut self) -> Result<()> {
        for endpoint in [Endpoint::Start, Endpoint::End] {
            let origin = self.endpoint(endpoint);
            distance::annotate_from(self, origin, endpoint)?;
        }
        Ok(())
    }

    /// Checks if the cell at `coord` has a passage to the cell at `(x, y)`.
    pub fn is_adjacent(&self, coord: Coord, x: u8, y: u8) -> Result<bool> {
        Ok(self.tile(coord)?.is_connected(x, y))
    }

    pub fn neighbors(&self, coord: Coord) -> Result<&[Coord]> {
        Ok(self.tile(coord)?.connections())
    }

    pub fn distance_to_start(&self, coord: Coord) -> Result<usize> {
        Ok(self.tile(coord)?.distance(Endpoint::Start))
    }

    pub fn distance_to_end(&self, coord: Coord) -> Result<usize> {
        Ok(self.tile(coord)?.distance(Endpoint::End))
    }

    /// The largest distance any cell has to the given endpoint.
    pub fn max_distance(&self, endpoint: Endpoint) -> usize {
        self.tiles
            .iter()
            .map(|tile| tile.distance(endpoint))
            .max()
            .unwrap_or(0)
    }

    /// The cell's distance to `endpoint` scaled into `[0, 1]` by the maze's largest such distance.
    /// A maze whose largest distance is 0 (a single cell) reports 0.
    pub fn distance_ratio(&self, coord: Coord, endpoint: Endpoint) -> Result<f64> {
        let distance = self.tile(coord)?.distance(endpoint);
        match self.max_distance(endpoint) {
            0 => Ok(0.0),
            max => Ok(distance as f64 / max as f64),
        }
    }

    /// Returns the neighbor of `from` in `direction` if a passage leads there, `None` otherwise.
    pub fn neighbor_toward(&self, from: Coord, direction: Direction) -> Result<Option<Coord>> {
        let tile = self.tile(from)?;
        Ok(direction
            .step_from(from)
            .filter(|&(x, y)| tile.is_connected(x, y)))
    }
}
