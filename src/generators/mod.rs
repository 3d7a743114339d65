use rand::{SeedableRng, rngs::StdRng};

pub mod disjoint_set;
pub mod edge;
pub mod kruskal;

use crate::{error::Result, maze::Maze};
use edge::{CandidateEdge, random_edges};
use kruskal::kruskal;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Builds a perfect maze with freshly drawn edge weights from `rng`.
pub fn generate_maze(width: u8, height: u8, rng: &mut StdRng) -> Result<Maze> {
    let maze = Maze::new(width, height)?;
    let edges = random_edges(width, height, rng);
    build_from(maze, edges)
}

/// Builds a perfect maze of the given size, seeded for reproducibility if `seed` is given.
pub fn build(width: u8, height: u8, seed: Option<u64>) -> Result<Maze> {
    generate_maze(width, height, &mut get_rng(seed))
}

/// Builds a maze from caller-chosen weighted edges instead of random ones.
///
/// The result is only a spanning tree if the edges connect every cell.
pub fn build_with_edges(width: u8, height: u8, edges: Vec<CandidateEdge>) -> Result<Maze> {
    build_from(Maze::new(width, height)?, edges)
}

fn build_from(mut maze: Maze, edges: Vec<CandidateEdge>) -> Result<Maze> {
    tracing::debug!(
        "[generator] building {}x{} maze from {} candidate edges",
        maze.width(),
        maze.height(),
        edges.len()
    );
    kruskal(&mut maze, edges)?;
    maze.annotate_distances()?;
    tracing::info!(
        "[generator] {}x{} maze ready, solution length {}",
        maze.width(),
        maze.height(),
        maze.distance_to_start(maze.goal())?
    );
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Coord;
    use std::collections::{HashMap, VecDeque};

    /// Independent BFS over the maze adjacency, returning distances from `origin`.
    fn bfs_distances(maze: &Maze, origin: Coord) -> HashMap<Coord, usize> {
        let mut distances = HashMap::from([(origin, 0)]);
        let mut queue = VecDeque::from([origin]);
        while let Some(cell) = queue.pop_front() {
            let next_distance = distances[&cell] + 1;
            for &next in maze.neighbors(cell).unwrap() {
                if !distances.contains_key(&next) {
                    distances.insert(next, next_distance);
                    queue.push_back(next);
                }
            }
        }
        distances
    }

    #[test]
    fn test_spanning_tree_invariants() {
        for (seed, (width, height)) in [(1, 1), (1, 7), (6, 1), (2, 2), (9, 5), (16, 16)]
            .into_iter()
            .enumerate()
        {
            let maze = build(width, height, Some(seed as u64)).unwrap();
            let cells = width as usize * height as usize;
            // Exactly cells - 1 edges, and connected: together that means acyclic
            assert_eq!(maze.edge_count(), cells - 1);
            let from_start = bfs_distances(&maze, maze.start());
            assert_eq!(from_start.len(), cells);
            let degree_sum: usize = maze.tiles().map(|t| t.connections().len()).sum();
            assert_eq!(degree_sum, 2 * (cells - 1));
        }
    }

    #[test]
    fn test_distances_match_bfs() {
        let maze = build(12, 8, Some(42)).unwrap();
        let from_start = bfs_distances(&maze, maze.start());
        let from_end = bfs_distances(&maze, maze.goal());
        for tile in maze.tiles() {
            assert_eq!(maze.distance_to_start(tile.coord()), Ok(from_start[&tile.coord()]));
            assert_eq!(maze.distance_to_end(tile.coord()), Ok(from_end[&tile.coord()]));
        }
        assert_eq!(
            maze.distance_to_start(maze.goal()),
            maze.distance_to_end(maze.start())
        );
    }

    #[test]
    fn test_only_grid_adjacent_passages() {
        let maze = build(10, 10, Some(3)).unwrap();
        for tile in maze.tiles() {
            let (x, y) = tile.coord();
            for &(nx, ny) in tile.connections() {
                assert_eq!(x.abs_diff(nx) + y.abs_diff(ny), 1);
            }
        }
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let a = build(8, 8, Some(11)).unwrap();
        let b = build(8, 8, Some(11)).unwrap();
        assert!(a.tiles().zip(b.tiles()).all(|(t1, t2)| t1 == t2));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(build(0, 5, None).is_err());
    }
}
