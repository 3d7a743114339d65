use rand::Rng;

use crate::maze::Coord;

/// Weights are drawn uniformly from `0..MAX_WEIGHT`.
pub const MAX_WEIGHT: u8 = 100;

/// A possible passage between two adjacent cells, weighted for Kruskal's algorithm.
///
/// Only lives for the duration of generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateEdge {
    pub cell1: Coord,
    pub cell2: Coord,
    pub weight: u8,
}

impl CandidateEdge {
    pub fn new(cell1: Coord, cell2: Coord, weight: u8) -> Self {
        CandidateEdge {
            cell1,
            cell2,
            weight,
        }
    }
}

/// Sorts edges by ascending weight. Equal weights keep their relative order.
pub fn sort_by_weight(edges: &mut [CandidateEdge]) {
    edges.sort_by_key(|edge| edge.weight);
}

/// Collects one randomly weighted edge for every pair of horizontally or vertically
/// adjacent cells, column by column.
pub fn random_edges<R: Rng>(width: u8, height: u8, rng: &mut R) -> Vec<CandidateEdge> {
    (0..width)
        .flat_map(|x| (0..height).map(move |y| (x, y)))
        .flat_map(|(x, y)| {
            [
                (y + 1 < height).then_some(((x, y), (x, y + 1))),
                (x + 1 < width).then_some(((x, y), (x + 1, y))),
            ]
        })
        .flatten()
        .map(|(cell1, cell2)| {
            let weight = rng.random_range(0..MAX_WEIGHT);
            CandidateEdge::new(cell1, cell2, weight)
        })
        .collect()
}
