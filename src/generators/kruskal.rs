use super::{
    disjoint_set::DisjointSet,
    edge::{CandidateEdge, sort_by_weight},
};
use crate::{error::Result, maze::Maze};

/// Runs Kruskal's algorithm over weighted candidate edges.
pub struct KruskalTreeBuilder {
    forest: DisjointSet,
    edges: Vec<CandidateEdge>,
}

impl KruskalTreeBuilder {
    /// Takes a forest with one set per cell and the candidate edges in any order;
    /// the edges are sorted by ascending weight here.
    pub fn new(forest: DisjointSet, mut edges: Vec<CandidateEdge>) -> Self {
        sort_by_weight(&mut edges);
        KruskalTreeBuilder { forest, edges }
    }

    /// Accepts each edge whose endpoints are not yet connected, lightest first.
    ///
    /// Stops as soon as `cells - 1` edges are accepted, at which point every cell is in
    /// one set and any remaining edge would close a cycle.
    pub fn create_tree(mut self) -> Result<Vec<CandidateEdge>> {
        let tree_size = self.forest.len().saturating_sub(1);
        let mut tree = Vec::with_capacity(tree_size);

        for edge in self.edges {
            if tree.len() >= tree_size {
                break;
            }
            if self.forest.is_connected(edge.cell1, edge.cell2)? {
                continue;
            }
            self.forest.union(edge.cell1, edge.cell2)?;
            tree.push(edge);
        }

        Ok(tree)
    }
}

/// Carves `maze` into a spanning tree using the given candidate edges.
pub fn kruskal(maze: &mut Maze, edges: Vec<CandidateEdge>) -> Result<()> {
    let forest = DisjointSet::new(maze.width(), maze.height());
    let tree = KruskalTreeBuilder::new(forest, edges).create_tree()?;

    for edge in &tree {
        maze.connect(edge.cell1, edge.cell2)?;
    }

    if tree.len() + 1 < maze.cell_count() {
        tracing::warn!(
            "[generator] candidate edges left the maze disconnected: {} of {} tree edges",
            tree.len(),
            maze.cell_count() - 1
        );
    }
    Ok(())
}
