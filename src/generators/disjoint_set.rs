use crate::{
    error::{MazeError, Result},
    maze::{Coord, grid::Grid},
};

/// Disjoint-set forest over the cells of a grid, tracking which cells are already connected.
///
/// Union is directional and there is no rank or path compression: `union(a, b)` always hangs
/// the root of `a`'s set under the root of `b`'s. For the grid sizes generated here the
/// extra depth is cheap, and it keeps the resulting trees reproducible for a given edge order.
pub struct DisjointSet {
    parent: Grid<Coord>,
}

impl DisjointSet {
    /// Every cell of a `width`×`height` grid starts as its own representative.
    pub fn new(width: u8, height: u8) -> Self {
        DisjointSet {
            parent: Grid::from_fn(width, height, |coord| coord),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn parent_of(&self, cell: Coord) -> Result<Coord> {
        self.parent
            .get(cell)
            .copied()
            .ok_or(MazeError::UnknownCell(cell))
    }

    /// Follows parent links from `cell` up to the representative of its set.
    pub fn find(&self, cell: Coord) -> Result<Coord> {
        let mut current = cell;
        loop {
            let parent = self.parent_of(current)?;
            if parent == current {
                return Ok(current);
            }
            current = parent;
        }
    }

    /// Merges the sets of `a` and `b`; `a`'s representative becomes a child of `b`'s.
    pub fn union(&mut self, a: Coord, b: Coord) -> Result<()> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if let Some(parent) = self.parent.get_mut(root_a) {
            *parent = root_b;
        }
        Ok(())
    }

    pub fn is_connected(&self, a: Coord, b: Coord) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of distinct sets, i.e. cells that are their own representative.
    pub fn component_count(&self) -> usize {
        (0..self.parent.height())
            .flat_map(|y| (0..self.parent.width()).map(move |x| (x, y)))
            .filter(|&coord| self.parent.get(coord) == Some(&coord))
            .count()
    }
}
