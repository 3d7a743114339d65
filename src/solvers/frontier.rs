use std::collections::VecDeque;

use crate::{
    error::{MazeError, Result},
    maze::Coord,
};

/// A work-list of cells waiting to be expanded. The removal order is what distinguishes
/// depth-first from breadth-first search.
pub trait WorkList {
    /// Adds a cell to the work-list.
    fn add(&mut self, cell: Coord);

    /// Removes and returns the next cell, failing with [`MazeError::EmptyFrontier`] if there is none.
    fn remove(&mut self) -> Result<Coord>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct CellStack {
    cells: Vec<Coord>,
}

impl WorkList for CellStack {
    fn add(&mut self, cell: Coord) {
        self.cells.push(cell);
    }

    fn remove(&mut self) -> Result<Coord> {
        self.cells.pop().ok_or(MazeError::EmptyFrontier)
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct CellQueue {
    cells: VecDeque<Coord>,
}

impl WorkList for CellQueue {
    fn add(&mut self, cell: Coord) {
        self.cells.push_back(cell);
    }

    fn remove(&mut self) -> Result<Coord> {
        self.cells.pop_front().ok_or(MazeError::EmptyFrontier)
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}
