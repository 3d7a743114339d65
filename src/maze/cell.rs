use super::Coord;

/// One cell of the maze: its position, the cells it opens onto, and its tree distances.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    coord: Coord,
    /// Adjacent cells in the order their connecting edges were accepted.
    connections: Vec<Coord>,
    distance_to_start: usize,
    distance_to_end: usize,
}

impl Tile {
    pub(crate) fn new(coord: Coord) -> Self {
        Tile {
            coord,
            connections: Vec::new(),
            distance_to_start: 0,
            distance_to_end: 0,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn connections(&self) -> &[Coord] {
        &self.connections
    }

    /// Checks if this tile opens onto the cell at `(x, y)`.
    pub fn is_connected(&self, x: u8, y: u8) -> bool {
        self.connections.iter().any(|&c| c == (x, y))
    }

    pub fn distance(&self, endpoint: Endpoint) -> usize {
        match endpoint {
            Endpoint::Start => self.distance_to_start,
            Endpoint::End => self.distance_to_end,
        }
    }

    pub(crate) fn add_connection(&mut self, other: Coord) {
        self.connections.push(other);
    }

    pub(crate) fn set_distance(&mut self, endpoint: Endpoint, distance: usize) {
        match endpoint {
            Endpoint::Start => self.distance_to_start = distance,
            Endpoint::End => self.distance_to_end = distance,
        }
    }
}

/// Either end of the maze's solution: top-left start or bottom-right end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The coordinate one step from `from` in this direction, if it doesn't underflow or overflow.
    pub fn step_from(self, from: Coord) -> Option<Coord> {
        let (x, y) = from;
        match self {
            Direction::Up => Some((x, y.checked_sub(1)?)),
            Direction::Down => Some((x, y.checked_add(1)?)),
            Direction::Left => Some((x.checked_sub(1)?, y)),
            Direction::Right => Some((x.checked_add(1)?, y)),
        }
    }
}
