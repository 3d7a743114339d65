use super::Coord;

/// Flat row-major storage for one value per maze cell.
pub struct Grid<T> {
    data: Box<[T]>,
    width: u8,
    height: u8,
}

impl<T> Grid<T> {
    /// Builds a grid by calling `init` once per coordinate, row by row.
    pub fn from_fn(width: u8, height: u8, mut init: impl FnMut(Coord) -> T) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(&mut init)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u8, y: u8) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        self.data.get(self.ravel_index(coord.0, coord.1))
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        let idx = self.ravel_index(coord.0, coord.1);
        self.data.get_mut(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}
