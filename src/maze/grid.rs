use super::{Point, cell::Cell};

/// Row-major storage for the cells of a maze.
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid where every cell is unvisited and fully walled.
    pub fn new(width: u16, height: u16) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Point::new(x, y))))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_in_bounds(&self, coord: Point) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn ravel_index(&self, coord: Point) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        coord.y as usize * self.width as usize + coord.x as usize
    }

    pub fn get(&self, coord: Point) -> Option<&Cell> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        self.data.get(self.ravel_index(coord))
    }

    pub fn get_mut(&mut self, coord: Point) -> Option<&mut Cell> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        let idx = self.ravel_index(coord);
        self.data.get_mut(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.data.iter_mut()
    }
}

impl std::ops::Index<Point> for Grid {
    type Output = Cell;

    fn index(&self, index: Point) -> &Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {index} is outside the {}x{} grid",
            self.width,
            self.height
        );
        &self.data[self.ravel_index(index)]
    }
}
