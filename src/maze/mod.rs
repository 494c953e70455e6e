pub mod cell;
mod grid;

use std::fmt;

pub use cell::{Cell, Direction, Walls};
use grid::Grid;

/// A cell coordinate. `(0, 0)` is the top-left cell; `y` grows southwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Point { x, y }
    }

    /// The point one step away in `direction`, or `None` on `u16` under/overflow.
    /// The result is not bounds-checked against any maze.
    pub fn step(self, direction: Direction) -> Option<Point> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx as i16)?;
        let y = self.y.checked_add_signed(dy as i16)?;
        Some(Point { x, y })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangular maze of walled cells, plus the designated start and finish.
///
/// Walls are stored per cell and every mutation goes through [`Maze::remove_wall`],
/// which clears both sides of a shared wall so neighboring cells never disagree.
pub struct Maze {
    grid: Grid,
    start: Point,
    finish: Point,
}

impl Maze {
    /// Creates a new maze with the given width and height, every cell fully walled.
    pub fn new(width: u16, height: u16) -> Self {
        Maze {
            grid: Grid::new(width, height),
            start: Point::default(),
            finish: Point::default(),
        }
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// Checks if the maze has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.grid.len() == 0
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Point) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Returns the cell at `coord`, or `None` if it lies outside the maze.
    pub fn cell(&self, coord: Point) -> Option<&Cell> {
        self.grid.get(coord)
    }

    /// Returns the cell adjacent to `from` in `direction`, or `None` past the border.
    pub fn neighbor(&self, from: Point, direction: Direction) -> Option<&Cell> {
        self.grid.get(from.step(direction)?)
    }

    /// In-bounds neighbors of `coord` in north, east, south, west order.
    pub fn neighbors(&self, coord: Point) -> impl Iterator<Item = (Direction, Point)> + '_ {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter_map(move |dir| {
                let next = coord.step(dir)?;
                self.is_in_bounds(next).then_some((dir, next))
            })
    }

    /// Removes the wall shared by two adjacent cells, on both sides.
    ///
    /// Returns `true` if a wall was removed, `false` if there was none or if the
    /// cells are not adjacent (in which case nothing changes).
    pub fn remove_wall(&mut self, a: Point, b: Point) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            return false;
        }
        let Some(direction) = Direction::between(a, b) else {
            return false;
        };
        let removed = self
            .grid
            .get_mut(a)
            .is_some_and(|cell| cell.remove_wall(direction));
        let mirrored = self
            .grid
            .get_mut(b)
            .is_some_and(|cell| cell.remove_wall(direction.opposite()));
        debug_assert_eq!(removed, mirrored, "wall flags out of sync at {a} / {b}");
        removed || mirrored
    }

    /// Checks whether one can step from `from` into `to`.
    /// False for non-adjacent or out-of-bounds cells.
    pub fn can_traverse(&self, from: Point, to: Point) -> bool {
        let Some(direction) = Direction::between(from, to) else {
            return false;
        };
        if !self.is_in_bounds(to) {
            return false;
        }
        self.cell(from)
            .is_some_and(|cell| !cell.has_wall(direction))
    }

    pub fn is_visited(&self, coord: Point) -> bool {
        self.cell(coord).is_some_and(Cell::is_visited)
    }

    pub fn mark_visited(&mut self, coord: Point) {
        if let Some(cell) = self.grid.get_mut(coord) {
            cell.set_visited(true);
        }
    }

    /// Clears the visit flag of every cell.
    pub fn reset_visited(&mut self) {
        self.grid.iter_mut().for_each(|cell| cell.set_visited(false));
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn finish(&self) -> Point {
        self.finish
    }

    pub fn set_endpoints(&mut self, start: Point, finish: Point) {
        self.start = start;
        self.finish = finish;
    }

    /// The four corner cells: top-left, top-right, bottom-left, bottom-right.
    /// Degenerate mazes (a single row or column) repeat corners.
    pub fn corners(&self) -> [Point; 4] {
        let right = self.width().saturating_sub(1);
        let bottom = self.height().saturating_sub(1);
        [
            Point::new(0, 0),
            Point::new(right, 0),
            Point::new(0, bottom),
            Point::new(right, bottom),
        ]
    }

    /// Number of open passages between adjacent cells.
    /// Each passage is counted once, from its west or north side.
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|cell| {
                let here = cell.coord();
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter_map(|dir| here.step(dir))
                    .filter(|&next| self.can_traverse(here, next))
                    .count()
            })
            .sum()
    }
}

impl std::ops::Index<Point> for Maze {
    type Output = Cell;

    fn index(&self, index: Point) -> &Self::Output {
        &self.grid[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_indexing() {
        let maze = Maze::new(5, 5);
        let cell = &maze[Point::new(2, 3)];
        assert_eq!(cell.coord(), Point::new(2, 3));
        assert_eq!(cell.walls(), Walls::ALL);
        assert!(!cell.is_visited());
    }

    #[test]
    fn test_remove_wall_is_symmetric() {
        let mut maze = Maze::new(5, 5);
        let a = Point::new(1, 1);
        let b = Point::new(2, 1);
        assert!(maze.remove_wall(a, b));
        // Trying to remove the same wall again should return false
        assert!(!maze.remove_wall(b, a));
        assert!(!maze[a].has_wall(Direction::East));
        assert!(!maze[b].has_wall(Direction::West));
        assert!(maze.can_traverse(a, b));
        assert!(maze.can_traverse(b, a));
        assert_eq!(maze.passage_count(), 1);
    }

    #[test]
    fn test_remove_wall_ignores_non_adjacent() {
        let mut maze = Maze::new(5, 5);
        assert!(!maze.remove_wall(Point::new(0, 0), Point::new(2, 0)));
        assert!(!maze.remove_wall(Point::new(0, 0), Point::new(1, 1)));
        assert!(!maze.remove_wall(Point::new(4, 4), Point::new(5, 4)));
        assert!(maze.cells().all(|cell| cell.walls() == Walls::ALL));
    }

    #[test]
    fn test_can_traverse_rejects_bad_input() {
        let mut maze = Maze::new(3, 3);
        maze.remove_wall(Point::new(0, 0), Point::new(1, 0));
        assert!(!maze.can_traverse(Point::new(0, 0), Point::new(0, 0)));
        assert!(!maze.can_traverse(Point::new(0, 0), Point::new(2, 0)));
        assert!(!maze.can_traverse(Point::new(2, 2), Point::new(3, 2)));
        assert!(!maze.can_traverse(Point::new(0, 0), Point::new(0, 1)));
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5);
        assert!(!maze.is_in_bounds(Point::new(5, 5)));
        assert!(!maze.is_in_bounds(Point::new(0, 5)));
        assert!(!maze.is_in_bounds(Point::new(5, 0)));
        assert!(maze.is_in_bounds(Point::new(4, 4)));
        assert!(maze.cell(Point::new(5, 0)).is_none());
        assert!(maze.neighbor(Point::new(0, 0), Direction::North).is_none());
        assert!(maze.neighbor(Point::new(0, 0), Direction::West).is_none());
        assert!(maze.neighbor(Point::new(4, 4), Direction::East).is_none());
        assert_eq!(
            maze.neighbor(Point::new(0, 0), Direction::South).map(Cell::coord),
            Some(Point::new(0, 1))
        );
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let maze = Maze::new(3, 3);
        let center = maze.neighbors(Point::new(1, 1)).collect::<Vec<_>>();
        assert_eq!(
            center,
            vec![
                (Direction::North, Point::new(1, 0)),
                (Direction::East, Point::new(2, 1)),
                (Direction::South, Point::new(1, 2)),
                (Direction::West, Point::new(0, 1)),
            ]
        );
        assert_eq!(maze.neighbors(Point::new(0, 0)).count(), 2);
        assert_eq!(maze.neighbors(Point::new(3, 3)).count(), 0);
    }

    #[test]
    fn test_corners_of_degenerate_maze() {
        let maze = Maze::new(1, 4);
        assert_eq!(
            maze.corners(),
            [
                Point::new(0, 0),
                Point::new(0, 0),
                Point::new(0, 3),
                Point::new(0, 3),
            ]
        );
    }

    #[test]
    fn test_visited_flags() {
        let mut maze = Maze::new(2, 2);
        maze.mark_visited(Point::new(1, 0));
        assert!(maze.is_visited(Point::new(1, 0)));
        assert!(!maze.is_visited(Point::new(0, 0)));
        // Out of bounds is never visited and marking it is a no-op
        maze.mark_visited(Point::new(9, 9));
        assert!(!maze.is_visited(Point::new(9, 9)));
        maze.reset_visited();
        assert!(maze.cells().all(|cell| !cell.is_visited()));
    }
}
