use super::Point;

/// One of the four cardinal directions a cell can have a wall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the fixed order used for neighbor enumeration.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Coordinate delta `(dx, dy)` of a single step. North is towards row 0.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The direction a neighbor uses to face back at us.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Direction of the single step leading from `from` to `to`,
    /// or `None` if the two points are not 4-adjacent.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let dx = to.x as i32 - from.x as i32;
        let dy = to.y as i32 - from.y as i32;
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::East => 0b0010,
            Direction::South => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

/// Wall presence flags of a single cell, one bit per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls(u8);

impl Walls {
    pub const ALL: Walls = Walls(0b1111);

    pub fn has(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Clears the wall in `direction`. Returns `true` if it was present.
    pub fn remove(&mut self, direction: Direction) -> bool {
        let present = self.has(direction);
        self.0 &= !direction.bit();
        present
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

/// A maze cell: its coordinate, its walls, and the carving visit flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: Point,
    walls: Walls,
    visited: bool,
}

impl Cell {
    /// A fresh, unvisited cell with all four walls standing.
    pub fn new(coord: Point) -> Self {
        Cell {
            coord,
            walls: Walls::ALL,
            visited: false,
        }
    }

    pub fn coord(&self) -> Point {
        self.coord
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(super) fn remove_wall(&mut self, direction: Direction) -> bool {
        self.walls.remove(direction)
    }

    pub(super) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_involutions() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_direction_between() {
        let p = Point::new(3, 3);
        assert_eq!(Direction::between(p, Point::new(3, 2)), Some(Direction::North));
        assert_eq!(Direction::between(p, Point::new(4, 3)), Some(Direction::East));
        assert_eq!(Direction::between(p, Point::new(3, 4)), Some(Direction::South));
        assert_eq!(Direction::between(p, Point::new(2, 3)), Some(Direction::West));
        assert_eq!(Direction::between(p, p), None);
        assert_eq!(Direction::between(p, Point::new(4, 4)), None);
        assert_eq!(Direction::between(p, Point::new(5, 3)), None);
    }

    #[test]
    fn test_walls_remove() {
        let mut walls = Walls::ALL;
        assert!(walls.remove(Direction::East));
        // Removing the same wall twice reports nothing removed
        assert!(!walls.remove(Direction::East));
        assert!(!walls.has(Direction::East));
        assert!(walls.has(Direction::West));
        assert!(walls.has(Direction::North) && walls.has(Direction::South));
    }
}
