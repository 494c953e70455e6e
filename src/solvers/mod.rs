mod bfs;

use thiserror::Error;

use crate::maze::{Maze, Point};
use bfs::{solve_bfs, trace_bfs};

/// Why a maze failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("start {0} lies outside the maze")]
    StartOutOfBounds(Point),
    #[error("finish {0} lies outside the maze")]
    FinishOutOfBounds(Point),
    #[error("no route leads from {start} to {finish}")]
    Unreachable { start: Point, finish: Point },
}

fn check_bounds(maze: &Maze, start: Point, finish: Point) -> Result<(), ValidationError> {
    if !maze.is_in_bounds(start) {
        return Err(ValidationError::StartOutOfBounds(start));
    }
    if !maze.is_in_bounds(finish) {
        return Err(ValidationError::FinishOutOfBounds(finish));
    }
    Ok(())
}

/// Checks that the maze's finish is reachable from its start and returns the
/// shortest route between them.
pub fn validate(maze: &Maze) -> Result<Vec<Point>, ValidationError> {
    let (start, finish) = (maze.start(), maze.finish());
    check_bounds(maze, start, finish)?;
    trace_bfs(maze, start, finish).ok_or(ValidationError::Unreachable { start, finish })
}

/// Whether a route exists from the maze's start to its finish.
pub fn has_path(maze: &Maze) -> bool {
    has_path_between(maze, maze.start(), maze.finish())
}

/// Whether a route exists between two arbitrary cells.
/// Out-of-bounds endpoints are reported as unreachable.
pub fn has_path_between(maze: &Maze, from: Point, to: Point) -> bool {
    check_bounds(maze, from, to).is_ok() && solve_bfs(maze, from, to)
}

/// The shortest route from the maze's start to its finish, if one exists.
pub fn find_path(maze: &Maze) -> Option<Vec<Point>> {
    find_path_between(maze, maze.start(), maze.finish())
}

pub fn find_path_between(maze: &Maze, from: Point, to: Point) -> Option<Vec<Point>> {
    check_bounds(maze, from, to).ok()?;
    trace_bfs(maze, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, recursive_backtrack};

    fn carved(width: u16, height: u16, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height);
        recursive_backtrack(&mut maze, &mut get_rng(Some(seed)));
        maze
    }

    fn assert_valid_route(maze: &Maze, route: &[Point], from: Point, to: Point) {
        assert_eq!(route.first(), Some(&from));
        assert_eq!(route.last(), Some(&to));
        for step in route.windows(2) {
            assert!(
                maze.can_traverse(step[0], step[1]),
                "blocked step {} -> {}",
                step[0],
                step[1]
            );
        }
    }

    #[test]
    fn test_single_cell_route() {
        let maze = Maze::new(1, 1);
        assert!(has_path(&maze));
        assert_eq!(find_path(&maze), Some(vec![Point::new(0, 0)]));
        assert_eq!(validate(&maze), Ok(vec![Point::new(0, 0)]));
    }

    #[test]
    fn test_walled_off_cells_are_unreachable() {
        let mut maze = Maze::new(2, 1);
        let (a, b) = (Point::new(0, 0), Point::new(1, 0));
        maze.set_endpoints(a, b);
        assert!(!has_path(&maze));
        assert_eq!(find_path(&maze), None);
        assert_eq!(
            validate(&maze),
            Err(ValidationError::Unreachable { start: a, finish: b })
        );

        maze.remove_wall(a, b);
        assert!(has_path(&maze));
        assert_eq!(find_path(&maze), Some(vec![a, b]));
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let mut maze = carved(3, 3, 1);
        maze.set_endpoints(Point::new(3, 0), Point::new(0, 0));
        assert!(!has_path(&maze));
        assert_eq!(
            validate(&maze),
            Err(ValidationError::StartOutOfBounds(Point::new(3, 0)))
        );
        maze.set_endpoints(Point::new(0, 0), Point::new(0, 7));
        assert!(find_path(&maze).is_none());
        assert_eq!(
            validate(&maze),
            Err(ValidationError::FinishOutOfBounds(Point::new(0, 7)))
        );
    }

    #[test]
    fn test_every_pair_connected_in_carved_maze() {
        let maze = carved(6, 5, 99);
        let cells = maze.cells().map(|c| c.coord()).collect::<Vec<_>>();
        for &from in &cells {
            for &to in &cells {
                assert!(has_path_between(&maze, from, to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_routes_are_walkable() {
        let maze = carved(11, 7, 42);
        let corners = maze.corners();
        for &from in &corners {
            for &to in &corners {
                let route = find_path_between(&maze, from, to).expect("carved maze is connected");
                assert_valid_route(&maze, &route, from, to);
            }
        }
    }

    #[test]
    fn test_route_is_shortest() {
        // Open 3x3 room: the only walls left are the border
        let mut maze = Maze::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                let here = Point::new(x, y);
                maze.remove_wall(here, Point::new(x + 1, y));
                maze.remove_wall(here, Point::new(x, y + 1));
            }
        }
        let route = find_path_between(&maze, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(route.len(), 5);
        assert_valid_route(&maze, &route, Point::new(0, 0), Point::new(2, 2));
    }

    #[test]
    fn test_validator_does_not_mutate() {
        let mut maze = carved(5, 5, 3);
        maze.set_endpoints(Point::new(0, 0), Point::new(4, 4));
        let before = maze.cells().copied().collect::<Vec<_>>();
        let _ = validate(&maze);
        let _ = has_path(&maze);
        assert_eq!(maze.cells().copied().collect::<Vec<_>>(), before);
    }
}
