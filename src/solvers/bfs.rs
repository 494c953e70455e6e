use std::collections::{HashMap, HashSet, VecDeque};

use crate::maze::{Maze, Point};

/// Breadth-first search from `start` towards `goal` over open passages.
///
/// Neighbors are expanded north, east, south, west, and each cell enters the
/// frontier at most once. `on_discover(cell, parent)` is called the first time a
/// cell is reached. Returns `true` once `goal` is dequeued, `false` if the frontier
/// runs dry. Both points must be in bounds.
fn search(
    maze: &Maze,
    start: Point,
    goal: Point,
    mut on_discover: impl FnMut(Point, Point),
) -> bool {
    let mut visited = HashSet::with_capacity(maze.cell_count());
    let mut frontier = VecDeque::from([start]);
    visited.insert(start);

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            return true;
        }
        for (_, next) in maze.neighbors(current) {
            if maze.can_traverse(current, next) && visited.insert(next) {
                on_discover(next, current);
                frontier.push_back(next);
            }
        }
    }

    false
}

/// Whether `goal` can be reached from `start`.
pub fn solve_bfs(maze: &Maze, start: Point, goal: Point) -> bool {
    start == goal || search(maze, start, goal, |_, _| {})
}

/// The shortest route from `start` to `goal`, both ends included.
pub fn trace_bfs(maze: &Maze, start: Point, goal: Point) -> Option<Vec<Point>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut parents = HashMap::new();
    if !search(maze, start, goal, |cell, parent| {
        parents.insert(cell, parent);
    }) {
        return None;
    }

    // Backtrack from the goal to rebuild the route
    let mut route = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        route.push(parent);
        current = parent;
    }
    route.reverse();
    Some(route)
}
