use rand::{Rng, seq::SliceRandom};

use crate::maze::{Maze, Point};

/// A cell on the carving stack, with the neighbors it still has to try.
/// `pending` is stored reversed so that `pop` yields the shuffled order.
struct Frame {
    cell: Point,
    pending: Vec<Point>,
}

impl Frame {
    fn enter(maze: &mut Maze, cell: Point, rng: &mut impl Rng) -> Self {
        maze.mark_visited(cell);
        let mut pending = maze
            .neighbors(cell)
            .map(|(_, next)| next)
            .filter(|&next| !maze.is_visited(next))
            .collect::<Vec<_>>();
        pending.shuffle(rng);
        pending.reverse();
        Frame { cell, pending }
    }
}

/// Carves a perfect maze with randomized depth-first search (recursive backtracking).
///
/// Every wall is rebuilt first, then carving starts from a uniformly random cell.
/// Each cell shuffles its unvisited neighbors once, on entry, and descends into
/// them one by one, skipping any that were visited through a deeper branch in the
/// meantime. An explicit stack replaces the call stack so large mazes cannot
/// overflow it; the visiting order matches the recursive formulation.
///
/// Returns the number of passages carved, which is `width * height - 1` for any
/// non-empty maze.
pub fn recursive_backtrack(maze: &mut Maze, rng: &mut impl Rng) -> usize {
    if maze.is_empty() {
        return 0;
    }

    // Initialize the maze with walls
    *maze = Maze::new(maze.width(), maze.height());

    // Initialize the starting point
    let start = Point::new(
        rng.random_range(0..maze.width()),
        rng.random_range(0..maze.height()),
    );
    tracing::debug!("[carve] starting at {start}");

    let mut carved = 0;
    let mut stack = vec![Frame::enter(maze, start, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.pending.pop() else {
            // Nothing left to try from this cell, backtrack
            stack.pop();
            continue;
        };
        if maze.is_visited(next) {
            continue;
        }
        let cell = frame.cell;
        maze.remove_wall(cell, next);
        carved += 1;
        stack.push(Frame::enter(maze, next, rng));
    }

    maze.reset_visited();
    tracing::debug!("[carve] carved {carved} passages");
    carved
}
