use rand::{Rng, seq::SliceRandom};

use crate::{
    maze::{Maze, Point},
    solvers,
};

/// Strategy for choosing where the start and finish of a maze go.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Two distinct corners, picked after a uniform shuffle.
    #[default]
    Corners,
    /// Uniformly random start, finish rejection-sampled until it differs.
    Random,
    /// The corner pair with the longest route between them.
    Farthest,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::Corners => write!(f, "Shuffled corners"),
            Placement::Random => write!(f, "Random cells"),
            Placement::Farthest => write!(f, "Farthest corner pair"),
        }
    }
}

/// Assigns the start and finish of `maze` according to `placement`.
/// Empty mazes are left untouched.
pub fn place_endpoints(maze: &mut Maze, placement: Placement, rng: &mut impl Rng) {
    if maze.is_empty() {
        return;
    }
    match placement {
        Placement::Corners => place_corners(maze, rng),
        Placement::Random => place_random(maze, rng),
        Placement::Farthest => place_farthest(maze, rng),
    }
    tracing::debug!(
        "[place] {placement}: start {} finish {}",
        maze.start(),
        maze.finish()
    );
}

/// Distinct corners in shuffled order.
fn shuffled_corners(maze: &Maze, rng: &mut impl Rng) -> Vec<Point> {
    let mut corners = Vec::with_capacity(4);
    for corner in maze.corners() {
        if !corners.contains(&corner) {
            corners.push(corner);
        }
    }
    corners.shuffle(rng);
    corners
}

fn place_corners(maze: &mut Maze, rng: &mut impl Rng) {
    let corners = shuffled_corners(maze, rng);
    match corners.as_slice() {
        &[start, finish, ..] => maze.set_endpoints(start, finish),
        _ => place_random(maze, rng),
    }
}

fn place_random(maze: &mut Maze, rng: &mut impl Rng) {
    let mut random_cell = |maze: &Maze| {
        Point::new(
            rng.random_range(0..maze.width()),
            rng.random_range(0..maze.height()),
        )
    };
    let start = random_cell(maze);
    if maze.cell_count() < 2 {
        // A single cell can only lead to itself
        maze.set_endpoints(start, start);
        return;
    }
    let finish = loop {
        let candidate = random_cell(maze);
        if candidate != start {
            break candidate;
        }
    };
    maze.set_endpoints(start, finish);
}

fn place_farthest(maze: &mut Maze, rng: &mut impl Rng) {
    let corners = shuffled_corners(maze, rng);
    if corners.len() < 2 {
        place_random(maze, rng);
        return;
    }

    let mut best: Option<(usize, Point, Point)> = None;
    for (i, &start) in corners.iter().enumerate() {
        for &finish in &corners[i + 1..] {
            let Some(route) = solvers::find_path_between(maze, start, finish) else {
                continue;
            };
            if best.is_none_or(|(len, _, _)| route.len() > len) {
                best = Some((route.len(), start, finish));
            }
        }
    }

    match best {
        Some((_, start, finish)) => maze.set_endpoints(start, finish),
        // No corner pair is connected, keep the shuffled pick and let validation decide
        None => maze.set_endpoints(corners[0], corners[1]),
    }
}
