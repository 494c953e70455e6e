use rand::rngs::StdRng;
use thiserror::Error;

use crate::{
    generators::{get_rng, recursive_backtrack},
    maze::Maze,
    placement::{Placement, place_endpoints},
    solvers,
};

/// Knobs for a validated generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub width: u16,
    pub height: u16,
    /// How many fresh mazes to carve before giving up on validation.
    pub max_regenerations: usize,
    /// How many endpoint placements to try on each carved maze.
    pub max_placement_attempts: usize,
    pub placement: Placement,
}

impl GenerationConfig {
    pub const DEFAULT_WIDTH: u16 = 25;
    pub const DEFAULT_HEIGHT: u16 = 25;
    pub const DEFAULT_MAX_REGENERATIONS: usize = 5;
    pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 10;
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            max_regenerations: Self::DEFAULT_MAX_REGENERATIONS,
            max_placement_attempts: Self::DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            placement: Placement::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("cannot generate a {width}x{height} maze, both dimensions must be at least 1")]
    EmptyGrid { width: u16, height: u16 },
}

/// The outcome of a generation run.
pub enum Generation {
    /// The start-to-finish route was confirmed.
    Validated(Maze),
    /// Every retry failed validation; this maze was produced without checking it.
    BestEffort(Maze),
}

impl Generation {
    pub fn is_validated(&self) -> bool {
        matches!(self, Generation::Validated(_))
    }

    pub fn maze(&self) -> &Maze {
        match self {
            Generation::Validated(maze) | Generation::BestEffort(maze) => maze,
        }
    }

    pub fn into_maze(self) -> Maze {
        match self {
            Generation::Validated(maze) | Generation::BestEffort(maze) => maze,
        }
    }
}

/// Carves mazes, places their endpoints and proves them solvable.
/// Owns the random source shared by every step.
pub struct MazeGenerator {
    rng: StdRng,
}

impl MazeGenerator {
    /// A generator seeded with `seed`, or from the OS when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self { rng: get_rng(seed) }
    }

    /// Carves a fresh perfect maze. Its endpoints are not placed yet.
    pub fn carve(&mut self, width: u16, height: u16) -> Maze {
        let mut maze = Maze::new(width, height);
        recursive_backtrack(&mut maze, &mut self.rng);
        maze
    }

    pub fn place_endpoints(&mut self, maze: &mut Maze, placement: Placement) {
        place_endpoints(maze, placement, &mut self.rng);
    }

    /// Generates a maze whose finish is reachable from its start.
    ///
    /// Up to `max_regenerations` mazes are carved; each gets up to
    /// `max_placement_attempts` endpoint placements, and the first one that passes
    /// validation is returned as [`Generation::Validated`]. If every attempt fails,
    /// one last maze is carved and placed without validation and returned as
    /// [`Generation::BestEffort`].
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<Generation, GenerationError> {
        let GenerationConfig {
            width,
            height,
            max_regenerations,
            max_placement_attempts,
            placement,
        } = *config;
        if width == 0 || height == 0 {
            return Err(GenerationError::EmptyGrid { width, height });
        }

        for attempt in 1..=max_regenerations {
            let mut maze = self.carve(width, height);
            for placement_attempt in 1..=max_placement_attempts {
                self.place_endpoints(&mut maze, placement);
                match solvers::validate(&maze) {
                    Ok(route) => {
                        tracing::info!(
                            "[generate] {width}x{height} maze validated on carve {attempt}, placement {placement_attempt} (route of {} cells)",
                            route.len()
                        );
                        return Ok(Generation::Validated(maze));
                    }
                    Err(err) => {
                        tracing::debug!(
                            "[generate] carve {attempt}, placement {placement_attempt} rejected: {err}"
                        );
                    }
                }
            }
            tracing::info!("[generate] carve {attempt} exhausted its placements, recarving");
        }

        tracing::warn!(
            "[generate] no validated maze after {max_regenerations} carves, returning an unchecked maze"
        );
        let mut maze = self.carve(width, height);
        self.place_endpoints(&mut maze, placement);
        Ok(Generation::BestEffort(maze))
    }
}
