pub mod generation;
pub mod generators;
pub mod maze;
pub mod placement;
pub mod renderer;
pub mod solvers;

pub use generation::{Generation, GenerationConfig, GenerationError, MazeGenerator};
pub use maze::{Direction, Maze, Point};
pub use placement::Placement;
