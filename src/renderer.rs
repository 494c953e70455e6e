use std::{
    collections::HashSet,
    fmt,
    io::{self, Write},
};

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};

use crate::maze::{Direction, Maze, Point};

/// A single character block of the rendered maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Start,
    Finish,
    /// Part of the start-to-finish route.
    Route,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: usize = 2;

    fn symbol(self) -> &'static str {
        match self {
            Tile::Wall => "██",
            Tile::Open => "  ",
            Tile::Start => "()",
            Tile::Finish => "[]",
            Tile::Route => "··",
        }
    }

    fn color(self) -> Color {
        match self {
            Tile::Wall => Color::White,
            Tile::Open => Color::Reset,
            Tile::Start => Color::Green,
            Tile::Finish => Color::Red,
            Tile::Route => Color::Yellow,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.symbol().with(self.color());

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Options for turning a maze into text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit terminal colors when printing.
    pub color: bool,
    /// Draw the route from start to finish.
    pub show_route: bool,
}

/// Draws a finished maze as a block of text, two characters per tile.
///
/// A maze of `w x h` cells becomes `(2w + 1) x (2h + 1)` tiles: cells sit on odd
/// coordinates, the walls between them on the even ones. The outer wall next to
/// the start and finish is left open so the entrances are visible.
pub struct TextRenderer {
    config: RenderConfig,
}

impl TextRenderer {
    const LEGEND: &'static str = "() START    [] FINISH";

    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Size of the rendered maze in `(columns, rows)` of characters, legend excluded.
    pub fn dimensions(maze: &Maze) -> (usize, usize) {
        let columns = (maze.width() as usize * 2 + 1) * Tile::WIDTH;
        let rows = maze.height() as usize * 2 + 1;
        (columns, rows)
    }

    fn tile_of(cell: Point) -> (usize, usize) {
        (cell.x as usize * 2 + 1, cell.y as usize * 2 + 1)
    }

    fn wall_tile(cell: Point, direction: Direction) -> (usize, usize) {
        let (x, y) = Self::tile_of(cell);
        match direction {
            Direction::North => (x, y - 1),
            Direction::East => (x + 1, y),
            Direction::South => (x, y + 1),
            Direction::West => (x - 1, y),
        }
    }

    /// Lays the maze out as rows of tiles.
    /// `route` is only drawn when the config asks for it.
    pub fn tiles(&self, maze: &Maze, route: Option<&[Point]>) -> Vec<Vec<Tile>> {
        if maze.is_empty() {
            return Vec::new();
        }
        let width = maze.width() as usize * 2 + 1;
        let height = maze.height() as usize * 2 + 1;
        let mut tiles = vec![vec![Tile::Wall; width]; height];

        for cell in maze.cells() {
            let here = cell.coord();
            let (x, y) = Self::tile_of(here);
            tiles[y][x] = Tile::Open;
            for direction in Direction::ALL {
                if !cell.has_wall(direction) {
                    let (wx, wy) = Self::wall_tile(here, direction);
                    tiles[wy][wx] = Tile::Open;
                }
            }
        }

        // Entrances through the outer wall
        for endpoint in [maze.start(), maze.finish()] {
            if !maze.is_in_bounds(endpoint) {
                continue;
            }
            for direction in Direction::ALL {
                if maze.neighbor(endpoint, direction).is_none() {
                    let (wx, wy) = Self::wall_tile(endpoint, direction);
                    tiles[wy][wx] = Tile::Open;
                }
            }
        }

        if self.config.show_route {
            let route = route.unwrap_or_default();
            let on_route = route.iter().copied().collect::<HashSet<_>>();
            for step in route.windows(2) {
                let (from, to) = (step[0], step[1]);
                // Steps through walls or off the maze are not drawn
                if !maze.can_traverse(from, to) {
                    continue;
                }
                if let Some(direction) = Direction::between(from, to) {
                    let (wx, wy) = Self::wall_tile(from, direction);
                    tiles[wy][wx] = Tile::Route;
                }
            }
            for cell in on_route.into_iter().filter(|&c| maze.is_in_bounds(c)) {
                let (x, y) = Self::tile_of(cell);
                tiles[y][x] = Tile::Route;
            }
        }

        for (endpoint, tile) in [(maze.start(), Tile::Start), (maze.finish(), Tile::Finish)] {
            if maze.is_in_bounds(endpoint) {
                let (x, y) = Self::tile_of(endpoint);
                tiles[y][x] = tile;
            }
        }

        tiles
    }

    /// Plain text rendering with a legend line on top, suitable for a file.
    pub fn render_plain(&self, maze: &Maze, route: Option<&[Point]>) -> String {
        let mut out = String::new();
        out.push_str(Self::LEGEND);
        out.push_str("\n\n");
        for row in self.tiles(maze, route) {
            row.iter().for_each(|tile| out.push_str(tile.symbol()));
            out.push('\n');
        }
        out
    }

    /// Prints the maze to `out`, colored unless the config disables it.
    pub fn print(
        &self,
        maze: &Maze,
        route: Option<&[Point]>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        if !self.config.color {
            out.write_all(self.render_plain(maze, route).as_bytes())?;
            return out.flush();
        }

        queue!(
            out,
            style::PrintStyledContent(
                Self::LEGEND
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold)
            ),
            style::Print("\n\n"),
        )?;
        for row in self.tiles(maze, route) {
            for tile in row {
                queue!(out, style::Print(tile))?;
            }
            queue!(out, style::Print("\n"))?;
        }
        out.flush()
    }
}
