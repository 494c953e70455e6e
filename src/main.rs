use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use mazeprint::{
    GenerationConfig, MazeGenerator, Placement,
    renderer::{RenderConfig, TextRenderer},
    solvers,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlacementArg {
    /// Two distinct corners, shuffled
    Corners,
    /// Two distinct random cells
    Random,
    /// The corner pair with the longest route
    Farthest,
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Corners => Placement::Corners,
            PlacementArg::Random => Placement::Random,
            PlacementArg::Farthest => Placement::Farthest,
        }
    }
}

/// Generate a printable perfect maze with a guaranteed route from start to finish
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = GenerationConfig::DEFAULT_WIDTH, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Maze height in cells
    #[arg(long, default_value_t = GenerationConfig::DEFAULT_HEIGHT, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// How many mazes to carve before settling for an unvalidated one
    #[arg(long, default_value_t = GenerationConfig::DEFAULT_MAX_REGENERATIONS)]
    retries: usize,

    /// Endpoint placements to try on each carved maze
    #[arg(long, default_value_t = GenerationConfig::DEFAULT_MAX_PLACEMENT_ATTEMPTS)]
    placement_attempts: usize,

    /// How start and finish are chosen
    #[arg(long, value_enum, default_value_t = PlacementArg::Corners)]
    placement: PlacementArg,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the plain text maze [default: maze_<unix time>.txt]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Draw the route from start to finish
    #[arg(long)]
    show_route: bool,

    /// Print without terminal colors
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            max_regenerations: self.retries,
            max_placement_attempts: self.placement_attempts,
            placement: self.placement.into(),
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            PathBuf::from(format!("maze_{timestamp}.txt"))
        })
    }
}

/// Opens `path` for logging, creating its directory if needed.
fn log_file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?
        .to_str()
        .with_context(|| format!("log file name in {} is not valid UTF-8", path.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Sets up the global subscriber. Logs go to stderr, or to `log_file` when given.
/// The returned guard flushes pending logs when dropped.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = match log_file {
        Some(path) => tracing_appender::non_blocking(log_file_appender(path)?),
        None => tracing_appender::non_blocking(std::io::stderr()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .init();
    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_file.as_deref())?;

    let config = args.generation_config();
    println!("Generating {}x{} maze...", config.width, config.height);
    let mut generator = MazeGenerator::new(args.seed);
    let generation = generator.generate(&config)?;
    let validated = generation.is_validated();
    let maze = generation.into_maze();

    let route = match solvers::validate(&maze) {
        Ok(route) => {
            println!("✓ Path verified from start to finish ({} cells)", route.len());
            Some(route)
        }
        Err(err) => {
            println!("Warning: generated maze may not be solvable: {err}");
            None
        }
    };
    if !validated {
        tracing::warn!("Maze was produced by the unvalidated fallback");
    }

    let renderer = TextRenderer::new(RenderConfig {
        color: !args.no_color,
        show_route: args.show_route,
    });
    let mut stdout = std::io::stdout();
    renderer
        .print(&maze, route.as_deref(), &mut stdout)
        .context("failed to print maze")?;

    let path = args.output_path();
    std::fs::write(&path, renderer.render_plain(&maze, route.as_deref()))
        .with_context(|| format!("failed to write maze to {}", path.display()))?;
    tracing::info!("Wrote maze to {}", path.display());

    let (columns, rows) = TextRenderer::dimensions(&maze);
    println!("✓ Maze saved as '{}' ({columns}x{rows} characters)", path.display());
    println!("Start: {} - marked with ()", maze.start());
    println!("Finish: {} - marked with []", maze.finish());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_under_a_regular_file_is_an_error() {
        let blocker = std::env::temp_dir().join(format!("mazeprint-log-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = log_file_appender(&blocker.join("maze.log"));
        std::fs::remove_file(&blocker).unwrap();

        let err = result.err().expect("opening a log file under a regular file must fail");
        assert!(err.to_string().contains("failed to open log file"), "{err:#}");
    }

    #[test]
    fn test_log_file_is_created() {
        let dir = std::env::temp_dir().join(format!("mazeprint-logs-{}", std::process::id()));
        let path = dir.join("maze.log");

        let appender = log_file_appender(&path);
        assert!(appender.is_ok());
        drop(appender);
        assert!(path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_log_file_needs_a_file_name() {
        assert!(log_file_appender(Path::new("/")).is_err());
    }
}
