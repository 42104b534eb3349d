//! Load a text maze, walk it depth-first from a start cell to an end cell
//! and report the visited cells together with the marked-up maze.

pub mod cli;
pub mod error;
pub mod loader;
pub mod report;

use std::io::Write;

use mazewalk_core::Grid;
use mazewalk_paths::{Dfs, Walk};

pub use cli::Cli;
pub use error::MazeError;
pub use loader::LoaderConfig;
pub use report::Format;

/// Check the start against `grid`, then run `dfs` over it.
///
/// An end outside the grid is never popped, so the search exhausts and the
/// caller still gets a walk to report.
pub fn solve(grid: &mut Grid, dfs: &Dfs) -> Result<Walk, MazeError> {
    let start = dfs.start();
    if !grid.contains(start) {
        return Err(MazeError::StartOutOfBounds {
            point: start,
            height: grid.height(),
            width: grid.width(),
        });
    }
    Ok(dfs.run(grid))
}

/// Load the maze named on the command line, walk it and write the report
/// to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Walk, MazeError> {
    let mut grid = loader::load_path(&cli.maze, &cli.loader_config())?;
    let dfs = cli.dfs();
    let walk = solve(&mut grid, &dfs)?;
    log::info!(
        "{:?}: {} cells visited in {} steps",
        walk.outcome,
        walk.log().len(),
        walk.steps
    );
    report::write_report(out, cli.format, &dfs, &walk, &grid)?;
    Ok(walk)
}
