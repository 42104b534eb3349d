use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mazewalk_core::Point;
use mazewalk_paths::{Branching, Dfs};

use crate::loader::{DEFAULT_PAD, LoaderConfig, MAX_COLS, MAX_ROWS};
use crate::report::Format;

pub const DEFAULT_MAZE: &str = "maze.txt";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "mazewalk",
    version,
    about = "Walk a text maze depth-first and print the cells visited"
)]
pub struct Cli {
    /// Maze file, one row per line. Spaces are open, anything else is wall.
    #[arg(default_value = DEFAULT_MAZE)]
    pub maze: PathBuf,

    /// Start cell as ROW,COL.
    #[arg(long, value_parser = parse_point, default_value = "1,0")]
    pub start: Point,

    /// End cell as ROW,COL.
    #[arg(long, value_parser = parse_point, default_value = "7,6")]
    pub end: Point,

    /// Reject mazes with more rows than this.
    #[arg(long, default_value_t = MAX_ROWS)]
    pub max_rows: usize,

    /// Reject mazes with a row longer than this.
    #[arg(long, default_value_t = MAX_COLS)]
    pub max_cols: usize,

    /// Filler for cells past the end of a short row.
    #[arg(long, default_value_t = DEFAULT_PAD)]
    pub pad: char,

    /// Neighbors pushed per step.
    #[arg(long, value_enum, default_value_t = BranchingArg::Single)]
    pub branching: BranchingArg,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log verbosity on stderr (-v, -vv, -vvv). RUST_LOG overrides it.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BranchingArg {
    /// First open neighbor only
    Single,
    /// Every open neighbor
    Full,
}

impl From<BranchingArg> for Branching {
    fn from(b: BranchingArg) -> Self {
        match b {
            BranchingArg::Single => Branching::Single,
            BranchingArg::Full => Branching::Full,
        }
    }
}

impl Cli {
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            max_rows: self.max_rows,
            max_cols: self.max_cols,
            pad: self.pad,
        }
    }

    pub fn dfs(&self) -> Dfs {
        Dfs::new(self.start, self.end).with_branching(self.branching.into())
    }

    /// Default log filter for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parse `ROW,COL` into a [`Point`].
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row {x:?}: {e}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["mazewalk"]);
        assert_eq!(cli.maze, PathBuf::from("maze.txt"));
        assert_eq!(cli.start, Point::new(1, 0));
        assert_eq!(cli.end, Point::new(7, 6));
        assert_eq!(cli.loader_config(), LoaderConfig::default());
        assert_eq!(cli.dfs().branching(), Branching::Single);
        assert_eq!(cli.format, Format::Text);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn overrides() {
        let cli = Cli::parse_from([
            "mazewalk",
            "other.txt",
            "--start",
            "0,2",
            "--end",
            " 4 , 5",
            "--max-rows",
            "10",
            "--pad",
            "X",
            "--branching",
            "full",
            "--format",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.maze, PathBuf::from("other.txt"));
        let dfs = cli.dfs();
        assert_eq!(dfs.start(), Point::new(0, 2));
        assert_eq!(dfs.end(), Point::new(4, 5));
        assert_eq!(dfs.branching(), Branching::Full);
        assert_eq!(cli.loader_config().max_rows, 10);
        assert_eq!(cli.loader_config().pad, 'X');
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point("-1,0"), Ok(Point::new(-1, 0)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,4").is_err());
        assert!(parse_point("3,").is_err());
        assert!(Cli::try_parse_from(["mazewalk", "--start", "x"]).is_err());
    }
}
