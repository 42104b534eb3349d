//! Rendering a finished walk.

use std::io::Write;

use clap::ValueEnum;
use mazewalk_core::{Grid, Point};
use mazewalk_paths::{Dfs, Outcome, Walk};
use serde::Serialize;

use crate::error::MazeError;

/// Output format of the report.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Visited path line followed by the annotated maze.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Write the visited log and the final grid as plain text.
///
/// ```text
/// Visited Path:
/// [1, 0] [1, 1] ...
///
/// Final Maze:
/// ...
/// ```
pub fn write_text<W: Write>(out: &mut W, log: &[Point], grid: &Grid) -> std::io::Result<()> {
    writeln!(out, "Visited Path:")?;
    for p in log {
        write!(out, "{p} ")?;
    }
    write!(out, "\n\nFinal Maze:\n")?;
    write!(out, "{grid}")
}

#[derive(Serialize)]
struct JsonReport {
    outcome: Outcome,
    start: [i32; 2],
    end: [i32; 2],
    steps: usize,
    visited: Vec<[i32; 2]>,
    maze: Vec<String>,
}

fn pair(p: Point) -> [i32; 2] {
    [p.x, p.y]
}

/// Write the walk as one pretty-printed JSON object.
pub fn write_json<W: Write>(
    out: &mut W,
    dfs: &Dfs,
    walk: &Walk,
    grid: &Grid,
) -> Result<(), MazeError> {
    let report = JsonReport {
        outcome: walk.outcome,
        start: pair(dfs.start()),
        end: pair(dfs.end()),
        steps: walk.steps,
        visited: walk.log().iter().copied().map(pair).collect(),
        maze: grid
            .rows()
            .map(|row| row.iter().map(|c| c.ch()).collect())
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Write the report in `format`.
pub fn write_report<W: Write>(
    out: &mut W,
    format: Format,
    dfs: &Dfs,
    walk: &Walk,
    grid: &Grid,
) -> Result<(), MazeError> {
    match format {
        Format::Text => write_text(out, walk.log(), grid)?,
        Format::Json => write_json(out, dfs, walk, grid)?,
    }
    out.flush()?;
    Ok(())
}
