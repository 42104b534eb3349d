//! Reading mazes from text.
//!
//! One line is one row; the line terminator (`\n` or `\r\n`) is not part of
//! the row. The grid is as wide as the longest row and shorter rows are
//! padded with [`LoaderConfig::pad`], which is never open path.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use mazewalk_core::{Cell, Grid, Point};

use crate::error::MazeError;

/// Default row limit.
pub const MAX_ROWS: usize = 100;
/// Default row-length limit, in characters.
pub const MAX_COLS: usize = 100;
/// Default filler for cells past the end of a short row.
pub const DEFAULT_PAD: char = '#';

/// Limits and padding used when loading a maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    pub max_rows: usize,
    pub max_cols: usize,
    pub pad: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_rows: MAX_ROWS,
            max_cols: MAX_COLS,
            pad: DEFAULT_PAD,
        }
    }
}

/// Load a maze from the file at `path`.
pub fn load_path(path: impl AsRef<Path>, cfg: &LoaderConfig) -> Result<Grid, MazeError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|source| MazeError::Open {
        name: name.clone(),
        source,
    })?;
    load_reader(BufReader::new(file), &name, cfg)
}

/// Load a maze from an in-memory string.
pub fn parse_str(text: &str, cfg: &LoaderConfig) -> Result<Grid, MazeError> {
    load_reader(text.as_bytes(), "<string>", cfg)
}

/// Load a maze line by line from `reader`. `name` identifies the source in
/// errors and logs.
///
/// Each read is capped just past the longest row `cfg.max_cols` allows, so
/// an unterminated or runaway line is rejected without being buffered whole.
pub fn load_reader<R: BufRead>(
    mut reader: R,
    name: &str,
    cfg: &LoaderConfig,
) -> Result<Grid, MazeError> {
    if Cell(cfg.pad).is_open() {
        return Err(MazeError::InvalidPad(cfg.pad));
    }

    let read_err = |source| MazeError::Read {
        name: name.to_string(),
        source,
    };
    let too_long = |row| MazeError::RowTooLong {
        name: name.to_string(),
        row,
        max: cfg.max_cols,
    };
    // Four bytes per UTF-8 character plus "\r\n".
    let limit = cfg.max_cols.saturating_mul(4).saturating_add(2);

    let mut rows: Vec<Vec<char>> = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = (&mut reader)
            .take(limit as u64)
            .read_until(b'\n', &mut buf)
            .map_err(read_err)?;
        if n == 0 {
            break;
        }
        if rows.len() == cfg.max_rows {
            return Err(MazeError::TooManyRows {
                name: name.to_string(),
                max: cfg.max_rows,
            });
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        } else if n == limit {
            return Err(too_long(rows.len()));
        }
        let line = std::str::from_utf8(&buf)
            .map_err(|e| read_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        let row: Vec<char> = line.chars().collect();
        if row.len() > cfg.max_cols {
            return Err(too_long(rows.len()));
        }
        rows.push(row);
    }

    let height = rows.len();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut grid = Grid::new(height as i32, width as i32, Cell(cfg.pad));
    for (x, row) in rows.iter().enumerate() {
        for (y, &ch) in row.iter().enumerate() {
            grid.set(Point::new(x as i32, y as i32), Cell(ch));
        }
    }

    log::debug!("loaded {name}: {height} rows x {width} columns");
    Ok(grid)
}
