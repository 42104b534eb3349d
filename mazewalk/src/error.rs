use std::io;

use mazewalk_core::Point;
use thiserror::Error;

/// Errors that stop a maze run before or after the search.
///
/// Failing to reach the end cell is not one of them.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("could not open maze file {name}: {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("could not read maze file {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("maze {name} has more than {max} rows")]
    TooManyRows { name: String, max: usize },

    #[error("maze {name} row {row} is longer than {max} characters")]
    RowTooLong { name: String, row: usize, max: usize },

    #[error("pad character {0:?} is the open-path marker")]
    InvalidPad(char),

    #[error("start position {point} lies outside the {height}x{width} maze")]
    StartOutOfBounds {
        point: Point,
        height: i32,
        width: i32,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
