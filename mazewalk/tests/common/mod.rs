#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const REFERENCE_MAZE: &str = "\
#########
  #     #
# # ### #
# #   # #
# ### # #
#   # # #
### # # #
#      ##
#########
";

pub const REFERENCE_VISITED: &str = "[1, 0] [1, 1] [2, 1] [3, 1] [4, 1] [5, 1] [5, 2] [5, 3] \
[6, 3] [7, 3] [7, 4] [7, 5] [7, 6] ";

pub const REFERENCE_FINAL: &str = "\
#########
++#     #
#+# ### #
#+#   # #
#+### # #
#+++# # #
###+# # #
#  ++++##
#########
";

/// A maze written to a temporary directory that lives as long as the value.
pub struct MazeFile {
    _tmp: TempDir,
    pub path: PathBuf,
}

impl MazeFile {
    pub fn new(contents: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("maze.txt");
        fs::write(&path, contents).expect("write maze");
        Self { _tmp: tmp, path }
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("utf-8 temp path")
    }
}
