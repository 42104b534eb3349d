mod common;

use clap::Parser;
use mazewalk::{Cli, MazeError, loader};
use mazewalk_core::{Cell, Point};
use mazewalk_paths::{Dfs, Outcome};

use common::{MazeFile, REFERENCE_FINAL, REFERENCE_MAZE, REFERENCE_VISITED};

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("mazewalk").chain(args.iter().copied()))
}

#[test]
fn run_writes_reference_report() {
    let maze = MazeFile::new(REFERENCE_MAZE);
    let mut out = Vec::new();
    let walk = mazewalk::run(&cli(&[maze.path_str()]), &mut out).unwrap();
    assert_eq!(walk.outcome, Outcome::Reached);
    assert_eq!(walk.log().len(), 13);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Visited Path:\n{REFERENCE_VISITED}\n\nFinal Maze:\n{REFERENCE_FINAL}")
    );
}

#[test]
fn runs_are_deterministic() {
    let maze = MazeFile::new(REFERENCE_MAZE);
    let once = || {
        let mut out = Vec::new();
        mazewalk::run(&cli(&[maze.path_str()]), &mut out).unwrap();
        out
    };
    assert_eq!(once(), once());
}

#[test]
fn independent_runs_do_not_share_state() {
    let a = MazeFile::new(REFERENCE_MAZE);
    let b = MazeFile::new("   \n");
    let mut out = Vec::new();
    let first = mazewalk::run(&cli(&[a.path_str()]), &mut out).unwrap();
    let second = mazewalk::run(
        &cli(&[b.path_str(), "--start", "0,0", "--end", "0,2"]),
        &mut Vec::new(),
    )
    .unwrap();
    assert_eq!(first.log().len(), 13);
    assert_eq!(
        second.log(),
        &[Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
    );
}

#[test]
fn ragged_rows_are_padded_as_walls() {
    // Row 1 is shorter than row 0; the walk must not leak into the padding.
    let maze = MazeFile::new("    \n \n");
    let mut grid = loader::load_path(&maze.path, &loader::LoaderConfig::default()).unwrap();
    assert_eq!(grid.at(Point::new(1, 1)), Some(Cell('#')));
    let walk = mazewalk::solve(&mut grid, &Dfs::new(Point::new(1, 0), Point::new(1, 3))).unwrap();
    assert_eq!(walk.outcome, Outcome::Exhausted);
    assert!(walk.log().iter().all(|p| p.x == 0 || p.y == 0));
}

#[test]
fn missing_file_is_open_error() {
    let err = mazewalk::run(&cli(&["/no/such/dir/maze.txt"]), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, MazeError::Open { .. }));
}
