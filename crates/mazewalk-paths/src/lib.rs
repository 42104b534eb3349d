//! Depth-first search over character mazes.
//!
//! The search is split into small pieces that can be tested on their own:
//!
//! - [`Traversal`] records which cells were visited and in what order
//! - [`Frontier`] is the bounded LIFO of positions waiting to be explored
//! - [`Neighbors`] enumerates the four orthogonal neighbors in priority order
//! - [`Dfs`] drives the search over anything implementing [`Walkable`]
//!
//! # Example
//!
//! ```
//! use mazewalk_core::{Cell, Grid, Point};
//! use mazewalk_paths::{Dfs, Outcome};
//!
//! let mut grid = Grid::new(1, 3, Cell::OPEN);
//! let walk = Dfs::new(Point::new(0, 0), Point::new(0, 2)).run(&mut grid);
//! assert_eq!(walk.outcome, Outcome::Reached);
//! assert_eq!(walk.traversal.log().len(), 3);
//! ```

mod dfs;
mod frontier;
mod neighbors;
mod traits;
mod traversal;

pub use dfs::{Branching, Dfs, Outcome, Walk};
pub use frontier::Frontier;
pub use neighbors::{DIRECTIONS, Neighbors};
pub use traits::Walkable;
pub use traversal::Traversal;
