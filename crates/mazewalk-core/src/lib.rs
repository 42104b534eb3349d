//! **mazewalk-core**: core types for text mazes.
//!
//! This crate provides the foundational types used across the *mazewalk*
//! workspace: geometry primitives, the character [`Cell`], and the owned
//! row-major [`Grid`] a maze is loaded into and searched over.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::Grid;
