//! The [`Grid`] type: an owned 2D array of [`Cell`]s.
//!
//! A `Grid` is owned exclusively by one search run: the loader builds it,
//! the search marks it and the reporter reads it back.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// A `height × width` grid of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Create a new grid of the given dimensions, every cell set to `fill`.
    pub fn new(height: i32, width: i32, fill: Cell) -> Self {
        let h = height.max(0) as usize;
        let w = width.max(0) as usize;
        Self {
            cells: vec![fill; h * w],
            height: h,
            width: w,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.bounds()
            .contains(p)
            .then(|| p.x as usize * self.width + p.y as usize)
    }

    /// The bounding range `[0, height) × [0, width)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.height as i32, self.width as i32)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. No-op if `p` is outside bounds.
    #[inline]
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |x| &self.cells[x * self.width..(x + 1) * self.width])
    }

    /// Row `x` rendered as a string, or `None` if out of bounds.
    pub fn row_string(&self, x: i32) -> Option<String> {
        let x = usize::try_from(x).ok()?;
        self.rows().nth(x).map(|row| row.iter().map(|c| c.ch()).collect())
    }
}

impl fmt::Display for Grid {
    /// One row per line, each cell as its character.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
