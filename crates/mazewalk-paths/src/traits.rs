use mazewalk_core::{Cell, Grid, Point, Range};

/// A maze surface the search can walk and mark.
pub trait Walkable {
    /// The rectangle moves are confined to.
    fn bounds(&self) -> Range;

    /// Whether the cell at `p` currently holds the open-path marker.
    /// Out-of-bounds points are never open.
    fn is_open(&self, p: Point) -> bool;

    /// Overwrite the cell at `p` with the visited marker.
    fn mark(&mut self, p: Point);

    /// A valid move target: in bounds and open.
    #[inline]
    fn is_valid_move(&self, p: Point) -> bool {
        self.bounds().contains(p) && self.is_open(p)
    }
}

impl Walkable for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    #[inline]
    fn mark(&mut self, p: Point) {
        self.set(p, Cell::VISITED);
    }
}
