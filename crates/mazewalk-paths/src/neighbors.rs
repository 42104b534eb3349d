use mazewalk_core::Point;

/// Cardinal offsets in search priority order: Down, Right, Up, Left.
pub const DIRECTIONS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// Cached neighbor computation helper.
///
/// Enumerates the four orthogonal neighbors of a point in
/// [`DIRECTIONS`] order, filtered by a predicate.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DIRECTIONS.len()),
        }
    }

    /// Return the 4-directional neighbors of `p`, keeping only those for
    /// which `keep` returns `true`. Order is Down, Right, Up, Left.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in DIRECTIONS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
