use mazewalk_core::{Point, Range};

/// Visited flags for every cell of a range, plus the order cells were
/// visited in.
///
/// A point is logged exactly when it is marked, and at most once.
#[derive(Debug, Clone)]
pub struct Traversal {
    rng: Range,
    visited: Vec<bool>,
    log: Vec<Point>,
}

impl Traversal {
    /// Create an empty traversal over `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            visited: vec![false; rng.len()],
            log: Vec::new(),
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let rel = p - self.rng.min;
        Some(rel.x as usize * self.rng.width() as usize + rel.y as usize)
    }

    /// Whether `p` has been marked. Points outside the range never are.
    #[inline]
    pub fn is_visited(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.visited[i])
    }

    /// Mark `p` visited and append it to the log.
    ///
    /// Returns `false` without logging if `p` is outside the range or was
    /// already marked.
    pub fn mark_visited(&mut self, p: Point) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        if self.visited[i] {
            return false;
        }
        self.visited[i] = true;
        self.log.push(p);
        true
    }

    /// Visited points in the order they were marked.
    #[inline]
    pub fn log(&self) -> &[Point] {
        &self.log
    }

    /// Consume the traversal, keeping only the log.
    pub fn into_log(self) -> Vec<Point> {
        self.log
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_and_query() {
        let mut t = Traversal::new(Range::new(0, 0, 3, 3));
        assert!(t.is_empty());
        assert!(!t.is_visited(Point::new(1, 1)));
        assert!(t.mark_visited(Point::new(1, 1)));
        assert!(t.is_visited(Point::new(1, 1)));
        assert!(!t.is_visited(Point::new(1, 2)));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn log_preserves_mark_order() {
        let mut t = Traversal::new(Range::new(0, 0, 3, 3));
        for p in [Point::new(2, 2), Point::new(0, 0), Point::new(1, 2)] {
            t.mark_visited(p);
        }
        assert_eq!(
            t.log(),
            &[Point::new(2, 2), Point::new(0, 0), Point::new(1, 2)]
        );
    }

    #[test]
    fn repeat_mark_is_ignored() {
        let mut t = Traversal::new(Range::new(0, 0, 2, 2));
        assert!(t.mark_visited(Point::new(0, 1)));
        assert!(!t.mark_visited(Point::new(0, 1)));
        assert_eq!(t.into_log(), vec![Point::new(0, 1)]);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut t = Traversal::new(Range::new(0, 0, 2, 2));
        assert!(!t.mark_visited(Point::new(2, 0)));
        assert!(!t.mark_visited(Point::new(-1, 0)));
        assert!(!t.is_visited(Point::new(-1, 0)));
        assert!(t.is_empty());
    }

    #[test]
    fn offset_range_indexing() {
        let mut t = Traversal::new(Range::new(2, 3, 4, 6));
        assert!(t.mark_visited(Point::new(3, 5)));
        assert!(t.is_visited(Point::new(3, 5)));
        assert!(!t.is_visited(Point::new(2, 3)));
        assert!(!t.mark_visited(Point::new(0, 0)));
    }
}
