use mazewalk_core::Point;

/// Bounded LIFO of positions pending exploration.
///
/// Capacity is fixed at construction. The search sizes it to the number of
/// cells in the maze, which is an upper bound on distinct pushes since a
/// cell is marked visited before it is pushed.
#[derive(Debug, Clone)]
pub struct Frontier {
    stack: Vec<Point>,
    capacity: usize,
}

impl Frontier {
    /// Create an empty frontier holding at most `capacity` positions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `p` on top. When the frontier is full the point is dropped and
    /// handed back as `Err(p)`.
    pub fn push(&mut self, p: Point) -> Result<(), Point> {
        if self.stack.len() >= self.capacity {
            return Err(p);
        }
        self.stack.push(p);
        Ok(())
    }

    /// Remove and return the top position, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<Point> {
        self.stack.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
