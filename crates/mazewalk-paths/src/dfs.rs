//! Depth-first search from a start cell to an end cell.

use mazewalk_core::Point;

use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::traits::Walkable;
use crate::traversal::Traversal;

/// How many neighbors a popped position may push.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Branching {
    /// Push only the first qualifying neighbor in Down, Right, Up, Left
    /// order. The walk follows one deterministic line and can dead-end
    /// before reaching a reachable end cell.
    #[default]
    Single,
    /// Push every qualifying neighbor in priority order (classic DFS).
    Full,
}

/// How a search ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Outcome {
    /// The end cell was popped.
    Reached,
    /// The frontier ran dry first.
    Exhausted,
}

/// Result of a [`Dfs::run`].
#[derive(Debug, Clone)]
pub struct Walk {
    pub outcome: Outcome,
    /// Visited flags and visitation order.
    pub traversal: Traversal,
    /// Number of positions popped from the frontier.
    pub steps: usize,
    /// Pushes the frontier refused because it was full.
    pub dropped: usize,
}

impl Walk {
    /// Whether the end cell was reached.
    #[inline]
    pub fn reached(&self) -> bool {
        self.outcome == Outcome::Reached
    }

    /// Visited points in visitation order.
    #[inline]
    pub fn log(&self) -> &[Point] {
        self.traversal.log()
    }
}

/// Depth-first search configuration.
///
/// Every popped position is overwritten with the visited marker, whatever
/// it held before, and the search stops as soon as `end` is popped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dfs {
    start: Point,
    end: Point,
    branching: Branching,
}

impl Dfs {
    /// Search from `start` to `end` with [`Branching::Single`].
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            branching: Branching::default(),
        }
    }

    /// Set the branching policy (builder).
    pub fn with_branching(mut self, branching: Branching) -> Self {
        self.branching = branching;
        self
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn branching(&self) -> Branching {
        self.branching
    }

    /// Run the search over `maze`, marking popped cells in place.
    ///
    /// A start outside `maze.bounds()` is never logged and the search
    /// exhausts immediately.
    pub fn run<W: Walkable>(&self, maze: &mut W) -> Walk {
        let rng = maze.bounds();
        let mut traversal = Traversal::new(rng);
        let mut frontier = Frontier::with_capacity(rng.len());
        let mut neighbors = Neighbors::new();
        let mut steps = 0;
        let mut dropped = 0;

        if !traversal.mark_visited(self.start) {
            log::warn!("start {} lies outside {}", self.start, rng);
            return Walk {
                outcome: Outcome::Exhausted,
                traversal,
                steps,
                dropped,
            };
        }
        if frontier.push(self.start).is_err() {
            dropped += 1;
        }

        let outcome = loop {
            let Some(current) = frontier.pop() else {
                break Outcome::Exhausted;
            };
            steps += 1;
            maze.mark(current);
            log::trace!("step {steps}: popped {current}");

            if current == self.end {
                if !frontier.is_empty() {
                    log::trace!("end reached with positions still pending");
                }
                break Outcome::Reached;
            }

            let candidates = neighbors.cardinal(current, |n| {
                maze.is_valid_move(n) && !traversal.is_visited(n)
            });
            let take = match self.branching {
                Branching::Single => candidates.len().min(1),
                Branching::Full => candidates.len(),
            };
            for &next in &candidates[..take] {
                if let Err(p) = frontier.push(next) {
                    dropped += 1;
                    log::warn!("frontier full ({}), dropping {p}", frontier.capacity());
                }
                traversal.mark_visited(next);
            }
        };

        log::debug!(
            "dfs {} -> {}: {:?} after {} steps, {} cells visited, {} dropped",
            self.start,
            self.end,
            outcome,
            steps,
            traversal.len(),
            dropped
        );

        Walk {
            outcome,
            traversal,
            steps,
            dropped,
        }
    }
}
