//! The [`Cell`] type: a single maze character.

use std::fmt;

/// A maze cell, wrapping the character read from the source.
///
/// A space is open path, `+` marks a cell the search has processed, and
/// every other character is a wall.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub char);

impl Cell {
    /// Open-path marker.
    pub const OPEN: Cell = Cell(' ');

    /// Marker written into every cell the search pops.
    pub const VISITED: Cell = Cell('+');

    /// The underlying character.
    #[inline]
    pub const fn ch(self) -> char {
        self.0
    }

    /// Whether the cell can be walked into.
    #[inline]
    pub const fn is_open(self) -> bool {
        self.0 == Self::OPEN.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_space_is_open() {
        assert!(Cell::OPEN.is_open());
        assert!(!Cell::VISITED.is_open());
        assert!(!Cell('#').is_open());
        assert!(!Cell('\t').is_open());
    }

    #[test]
    fn displays_its_char() {
        assert_eq!(Cell('a').ch(), 'a');
        assert_eq!(Cell::VISITED.to_string(), "+");
    }
}
