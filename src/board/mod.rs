//! Sparse board representation for the unbounded four-in-a-row game

pub mod board;
pub mod coord;
pub mod zobrist;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, PlacedStone};
pub use coord::{Coord, CoordMap, CoordSet};
pub use zobrist::{ZobristTable, DEFAULT_ZOBRIST_SEED};

/// Stones needed in a row to win.
pub const DEFAULT_RUN_LENGTH: usize = 4;

/// Chebyshev radius around existing stones searched for candidate moves.
pub const DEFAULT_CANDIDATE_RADIUS: i32 = 2;

/// The four line axes; each is scanned both ways from a stone.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    X,
    O,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::X => Stone::O,
            Stone::O => Stone::X,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    /// Console glyph.
    pub fn symbol(self) -> char {
        match self {
            Stone::X => 'X',
            Stone::O => 'O',
            Stone::Empty => '.',
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Smallest axis-aligned rectangle containing every stone (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Box of a single cell.
    #[inline]
    pub fn at(c: Coord) -> Self {
        Self {
            min_x: c.x,
            max_x: c.x,
            min_y: c.y,
            max_y: c.y,
        }
    }

    /// Grow to include `c`.
    #[inline]
    pub fn extend(&mut self, c: Coord) {
        self.min_x = self.min_x.min(c.x);
        self.max_x = self.max_x.max(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_y = self.max_y.max(c.y);
    }

    /// True when `c` lies on one of the four edges.
    #[inline]
    pub fn on_edge(&self, c: Coord) -> bool {
        c.x == self.min_x || c.x == self.max_x || c.y == self.min_y || c.y == self.max_y
    }

    /// Centre cell, rounding toward zero like integer division.
    #[inline]
    pub fn center(&self) -> Coord {
        let mid = |lo: i32, hi: i32| ((i64::from(lo) + i64::from(hi)) / 2) as i32;
        Coord::new(mid(self.min_x, self.max_x), mid(self.min_y, self.max_y))
    }
}
