//! Coordinates on the unbounded board
//!
//! Components span the full `i32` range. Stepping past either end yields
//! `None`, and such cells are treated as permanently empty and unplayable.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHashSet};

/// A cell on the infinite board.
///
/// Ordering is by `x`, then `y`, which gives candidate lists a stable order
/// independent of map internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// The origin, also the answer on an empty board.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step `k` cells along direction `(dx, dy)`, or `None` past the `i32` range.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, k: i32) -> Option<Self> {
        let x = self.x.checked_add(dx.checked_mul(k)?)?;
        let y = self.y.checked_add(dy.checked_mul(k)?)?;
        Some(Self { x, y })
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> i64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        dx.max(dy)
    }

    /// Both components packed into one word: high half `x`, low half `y`.
    #[inline]
    pub const fn packed(self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Hash for Coord {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.packed());
    }
}

/// Sparse map keyed by coordinate.
pub type CoordMap<V> = FxHashMap<Coord, V>;

/// Sparse set of coordinates.
pub type CoordSet = FxHashSet<Coord>;
