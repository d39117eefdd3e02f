//! Sparse board with incremental bounding box and Zobrist hash

use std::ops::{Deref, DerefMut};

use super::coord::{Coord, CoordMap, CoordSet};
use super::zobrist::ZobristTable;
use super::{Bounds, Stone};
use crate::eval;
use crate::rules;

/// Unbounded game board.
///
/// Only occupied cells are stored. The bounding box and the position hash
/// are kept exactly in step with occupancy by `place` and `undo`.
#[derive(Debug, Clone)]
pub struct Board {
    cells: CoordMap<Stone>,
    bounds: Option<Bounds>,
    hash: u64,
    keys: ZobristTable,
}

impl Board {
    pub fn new() -> Self {
        Self::with_keys(ZobristTable::new())
    }

    /// Empty board hashing with the given key table.
    pub fn with_keys(keys: ZobristTable) -> Self {
        Self {
            cells: CoordMap::default(),
            bounds: None,
            hash: 0,
            keys,
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, at: Coord) -> Stone {
        self.cells.get(&at).copied().unwrap_or(Stone::Empty)
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        !self.cells.contains_key(&at)
    }

    /// Put `stone` on `at`.
    ///
    /// Returns `false` and leaves the board untouched if the cell is already
    /// occupied or `stone` is `Empty`.
    pub fn place(&mut self, at: Coord, stone: Stone) -> bool {
        if !stone.is_player() || self.cells.contains_key(&at) {
            return false;
        }
        self.cells.insert(at, stone);
        match self.bounds.as_mut() {
            Some(b) => b.extend(at),
            None => self.bounds = Some(Bounds::at(at)),
        }
        self.hash ^= self.keys.key(at, stone);
        true
    }

    /// Remove the stone on `at`. No-op on an empty cell.
    ///
    /// No history is kept: callers must only undo their own most recent
    /// unmatched `place` on that cell.
    pub fn undo(&mut self, at: Coord) {
        let Some(stone) = self.cells.remove(&at) else {
            return;
        };
        self.hash ^= self.keys.key(at, stone);

        if self.cells.is_empty() {
            self.bounds = None;
        } else if self.bounds.is_some_and(|b| b.on_edge(at)) {
            self.recompute_bounds();
        }
    }

    /// Place `stone` and get a guard that undoes it when dropped.
    ///
    /// The guard dereferences to the board, so nested speculative moves can
    /// be stacked; every exit path, including `?`, restores the board.
    pub fn place_scoped(&mut self, at: Coord, stone: Stone) -> Option<PlacedStone<'_>> {
        if self.place(at, stone) {
            Some(PlacedStone { board: self, at })
        } else {
            None
        }
    }

    fn recompute_bounds(&mut self) {
        let mut iter = self.cells.keys();
        self.bounds = iter.next().map(|&first| {
            let mut b = Bounds::at(first);
            for &c in iter {
                b.extend(c);
            }
            b
        });
    }

    /// True if `at` holds `stone` and lies on a run of at least
    /// `run_length` stones in some direction.
    #[inline]
    pub fn win_from(&self, at: Coord, stone: Stone, run_length: usize) -> bool {
        rules::has_run_at(self, at, stone, run_length)
    }

    /// Empty cells within Chebyshev distance `radius` of any stone, sorted.
    ///
    /// An empty board yields just the origin. Cells past the `i32` range
    /// are never candidates.
    pub fn candidates(&self, radius: i32) -> Vec<Coord> {
        if self.cells.is_empty() {
            return vec![Coord::ORIGIN];
        }
        let side = (2 * radius + 1).max(1) as usize;
        let mut seen = CoordSet::default();
        seen.reserve(self.cells.len() * side);
        let mut out = Vec::with_capacity(self.cells.len() * side);
        for &c in self.cells.keys() {
            for dx in -radius..=radius {
                let Some(x) = c.x.checked_add(dx) else {
                    continue;
                };
                for dy in -radius..=radius {
                    let Some(y) = c.y.checked_add(dy) else {
                        continue;
                    };
                    let n = Coord::new(x, y);
                    if !self.cells.contains_key(&n) && seen.insert(n) {
                        out.push(n);
                    }
                }
            }
        }
        out.sort_unstable();
        out
    }

    /// Static evaluation: X's line scores minus O's.
    #[inline]
    pub fn evaluate(&self, run_length: usize) -> i64 {
        eval::evaluate(self, run_length)
    }

    /// Zobrist hash of the stones on the board.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Hash of the stones plus whose turn it is, for transposition lookups.
    #[inline]
    pub fn position_key(&self, to_move: Stone) -> u64 {
        self.hash ^ self.keys.side_key(to_move)
    }

    #[inline]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells in arbitrary order.
    pub fn stones(&self) -> impl Iterator<Item = (Coord, Stone)> + '_ {
        self.cells.iter().map(|(&c, &s)| (c, s))
    }

    /// The key table this board hashes with.
    #[inline]
    pub fn keys(&self) -> &ZobristTable {
        &self.keys
    }

    /// Remove every stone; keeps the key cache.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.bounds = None;
        self.hash = 0;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A speculative stone that is taken back when the guard goes out of scope.
pub struct PlacedStone<'a> {
    board: &'a mut Board,
    at: Coord,
}

impl PlacedStone<'_> {
    /// Where the guarded stone sits.
    #[inline]
    pub fn at(&self) -> Coord {
        self.at
    }
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        self.board.undo(self.at);
    }
}
