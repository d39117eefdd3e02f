//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by position key,
//! enabling reuse of previous search results for positions reached again
//! through a different move order or on a later turn.
//!
//! The board is unbounded, so entries live in a hash map rather than a fixed
//! array of slots. The map is capped: when it is full, about half of the
//! entries are dropped before the next insertion.
//!
//! # Example
//!
//! ```
//! use fourline::board::Coord;
//! use fourline::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1024);
//!
//! let key = 0x1234_5678_9ABC_DEF0;
//! tt.store(key, 5, 100, EntryType::Exact, Some(Coord::new(0, 0)));
//!
//! let entry = tt.probe(key).unwrap();
//! assert_eq!(entry.score, 100);
//! assert_eq!(entry.best_move, Some(Coord::new(0, 0)));
//! ```

use log::trace;
use rustc_hash::FxHashMap;

use crate::board::Coord;

use super::Score;

/// Default capacity, in entries.
pub const DEFAULT_TT_CAPACITY: usize = 300_000;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Remaining depth the score was searched to
    pub depth: u8,
    /// Score from the perspective of the side to move
    pub score: Score,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Best move found for this position
    pub best_move: Option<Coord>,
}

/// What a probe tells the searcher at a given depth and window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The stored score settles the node
    Cutoff(Score),
    /// The stored bound narrowed the window
    Narrowed { alpha: Score, beta: Score },
    /// Nothing usable at this depth
    Miss,
}

/// Capped map from position key to search result.
pub struct TranspositionTable {
    entries: FxHashMap<u64, TTEntry>,
    capacity: usize,
    evictions: u64,
}

impl TranspositionTable {
    /// Create a table holding at most `capacity` entries (at least 2).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: capacity.max(2),
            evictions: 0,
        }
    }

    /// Raw lookup.
    #[inline]
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<TTEntry> {
        self.entries.get(&key).copied()
    }

    /// Apply a stored entry to the current node.
    ///
    /// Entries searched at least `depth` deep are used: `Exact` settles the
    /// node, bounds tighten the window, and a window that closes settles the
    /// node with the stored score.
    #[must_use]
    pub fn probe_window(&self, key: u64, depth: u8, alpha: Score, beta: Score) -> ProbeOutcome {
        let Some(entry) = self.entries.get(&key) else {
            return ProbeOutcome::Miss;
        };
        if entry.depth < depth {
            return ProbeOutcome::Miss;
        }
        let (alpha, beta) = match entry.entry_type {
            EntryType::Exact => return ProbeOutcome::Cutoff(entry.score),
            EntryType::LowerBound => (alpha.max(entry.score), beta),
            EntryType::UpperBound => (alpha, beta.min(entry.score)),
        };
        if alpha >= beta {
            ProbeOutcome::Cutoff(entry.score)
        } else {
            ProbeOutcome::Narrowed { alpha, beta }
        }
    }

    /// Get best move from the table for move ordering.
    #[inline]
    #[must_use]
    pub fn get_best_move(&self, key: u64) -> Option<Coord> {
        self.entries.get(&key).and_then(|e| e.best_move)
    }

    /// Store a position in the table.
    ///
    /// A new key arriving at a full table first evicts half of the entries.
    pub fn store(
        &mut self,
        key: u64,
        depth: u8,
        score: Score,
        entry_type: EntryType,
        best_move: Option<Coord>,
    ) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            self.evict_half();
        }
        self.entries.insert(
            key,
            TTEntry {
                depth,
                score,
                entry_type,
                best_move,
            },
        );
    }

    fn evict_half(&mut self) {
        let n = self.entries.len() / 2;
        let victims: Vec<u64> = self.entries.keys().take(n).copied().collect();
        for k in &victims {
            self.entries.remove(k);
        }
        self.evictions += 1;
        trace!("tt: evicted {} of {} entries", n, self.capacity);
    }

    /// Clear all entries in the table.
    ///
    /// This should be called when starting a new game.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.len();
        TTStats {
            capacity: self.capacity,
            used,
            usage_percent: (used as f64 / self.capacity as f64 * 100.0) as u8,
            evictions: self.evictions,
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Maximum number of entries
    pub capacity: usize,
    /// Number of entries currently stored
    pub used: usize,
    /// Percentage of capacity in use (0-100)
    pub usage_percent: u8,
    /// How many times half the table was dropped
    pub evictions: u64,
}
