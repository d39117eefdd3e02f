//! Zobrist keys for the unbounded board
//!
//! Every (coordinate, stone) pair owns a pseudorandom 64-bit key; a position
//! hash is the XOR of the keys of all occupied cells, so placing or removing
//! a stone is a single XOR.
//!
//! The board is infinite, so keys cannot be precomputed. They are generated
//! the first time a coordinate is referenced and cached. Each key is derived
//! from `(seed, coordinate)` alone, which makes two tables built from the
//! same seed agree no matter in which order they were queried.
//!
//! # Example
//!
//! ```
//! use fourline::board::{Coord, Stone, ZobristTable};
//!
//! let mut a = ZobristTable::new();
//! let mut b = ZobristTable::new();
//!
//! let k1 = a.key(Coord::new(3, -4), Stone::X);
//! b.key(Coord::new(100, 100), Stone::O);
//! assert_eq!(b.key(Coord::new(3, -4), Stone::X), k1);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::coord::{Coord, CoordMap};
use super::Stone;

/// Default seed shared by every board unless one is injected.
pub const DEFAULT_ZOBRIST_SEED: u64 = 0xA57F_1234_C0FF_EE00;

/// 64-bit finalizer (MurmurHash3 `fmix64`), spreads a packed coordinate
/// before it perturbs the seed.
#[inline]
const fn mix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

/// Lazily populated Zobrist key table.
#[derive(Debug, Clone)]
pub struct ZobristTable {
    seed: u64,
    /// Cached keys: `[key for X, key for O]`
    keys: CoordMap<[u64; 2]>,
    /// XORed into transposition keys when O is to move
    o_to_move: u64,
}

impl ZobristTable {
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_ZOBRIST_SEED)
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self {
            seed,
            keys: CoordMap::default(),
            o_to_move: rng.gen(),
        }
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Key of `stone` at `at`, generating the pair for `at` on first use.
    ///
    /// `Stone::Empty` maps to 0 so that XORing it is a no-op.
    pub fn key(&mut self, at: Coord, stone: Stone) -> u64 {
        let slot = match stone {
            Stone::X => 0,
            Stone::O => 1,
            Stone::Empty => return 0,
        };
        let seed = self.seed;
        self.keys
            .entry(at)
            .or_insert_with(|| {
                let mut rng = SmallRng::seed_from_u64(seed ^ mix64(at.packed()));
                [rng.gen(), rng.gen()]
            })[slot]
    }

    /// Side-to-move component for transposition keys.
    #[inline]
    pub fn side_key(&self, to_move: Stone) -> u64 {
        if to_move == Stone::O {
            self.o_to_move
        } else {
            0
        }
    }

    /// Number of coordinates that have been assigned keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Full recomputation of a position hash from a list of stones.
    pub fn hash_of<I>(&mut self, stones: I) -> u64
    where
        I: IntoIterator<Item = (Coord, Stone)>,
    {
        stones
            .into_iter()
            .fold(0, |h, (at, stone)| h ^ self.key(at, stone))
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
