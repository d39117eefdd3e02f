//! Search module for the four-in-a-row AI
//!
//! Contains:
//! - Greedy one-ply move selection
//! - Negamax alpha-beta with a transposition table and iterative deepening
//! - Monte Carlo random playouts
//! - Forcing-move detection (win, block, fork block)
//! - Wall-clock deadlines for timed search

pub mod alphabeta;
pub mod deadline;
pub mod greedy;
pub mod montecarlo;
pub mod threat;
pub mod tt;

/// Search score, from the perspective of the side to move.
pub type Score = i64;

/// Window sentinel; no real score reaches it.
pub const INF: Score = 1 << 60;

/// Base score of a won position. An immediate win scores `WIN_SCORE` plus the
/// remaining depth, so nearer wins score higher.
pub const WIN_SCORE: Score = 1 << 48;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use deadline::{Deadline, Timeout};
pub use greedy::{greedy_move, GreedyChoice};
pub use montecarlo::{
    MonteCarlo, MonteCarloResult, DEFAULT_MC_ITERATIONS, DEFAULT_MC_PLAYOUT_DEPTH, DEFAULT_MC_SEED,
};
pub use threat::{find_forcing_move, fork_points, ForcingKind, ForcingMove};
pub use tt::{EntryType, ProbeOutcome, TTEntry, TTStats, TranspositionTable, DEFAULT_TT_CAPACITY};
