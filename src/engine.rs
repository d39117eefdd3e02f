//! Main AI Engine integrating all search components
//!
//! This module provides the engine that picks a move for any position. The
//! search follows a priority system:
//!
//! 1. **Opening**: an empty board is answered with the origin
//! 2. **Immediate win**: any move that completes a run
//! 3. **Defense**: block the opponent's immediate win
//! 4. **Fork block**: take a cell that would give the opponent two wins
//! 5. **Configured algorithm**: greedy, alpha-beta, iterative deepening or
//!    Monte Carlo
//!
//! # Example
//!
//! ```
//! use fourline::{AIEngine, Algorithm, Board, Coord, EngineConfig, Stone};
//!
//! let config = EngineConfig::default()
//!     .with_algorithm(Algorithm::IterativeDeepening)
//!     .with_max_depth(2);
//! let mut engine = AIEngine::with_config(config).unwrap();
//!
//! let mut board = Board::new();
//! board.place(Coord::new(0, 0), Stone::X);
//!
//! let result = engine.choose_move_with_stats(&mut board, Stone::O);
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use log::info;

use crate::board::{Board, Coord, Stone};
use crate::config::{Algorithm, ConfigError, EngineConfig};
use crate::search::{
    find_forcing_move, greedy_move, ForcingKind, MonteCarlo, Score, SearchResult, Searcher,
    TTStats, WIN_SCORE,
};

/// Type of search that produced the result.
///
/// This indicates which phase of the search hierarchy found the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// First move on an empty board
    Opening,
    /// Found immediate winning move
    ImmediateWin,
    /// Blocked the opponent's immediate win
    Defense,
    /// Occupied an opponent fork cell
    ForkBlock,
    Greedy,
    AlphaBeta,
    IterativeDeepening,
    MonteCarlo,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Coord,
    /// Score in the producing algorithm's own units, if it has one
    pub score: Option<Score>,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Completed search depth (0 when not applicable)
    pub depth: u8,
    /// Nodes searched, or playouts for Monte Carlo
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Iterative deepening ran out of time before `max_depth`
    pub timed_out: bool,
}

impl MoveResult {
    #[inline]
    fn forced(at: Coord, search_type: SearchType, score: Option<Score>) -> Self {
        Self {
            best_move: at,
            score,
            search_type,
            depth: 0,
            nodes: 0,
            time_ms: 0,
            timed_out: false,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType) -> Self {
        Self {
            best_move: result.best_move.unwrap_or(Coord::ORIGIN),
            score: Some(result.score),
            search_type,
            depth: result.depth,
            nodes: result.nodes,
            time_ms: 0,
            timed_out: result.timed_out,
        }
    }
}

/// Main AI engine.
///
/// Owns the configuration and a searcher whose transposition table persists
/// across moves of one game. One engine serves one board lineage.
///
/// # Example
///
/// ```
/// use fourline::{AIEngine, Board, Coord, Stone};
///
/// let mut engine = AIEngine::new();
/// let mut board = Board::new();
/// assert_eq!(engine.choose_move(&mut board, Stone::X), Coord::ORIGIN);
/// ```
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Create an engine from a validated configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let mut searcher = Searcher::new(
            config.tt_capacity,
            config.run_length,
            config.candidate_radius,
        );
        searcher.set_node_limit(config.max_nodes);
        Self { config, searcher }
    }

    /// Best move for `color`. The board is left as it was found.
    pub fn choose_move(&mut self, board: &mut Board, color: Stone) -> Coord {
        self.choose_move_with_stats(board, color).best_move
    }

    /// Best move for `color` with search statistics.
    pub fn choose_move_with_stats(&mut self, board: &mut Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let mut result = self.select(board, color);
        result.time_ms = start.elapsed().as_millis() as u64;

        info!(
            "{} plays {} via {:?} (score {:?}, depth {}, nodes {}, {}ms)",
            color,
            result.best_move,
            result.search_type,
            result.score,
            result.depth,
            result.nodes,
            result.time_ms
        );
        result
    }

    fn select(&mut self, board: &mut Board, color: Stone) -> MoveResult {
        if board.is_board_empty() {
            return MoveResult::forced(Coord::ORIGIN, SearchType::Opening, None);
        }

        let need = self.config.run_length;
        let radius = self.config.candidate_radius;
        if let Some(forced) = find_forcing_move(board, color, need, radius) {
            let (search_type, score) = match forced.kind {
                ForcingKind::Win => (SearchType::ImmediateWin, Some(WIN_SCORE)),
                ForcingKind::Block => (SearchType::Defense, None),
                ForcingKind::ForkBlock => (SearchType::ForkBlock, None),
            };
            return MoveResult::forced(forced.at, search_type, score);
        }

        match self.config.algorithm {
            Algorithm::Greedy => {
                let choice = greedy_move(board, color, need, radius);
                MoveResult::forced(choice.at, SearchType::Greedy, choice.score)
            }
            Algorithm::AlphaBeta => {
                let result = self.searcher.search(board, color, self.config.max_depth);
                MoveResult::from_search(result, SearchType::AlphaBeta)
            }
            Algorithm::IterativeDeepening => {
                let budget = Duration::from_millis(self.config.time_budget_ms);
                let max_depth = self.config.max_depth;
                let result = self.searcher.search_timed(board, color, max_depth, budget);
                MoveResult::from_search(result, SearchType::IterativeDeepening)
            }
            Algorithm::MonteCarlo => {
                let mc = self.monte_carlo();
                let result = mc.choose(board, color);
                MoveResult {
                    best_move: result.best_move,
                    score: Some(result.score),
                    search_type: SearchType::MonteCarlo,
                    depth: 0,
                    nodes: result.playouts,
                    time_ms: 0,
                    timed_out: false,
                }
            }
        }
    }

    fn monte_carlo(&self) -> MonteCarlo {
        MonteCarlo {
            iterations: self.config.mc_iterations,
            playout_depth: self.config.mc_playout_depth,
            seed: self.config.mc_seed,
            radius: self.config.candidate_radius,
            run_length: self.config.run_length,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// Set the search depth (at least 1).
    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.max_depth = depth.max(1);
    }

    pub fn set_time_budget_ms(&mut self, ms: u64) {
        self.config.time_budget_ms = ms;
    }

    pub fn set_mc_iterations(&mut self, iterations: u32) {
        self.config.mc_iterations = iterations;
    }

    /// Get transposition table statistics.
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }

    /// Clear the transposition table (call when starting a new game).
    pub fn clear_cache(&mut self) {
        self.searcher.clear_tt();
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
