//! Four-in-a-row AI engine for an unbounded board
//!
//! Two players, X and O, alternate placing stones on an infinite grid. The
//! first to line up four (configurable) stones along a row, column or
//! diagonal wins.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Sparse board with bounding box and Zobrist hashing
//! - [`rules`]: Win detection and immediate-win queries
//! - [`eval`]: Position evaluation by run length and openness
//! - [`search`]: Greedy, alpha-beta, iterative deepening, Monte Carlo
//! - [`engine`]: Main AI engine integrating all components
//! - [`config`]: Engine parameters, loadable from TOML
//! - [`game`]: Turn-keeping session used by front-ends
//!
//! # Quick Start
//!
//! ```
//! use fourline::{AIEngine, Board, Coord, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//! engine.set_max_depth(2);
//!
//! board.place(Coord::new(0, 0), Stone::X);
//!
//! // AI responds as O
//! let reply = engine.choose_move(&mut board, Stone::O);
//! board.place(reply, Stone::O);
//! println!("AI plays at {}", reply);
//! ```
//!
//! # Search Priority
//!
//! The AI engine follows this search priority:
//! 1. Origin on an empty board
//! 2. Immediate winning move
//! 3. Block the opponent's immediate win
//! 4. Block an opponent fork
//! 5. The configured algorithm

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Coord, Stone};
pub use config::{Algorithm, ConfigError, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use game::{Game, GameError};
