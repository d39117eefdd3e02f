//! Engine configuration
//!
//! Every knob of [`crate::AIEngine`] lives in [`EngineConfig`]. It can be
//! built in code, deserialized from TOML (missing keys take their defaults),
//! and is checked by [`EngineConfig::validate`] before an engine uses it.
//!
//! ```
//! use fourline::config::{Algorithm, EngineConfig};
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     algorithm = "monte-carlo"
//!     mc_iterations = 600
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.algorithm, Algorithm::MonteCarlo);
//! assert_eq!(config.mc_iterations, 600);
//! assert_eq!(config.max_depth, 4);
//! ```

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{DEFAULT_CANDIDATE_RADIUS, DEFAULT_RUN_LENGTH};
use crate::search::{
    DEFAULT_MC_ITERATIONS, DEFAULT_MC_PLAYOUT_DEPTH, DEFAULT_MC_SEED, DEFAULT_TT_CAPACITY,
};

/// Default search depth for alpha-beta and iterative deepening.
pub const DEFAULT_MAX_DEPTH: u8 = 4;

/// Default wall-clock budget for iterative deepening.
pub const DEFAULT_TIME_BUDGET_MS: u64 = 800;

/// Move-selection algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// One ply: win, block, else best static evaluation
    Greedy,
    /// Fixed-depth negamax with alpha-beta
    #[default]
    AlphaBeta,
    /// Alpha-beta deepened one ply at a time under the time budget
    IterativeDeepening,
    /// Random playouts per candidate
    MonteCarlo,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Greedy => "greedy",
            Algorithm::AlphaBeta => "alpha-beta",
            Algorithm::IterativeDeepening => "iterative-deepening",
            Algorithm::MonteCarlo => "monte-carlo",
        };
        f.write_str(name)
    }
}

/// Errors from loading or validating an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("run_length must be at least 2, got {0}")]
    RunLength(usize),

    #[error("candidate_radius must be at least 1, got {0}")]
    Radius(i32),

    #[error("max_depth must be at least 1")]
    ZeroDepth,

    #[error("tt_capacity must be non-zero")]
    ZeroCapacity,

    #[error("mc_playout_depth must be non-zero")]
    ZeroPlayoutDepth,
}

/// Engine parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    /// Depth for alpha-beta; deepest iteration for iterative deepening
    pub max_depth: u8,
    /// Budget for iterative deepening, in milliseconds
    pub time_budget_ms: u64,
    /// Node budget for iterative deepening; unlimited when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<u64>,
    /// Total Monte Carlo playouts per move
    pub mc_iterations: u32,
    /// Random plies per playout after the candidate
    pub mc_playout_depth: u32,
    pub mc_seed: u64,
    /// Transposition table capacity, in entries
    pub tt_capacity: usize,
    /// Chebyshev distance from existing stones for candidate moves
    pub candidate_radius: i32,
    /// Stones in a row needed to win
    pub run_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            max_nodes: None,
            mc_iterations: DEFAULT_MC_ITERATIONS,
            mc_playout_depth: DEFAULT_MC_PLAYOUT_DEPTH,
            mc_seed: DEFAULT_MC_SEED,
            tt_capacity: DEFAULT_TT_CAPACITY,
            candidate_radius: DEFAULT_CANDIDATE_RADIUS,
            run_length: DEFAULT_RUN_LENGTH,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run_length < 2 {
            return Err(ConfigError::RunLength(self.run_length));
        }
        if self.candidate_radius < 1 {
            return Err(ConfigError::Radius(self.candidate_radius));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.tt_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.mc_playout_depth == 0 {
            return Err(ConfigError::ZeroPlayoutDepth);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    #[must_use]
    pub fn with_max_nodes(mut self, nodes: Option<u64>) -> Self {
        self.max_nodes = nodes;
        self
    }

    #[must_use]
    pub fn with_mc_iterations(mut self, iterations: u32) -> Self {
        self.mc_iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_mc_seed(mut self, seed: u64) -> Self {
        self.mc_seed = seed;
        self
    }

    #[must_use]
    pub fn with_tt_capacity(mut self, capacity: usize) -> Self {
        self.tt_capacity = capacity;
        self
    }
}
