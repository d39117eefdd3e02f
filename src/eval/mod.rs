//! Evaluation module for four-in-a-row positions
//!
//! Scores each stone's runs along the four axes by length and openness and
//! nets X against O.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_for, stone_score};
pub use patterns::{line_score, PatternScore};
