//! Heuristic evaluation function for four-in-a-row positions
//!
//! Every stone is scored once per axis by the maximal run through it and
//! how many of that run's ends are open. A run of three is therefore counted
//! by each of its three stones, which rewards long, central runs.

use crate::board::{Board, Coord, Stone, DIRECTIONS};
use crate::rules::line_run;

use super::patterns::line_score;

/// Evaluate the board from X's point of view: X's total minus O's total.
///
/// # Arguments
/// * `board` - The current board state
/// * `need` - Run length that wins
#[must_use]
pub fn evaluate(board: &Board, need: usize) -> i64 {
    board
        .stones()
        .map(|(at, stone)| {
            let s = stone_score(board, at, stone, need);
            if stone == Stone::X {
                s
            } else {
                -s
            }
        })
        .sum()
}

/// Evaluate the board from the perspective of `color`.
///
/// Negamax needs `evaluate_for(b, X) == -evaluate_for(b, O)`.
#[inline]
#[must_use]
pub fn evaluate_for(board: &Board, color: Stone, need: usize) -> i64 {
    let score = evaluate(board, need);
    match color {
        Stone::O => -score,
        _ => score,
    }
}

/// Sum of the four directional line scores for the stone on `at`.
#[must_use]
pub fn stone_score(board: &Board, at: Coord, stone: Stone, need: usize) -> i64 {
    DIRECTIONS
        .iter()
        .map(|&dir| {
            let run = line_run(board, at, dir, stone);
            line_score(run.length, run.open_ends, need)
        })
        .sum()
}
