//! One-ply greedy move selection
//!
//! Win if possible, block if necessary, otherwise take the candidate whose
//! resulting position evaluates best for the mover. Also the fallback of the
//! iterative-deepening driver when no depth finished in time.

use crate::board::{Board, Coord, Stone};
use crate::eval::evaluate_for;
use crate::rules::winning_cells;

use super::Score;

/// Greedy choice and the evaluation it was picked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyChoice {
    pub at: Coord,
    /// Mover's evaluation after the move (`None` for a win or a block)
    pub score: Option<Score>,
}

/// Pick a greedy move for `color`. Empty boards get the origin.
pub fn greedy_move(board: &mut Board, color: Stone, need: usize, radius: i32) -> GreedyChoice {
    if let Some(&at) = winning_cells(board, color, need).first() {
        return GreedyChoice { at, score: None };
    }
    if let Some(&at) = winning_cells(board, color.opponent(), need).first() {
        return GreedyChoice { at, score: None };
    }

    let mut best = GreedyChoice {
        at: Coord::ORIGIN,
        score: None,
    };
    let mut best_score = Score::MIN;
    for c in board.candidates(radius) {
        let Some(placed) = board.place_scoped(c, color) else {
            continue;
        };
        let score = evaluate_for(&placed, color, need);
        if score > best_score {
            best_score = score;
            best = GreedyChoice {
                at: c,
                score: Some(score),
            };
        }
    }
    best
}
