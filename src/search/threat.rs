//! Forcing moves checked at the root before any deeper search
//!
//! In priority order:
//! 1. a move that wins on the spot
//! 2. a move that blocks the opponent's immediate win
//! 3. a move that occupies an opponent fork cell, i.e. a cell from which the
//!    opponent would get two or more different winning continuations

use crate::board::{Board, Coord, Stone};
use crate::rules::{has_run_at, winning_cells};

/// Why a forcing move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcingKind {
    /// Completes a winning run
    Win,
    /// Occupies the opponent's winning cell
    Block,
    /// Occupies the opponent's fork cell
    ForkBlock,
}

/// A move the position forces, with the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcingMove {
    pub at: Coord,
    pub kind: ForcingKind,
}

/// Cells where `color` would create at least two distinct immediate wins
/// without already winning, sorted.
///
/// `radius` is widened to `need - 2`, the furthest a fork cell can sit from
/// the stones that make it.
pub fn fork_points(board: &mut Board, color: Stone, need: usize, radius: i32) -> Vec<Coord> {
    if board.is_board_empty() || !color.is_player() {
        return Vec::new();
    }
    let radius = radius.max(need as i32 - 2);
    let mut forks = Vec::new();
    for c in board.candidates(radius) {
        let Some(placed) = board.place_scoped(c, color) else {
            continue;
        };
        if has_run_at(&placed, c, color, need) {
            continue;
        }
        if winning_cells(&placed, color, need).len() >= 2 {
            forks.push(c);
        }
    }
    forks
}

/// The highest-priority forcing move for `color`, if the position has one.
pub fn find_forcing_move(
    board: &mut Board,
    color: Stone,
    need: usize,
    radius: i32,
) -> Option<ForcingMove> {
    let opponent = color.opponent();

    if let Some(&at) = winning_cells(board, color, need).first() {
        return Some(ForcingMove {
            at,
            kind: ForcingKind::Win,
        });
    }
    if let Some(&at) = winning_cells(board, opponent, need).first() {
        return Some(ForcingMove {
            at,
            kind: ForcingKind::Block,
        });
    }
    fork_points(board, opponent, need, radius)
        .first()
        .map(|&at| ForcingMove {
            at,
            kind: ForcingKind::ForkBlock,
        })
}
