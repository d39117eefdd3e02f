//! Win condition checking for connect-N on the unbounded board
//!
//! A player wins with `run_length` or more of their stones contiguous along
//! a row, column or diagonal. Longer runs also win.

use crate::board::{Board, Coord, Stone, DIRECTIONS};

/// A maximal run of same-colored stones through one cell along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    /// Stones in the run, including the starting cell
    pub length: usize,
    /// Ends of the run that are followed by an empty cell (0..=2)
    pub open_ends: u8,
}

/// Count consecutive `stone`s from `at` (exclusive) stepping by `(dx, dy)`.
///
/// Stops after `limit` stones. Returns the count and the first cell past the
/// run, `None` when the run reaches the edge of the coordinate range.
#[inline]
fn count_dir(
    board: &Board,
    at: Coord,
    (dx, dy): (i32, i32),
    stone: Stone,
    limit: usize,
) -> (usize, Option<Coord>) {
    let mut count = 0;
    let mut cur = at.offset(dx, dy, 1);
    while let Some(c) = cur {
        if count >= limit || board.get(c) != stone {
            break;
        }
        count += 1;
        cur = c.offset(dx, dy, 1);
    }
    (count, cur)
}

/// Maximal run of `stone` through `at` along `(dx, dy)`, treating `at` as
/// holding `stone` whatever is actually there.
///
/// An end at the edge of the coordinate range is closed.
pub fn line_run(board: &Board, at: Coord, (dx, dy): (i32, i32), stone: Stone) -> LineRun {
    let (fwd, fwd_end) = count_dir(board, at, (dx, dy), stone, usize::MAX);
    let (back, back_end) = count_dir(board, at, (-dx, -dy), stone, usize::MAX);
    let open = |end: Option<Coord>| u8::from(end.is_some_and(|c| board.is_empty(c)));
    LineRun {
        length: 1 + fwd + back,
        open_ends: open(fwd_end) + open(back_end),
    }
}

/// Would `stone` on `at` complete a run of `need`? `at` itself is not read.
#[inline]
pub fn completes_run(board: &Board, at: Coord, stone: Stone, need: usize) -> bool {
    let limit = need.saturating_sub(1);
    DIRECTIONS.iter().any(|&(dx, dy)| {
        let (fwd, _) = count_dir(board, at, (dx, dy), stone, limit);
        let (back, _) = count_dir(board, at, (-dx, -dy), stone, limit);
        1 + fwd + back >= need
    })
}

/// Fast win check at a specific position.
///
/// True if `at` holds `stone` and a run of at least `need` passes through it.
/// Only the four axes through `at` are scanned.
#[inline]
pub fn has_run_at(board: &Board, at: Coord, stone: Stone, need: usize) -> bool {
    stone.is_player() && board.get(at) == stone && completes_run(board, at, stone, need)
}

/// Empty cells where `stone` would win immediately, sorted.
///
/// A winning cell always touches one of the player's stones, so only cells
/// at Chebyshev distance 1 from the board's stones are examined.
pub fn winning_cells(board: &Board, stone: Stone, need: usize) -> Vec<Coord> {
    if !stone.is_player() || board.is_board_empty() {
        return Vec::new();
    }
    board
        .candidates(1)
        .into_iter()
        .filter(|&c| completes_run(board, c, stone, need))
        .collect()
}

/// Does `stone` have any immediate winning cell?
pub fn has_immediate_win(board: &Board, stone: Stone, need: usize) -> bool {
    stone.is_player()
        && !board.is_board_empty()
        && board
            .candidates(1)
            .into_iter()
            .any(|c| completes_run(board, c, stone, need))
}

/// First immediate winning cell for `stone`, if any.
#[inline]
pub fn find_immediate_win(board: &Board, stone: Stone, need: usize) -> Option<Coord> {
    winning_cells(board, stone, need).into_iter().next()
}

/// Cells of a winning run for `stone`, if one exists anywhere on the board.
///
/// The returned run is ordered along its axis.
pub fn find_winning_run(board: &Board, stone: Stone, need: usize) -> Option<Vec<Coord>> {
    for (at, s) in board.stones() {
        if s != stone {
            continue;
        }
        for &(dx, dy) in &DIRECTIONS {
            // Only start from the first stone of a run
            if at.offset(dx, dy, -1).is_some_and(|p| board.get(p) == stone) {
                continue;
            }
            let mut line = vec![at];
            let mut cur = at.offset(dx, dy, 1);
            while let Some(c) = cur.filter(|&c| board.get(c) == stone) {
                line.push(c);
                cur = c.offset(dx, dy, 1);
            }
            if line.len() >= need {
                return Some(line);
            }
        }
    }
    None
}

/// Check for a winner anywhere on the board.
///
/// X is checked first; on a legal game record at most one side can have won.
pub fn check_winner(board: &Board, need: usize) -> Option<Stone> {
    [Stone::X, Stone::O]
        .into_iter()
        .find(|&s| find_winning_run(board, s, need).is_some())
}
