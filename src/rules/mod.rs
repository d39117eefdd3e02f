//! Game rules for four-in-a-row on an unbounded board
//!
//! There are no captures and no forbidden moves: any empty cell may be
//! played, and the first player to line up `run_length` stones wins.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_winner, completes_run, find_immediate_win, find_winning_run, has_immediate_win,
    has_run_at, line_run, winning_cells, LineRun,
};
