//! Line scores for the evaluator
//!
//! One table shared by full-board evaluation and search leaves. Scores are
//! relative to `need`, the run length that wins.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Winning run (`need` or longer), open or not
    pub const WIN: i64 = 1_000_000;

    /// `need - 1` with both ends open: cannot be stopped on one side
    pub const OPEN_NEAR_WIN: i64 = 10_000;
    /// `need - 1` with one end open: one blocking cell
    pub const CLOSED_NEAR_WIN: i64 = 3_000;

    /// `need - 2` with both ends open
    pub const OPEN_BUILD: i64 = 500;
    /// `need - 2` with one end open
    pub const CLOSED_BUILD: i64 = 120;

    /// Lone stone with room on both sides
    pub const OPEN_SINGLE: i64 = 10;
}

/// Score of a maximal run of `length` stones with `open_ends` empty ends,
/// for a game won by `need` in a row.
///
/// Rows are tried from the longest run down, so when `need` is small the
/// longer classification wins (for `need == 2`, a lone stone is a near-win).
#[must_use]
pub fn line_score(length: usize, open_ends: u8, need: usize) -> i64 {
    if length >= need {
        return PatternScore::WIN;
    }
    if length + 1 == need {
        return match open_ends {
            2 => PatternScore::OPEN_NEAR_WIN,
            1 => PatternScore::CLOSED_NEAR_WIN,
            _ => 0,
        };
    }
    if length + 2 == need {
        return match open_ends {
            2 => PatternScore::OPEN_BUILD,
            1 => PatternScore::CLOSED_BUILD,
            _ => 0,
        };
    }
    if length == 1 && open_ends == 2 {
        return PatternScore::OPEN_SINGLE;
    }
    0
}
