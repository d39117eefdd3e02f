//! Alpha-Beta search with iterative deepening and transposition table
//!
//! Negamax with alpha-beta pruning over one mutable board. Every speculative
//! stone goes through [`Board::place_scoped`], so cutoffs, early wins and
//! deadline aborts all leave the board as they found it.
//!
//! # Features
//!
//! - Iterative deepening under a wall-clock deadline
//! - Transposition table keyed by stones plus side to move
//! - Early return when a move wins on the spot
//! - Move ordering: wins first, eval probe as tie-break
//!
//! # Example
//!
//! ```
//! use fourline::board::{Board, Coord, Stone};
//! use fourline::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Coord::new(0, 0), Stone::X);
//!
//! let mut searcher = Searcher::new(10_000, 4, 2);
//! let result = searcher.search(&mut board, Stone::O, 2);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.stone_count(), 1);
//! ```

use std::time::Duration;

use log::debug;

use crate::board::{Board, Coord, Stone};
use crate::eval::evaluate_for;
use crate::rules::{has_immediate_win, has_run_at};

use super::{
    greedy_move, Deadline, EntryType, ProbeOutcome, Score, TTStats, Timeout, TranspositionTable,
    INF, WIN_SCORE,
};

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total beta cutoffs (fail-high)
    pub beta_cutoffs: u64,
    /// Beta cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that settled the node outright
    pub tt_hits: u64,
    /// Iterations abandoned at the deadline
    pub timeouts: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }

    /// TT hit rate in percent
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Coord>,
    /// Score of the best move for the side to move
    pub score: Score,
    /// Deepest completed depth (0 for the greedy fallback)
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
    /// True if the deadline cut iterative deepening short
    pub timed_out: bool,
}

/// Negamax searcher owning its transposition table.
///
/// One searcher serves one board lineage; the table is not shared.
pub struct Searcher {
    tt: TranspositionTable,
    run_length: usize,
    radius: i32,
    nodes: u64,
    stats: SearchStats,
    deadline: Option<Deadline>,
    node_limit: Option<u64>,
}

impl Searcher {
    /// Create a searcher with a table of `tt_capacity` entries.
    #[must_use]
    pub fn new(tt_capacity: usize, run_length: usize, radius: i32) -> Self {
        Self {
            tt: TranspositionTable::new(tt_capacity),
            run_length,
            radius,
            nodes: 0,
            stats: SearchStats::default(),
            deadline: None,
            node_limit: None,
        }
    }

    /// Cap the nodes one iterative-deepening call may visit.
    ///
    /// Running past the cap aborts the current depth exactly like the
    /// deadline does. Fixed-depth searches ignore it.
    pub fn set_node_limit(&mut self, limit: Option<u64>) {
        self.node_limit = limit;
    }

    /// Fixed-depth search with no deadline.
    pub fn search(&mut self, board: &mut Board, color: Stone, depth: u8) -> SearchResult {
        self.begin(None);
        match self.search_root(board, color, depth.max(1)) {
            Ok(result) => result,
            Err(Timeout) => self.fallback(board, color),
        }
    }

    /// Iterative deepening from depth 1 to `max_depth` within `budget`.
    pub fn search_timed(
        &mut self,
        board: &mut Board,
        color: Stone,
        max_depth: u8,
        budget: Duration,
    ) -> SearchResult {
        self.search_until(board, color, max_depth, Deadline::new(budget))
    }

    /// Iterative deepening against an already running deadline.
    ///
    /// Keeps the result of the deepest depth that finished. An interrupted
    /// depth, whether stopped by the clock or the node limit, contributes
    /// nothing; if none finished the greedy move is used.
    pub fn search_until(
        &mut self,
        board: &mut Board,
        color: Stone,
        max_depth: u8,
        deadline: Deadline,
    ) -> SearchResult {
        self.begin(Some(deadline));

        let mut best: Option<SearchResult> = None;
        let mut timed_out = false;
        for depth in 1..=max_depth.max(1) {
            match self.search_root(board, color, depth) {
                Ok(result) => {
                    debug!(
                        "depth {} done: move {:?} score {} nodes {} ({}ms)",
                        depth,
                        result.best_move,
                        result.score,
                        result.nodes,
                        deadline.elapsed().as_millis()
                    );
                    let proven = result.score >= WIN_SCORE;
                    best = Some(result);
                    if proven {
                        break;
                    }
                }
                Err(Timeout) => {
                    self.stats.timeouts += 1;
                    timed_out = true;
                    debug!(
                        "depth {} abandoned after {}ms",
                        depth,
                        deadline.elapsed().as_millis()
                    );
                    break;
                }
            }
        }
        self.deadline = None;
        debug!(
            "tt hits {:.1}%, first-move cutoffs {:.1}%",
            self.stats.tt_hit_rate(),
            self.stats.first_move_rate()
        );

        let mut result = match best {
            Some(result) => result,
            None => self.fallback(board, color),
        };
        result.nodes = self.nodes;
        result.stats = self.stats;
        result.timed_out = timed_out;
        result
    }

    /// Full-window score of `color` playing `mv`, searched `depth` plies
    /// including the move itself. `None` if `mv` is occupied.
    pub fn score_move(
        &mut self,
        board: &mut Board,
        color: Stone,
        mv: Coord,
        depth: u8,
    ) -> Result<Option<Score>, Timeout> {
        self.deadline = None;
        let depth = depth.max(1);
        let Some(mut child) = board.place_scoped(mv, color) else {
            return Ok(None);
        };
        if has_run_at(&child, mv, color, self.run_length) {
            return Ok(Some(WIN_SCORE + Score::from(depth)));
        }
        let score = -self.negamax(&mut child, depth - 1, -INF, INF, color.opponent())?;
        Ok(Some(score))
    }

    /// Full-window negamax value of the position with `color` to move.
    pub fn evaluate_position(
        &mut self,
        board: &mut Board,
        color: Stone,
        depth: u8,
    ) -> Result<Score, Timeout> {
        self.deadline = None;
        self.negamax(board, depth, -INF, INF, color)
    }

    /// Get transposition table statistics.
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Clear the transposition table (call when starting a new game).
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    fn begin(&mut self, deadline: Option<Deadline>) {
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.deadline = deadline;
    }

    fn fallback(&mut self, board: &mut Board, color: Stone) -> SearchResult {
        let choice = greedy_move(board, color, self.run_length, self.radius);
        debug!("no depth completed, greedy fallback {}", choice.at);
        SearchResult {
            best_move: Some(choice.at),
            score: choice.score.unwrap_or(0),
            depth: 0,
            nodes: self.nodes,
            stats: self.stats,
            timed_out: true,
        }
    }

    /// One root iteration at `depth`.
    ///
    /// Candidates are tried nearest-to-centre first and share one window.
    fn search_root(
        &mut self,
        board: &mut Board,
        color: Stone,
        depth: u8,
    ) -> Result<SearchResult, Timeout> {
        let key = board.position_key(color);
        let mut moves = board.candidates(self.radius);
        if let Some(bounds) = board.bounds() {
            let center = bounds.center();
            moves.sort_by_key(|c| c.chebyshev(center));
        }

        let opponent = color.opponent();
        let mut alpha = -INF;
        let beta = INF;
        let mut best_move = None;
        let mut best_score = -INF;

        for mv in moves {
            let Some(mut child) = board.place_scoped(mv, color) else {
                continue;
            };
            if has_run_at(&child, mv, color, self.run_length) {
                best_move = Some(mv);
                best_score = WIN_SCORE + Score::from(depth);
                break;
            }
            let score = -self.negamax(&mut child, depth - 1, -beta, -alpha, opponent)?;
            drop(child);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
        }

        self.tt.store(key, depth, best_score, EntryType::Exact, best_move);
        Ok(SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
            stats: self.stats,
            timed_out: false,
        })
    }

    /// Negamax with alpha-beta pruning, scored for `color` to move.
    fn negamax(
        &mut self,
        board: &mut Board,
        depth: u8,
        alpha: Score,
        beta: Score,
        color: Stone,
    ) -> Result<Score, Timeout> {
        self.nodes += 1;
        if let Some(deadline) = &self.deadline {
            deadline.check()?;
            if self.node_limit.is_some_and(|n| self.nodes > n) {
                return Err(Timeout);
            }
        }

        let key = board.position_key(color);
        let (alpha_orig, beta_orig) = (alpha, beta);
        let (mut alpha, mut beta) = (alpha, beta);

        self.stats.tt_probes += 1;
        match self.tt.probe_window(key, depth, alpha, beta) {
            ProbeOutcome::Cutoff(score) => {
                self.stats.tt_hits += 1;
                return Ok(score);
            }
            ProbeOutcome::Narrowed { alpha: a, beta: b } => {
                alpha = a;
                beta = b;
            }
            ProbeOutcome::Miss => {}
        }

        if depth == 0 {
            return Ok(evaluate_for(board, color, self.run_length));
        }
        let moves = self.order_moves(board, color, self.tt.get_best_move(key));
        if moves.is_empty() {
            return Ok(evaluate_for(board, color, self.run_length));
        }

        let opponent = color.opponent();
        let mut best_score = -INF;
        let mut best_move = None;

        for (i, &mv) in moves.iter().enumerate() {
            let Some(mut child) = board.place_scoped(mv, color) else {
                continue;
            };
            if has_run_at(&child, mv, color, self.run_length) {
                return Ok(WIN_SCORE + Score::from(depth));
            }
            let score = -self.negamax(&mut child, depth - 1, -beta, -alpha, opponent)?;
            drop(child);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        let entry_type = if best_score <= alpha_orig {
            EntryType::UpperBound
        } else if best_score >= beta_orig {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.tt.store(key, depth, best_score, entry_type, best_move);

        Ok(best_score)
    }

    /// Candidates for `color`, best first.
    ///
    /// Tiers: a move that wins outright, then a move after which the opponent
    /// has an immediate win, then the rest. Within a tier the `hint` (the
    /// table's best move from an earlier visit) leads, then higher mover
    /// evaluation after the move; equal keys keep board order.
    fn order_moves(&self, board: &mut Board, color: Stone, hint: Option<Coord>) -> Vec<Coord> {
        let need = self.run_length;
        let opponent = color.opponent();
        let mut keyed: Vec<(u8, bool, Score, Coord)> = Vec::new();

        for mv in board.candidates(self.radius) {
            let Some(placed) = board.place_scoped(mv, color) else {
                continue;
            };
            let is_hint = hint == Some(mv);
            let key = if has_run_at(&placed, mv, color, need) {
                (2, is_hint, 0, mv)
            } else {
                let probe = evaluate_for(&placed, color, need);
                let tier = u8::from(has_immediate_win(&placed, opponent, need));
                (tier, is_hint, probe, mv)
            };
            keyed.push(key);
        }

        keyed.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)).then(b.2.cmp(&a.2)));
        keyed.into_iter().map(|(_, _, _, mv)| mv).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEED: usize = 4;
    const RADIUS: i32 = 2;

    fn setup(stones: &[(i32, i32, Stone)]) -> Board {
        let mut board = Board::new();
        for &(x, y, s) in stones {
            assert!(board.place(Coord::new(x, y), s));
        }
        board
    }

    /// Plain minimax with the same leaf and win scoring, no pruning or table.
    fn minimax(board: &mut Board, color: Stone, depth: u8) -> Score {
        if depth == 0 {
            return evaluate_for(board, color, NEED);
        }
        let moves = board.candidates(RADIUS);
        let mut best = -INF;
        for mv in moves {
            board.place(mv, color);
            let score = if board.win_from(mv, color, NEED) {
                WIN_SCORE + Score::from(depth)
            } else {
                -minimax(board, color.opponent(), depth - 1)
            };
            board.undo(mv);
            best = best.max(score);
        }
        best
    }

    #[test]
    fn test_search_empty_board() {
        let mut searcher = Searcher::new(1000, NEED, RADIUS);
        let mut board = Board::new();

        let result = searcher.search(&mut board, Stone::X, 3);
        assert_eq!(result.best_move, Some(Coord::ORIGIN));
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut searcher = Searcher::new(10_000, NEED, RADIUS);
        let mut board = setup(&[
            (0, 0, Stone::O),
            (0, 1, Stone::O),
            (0, 2, Stone::O),
            (0, 3, Stone::X),
            (5, 5, Stone::X),
        ]);

        let result = searcher.search(&mut board, Stone::O, 2);
        assert_eq!(result.best_move, Some(Coord::new(0, -1)));
        assert!(result.score >= WIN_SCORE);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let mut searcher = Searcher::new(10_000, NEED, RADIUS);
        let mut board = setup(&[
            (0, 0, Stone::X),
            (1, 0, Stone::X),
            (2, 0, Stone::X),
            (3, 0, Stone::O),
        ]);

        let result = searcher.search(&mut board, Stone::O, 2);
        assert_eq!(result.best_move, Some(Coord::new(-1, 0)));
    }

    #[test]
    fn test_search_losing_score() {
        // An open three cannot be stopped: every reply still loses
        let mut searcher = Searcher::new(10_000, NEED, RADIUS);
        let mut board = setup(&[
            (0, 0, Stone::X),
            (1, 0, Stone::X),
            (2, 0, Stone::X),
            (0, 5, Stone::O),
        ]);

        let result = searcher.search(&mut board, Stone::O, 2);
        assert!(result.score <= -WIN_SCORE, "score {}", result.score);
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let positions = [
            setup(&[(0, 0, Stone::X), (1, 1, Stone::O)]),
            setup(&[(0, 0, Stone::X), (1, 1, Stone::O), (1, 0, Stone::X)]),
            setup(&[
                (0, 0, Stone::X),
                (1, 0, Stone::X),
                (2, 0, Stone::X),
                (0, 1, Stone::O),
                (1, 1, Stone::O),
            ]),
        ];
        for (i, board) in positions.iter().enumerate() {
            for color in [Stone::X, Stone::O] {
                let mut pruned = board.clone();
                let mut plain = board.clone();
                let mut searcher = Searcher::new(100_000, NEED, RADIUS);

                let got = searcher.evaluate_position(&mut pruned, color, 2).unwrap();
                let want = minimax(&mut plain, color, 2);
                assert_eq!(got, want, "position {} {:?} to move", i, color);
                assert_eq!(pruned.hash(), board.hash());
            }
        }
    }

    #[test]
    fn test_alpha_beta_matches_minimax_depth_three() {
        let board = setup(&[(0, 0, Stone::X), (1, 0, Stone::O)]);
        let mut searcher = Searcher::new(100_000, NEED, RADIUS);
        let got = searcher
            .evaluate_position(&mut board.clone(), Stone::X, 3)
            .unwrap();
        let want = minimax(&mut board.clone(), Stone::X, 3);
        assert_eq!(got, want);
    }

    #[test]
    fn test_root_score_matches_full_window_move_score() {
        let mut board = setup(&[(0, 0, Stone::X), (1, 1, Stone::O), (1, 0, Stone::X)]);
        let mut searcher = Searcher::new(100_000, NEED, RADIUS);
        let result = searcher.search(&mut board, Stone::O, 2);
        let mv = result.best_move.unwrap();

        let mut fresh = Searcher::new(100_000, NEED, RADIUS);
        let rescored = fresh.score_move(&mut board, Stone::O, mv, 2).unwrap();
        assert_eq!(rescored, Some(result.score));
    }

    #[test]
    fn test_iterative_deepening_self_consistency() {
        let board = setup(&[
            (0, 0, Stone::X),
            (1, 1, Stone::O),
            (1, 0, Stone::X),
            (2, 2, Stone::O),
        ]);
        for d in 1..3u8 {
            let mut b = board.clone();
            let shallow = Searcher::new(100_000, NEED, RADIUS)
                .search(&mut b, Stone::X, d)
                .best_move
                .unwrap();

            let mut searcher = Searcher::new(100_000, NEED, RADIUS);
            let deep = searcher.search(&mut b, Stone::X, d + 1);
            let shallow_rescored = searcher
                .score_move(&mut b, Stone::X, shallow, d + 1)
                .unwrap()
                .unwrap();
            assert!(
                deep.score >= shallow_rescored,
                "depth {}: {} < {}",
                d + 1,
                deep.score,
                shallow_rescored
            );
            assert_eq!(b.hash(), board.hash());
        }
    }

    #[test]
    fn test_timed_search_completes_with_generous_budget() {
        let mut searcher = Searcher::new(100_000, NEED, RADIUS);
        let mut board = setup(&[(0, 0, Stone::X), (1, 0, Stone::O)]);

        let result = searcher.search_timed(&mut board, Stone::X, 2, Duration::from_secs(60));
        assert_eq!(result.depth, 2);
        assert!(!result.timed_out);
        assert!(result.nodes > 0);
        assert_eq!(board.stone_count(), 2);
    }

    #[test]
    fn test_expired_deadline_falls_back_to_greedy() {
        let mut board = setup(&[(0, 0, Stone::X), (1, 0, Stone::X), (5, 5, Stone::O)]);
        let before = board.hash();
        let greedy = greedy_move(&mut board, Stone::O, NEED, RADIUS);

        let deadline = Deadline::new(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        let mut searcher = Searcher::new(1000, NEED, RADIUS);
        let result = searcher.search_until(&mut board, Stone::O, 6, deadline);

        assert!(result.timed_out);
        assert_eq!(result.depth, 0);
        assert_eq!(result.best_move, Some(greedy.at));
        assert_eq!(result.stats.timeouts, 1);
        assert_eq!(board.hash(), before);
        assert_eq!(board.stone_count(), 3);
    }

    #[test]
    fn test_aborted_depth_keeps_last_completed() {
        let mut board = setup(&[
            (0, 0, Stone::X),
            (1, 1, Stone::O),
            (1, 0, Stone::X),
            (2, 2, Stone::O),
        ]);
        let before = board.hash();
        let expected = Searcher::new(100_000, NEED, RADIUS).search(&mut board, Stone::X, 1);

        // Depth 1 visits one leaf per root move; depth 2 runs out mid-tree
        let limit = board.candidates(RADIUS).len() as u64 + 50;
        let mut searcher = Searcher::new(100_000, NEED, RADIUS);
        searcher.set_node_limit(Some(limit));
        let result = searcher.search_timed(&mut board, Stone::X, 4, Duration::from_secs(60));

        assert!(result.timed_out);
        assert_eq!(result.depth, 1);
        assert_eq!(result.best_move, expected.best_move);
        assert_eq!(result.score, expected.score);
        assert_eq!(result.nodes, limit + 1);
        assert_eq!(result.stats.timeouts, 1);
        assert_eq!(board.hash(), before);
        assert_eq!(board.stone_count(), 4);
    }

    #[test]
    fn test_node_limit_ignored_by_fixed_depth() {
        let mut board = setup(&[(0, 0, Stone::X), (1, 1, Stone::O)]);
        let mut searcher = Searcher::new(100_000, NEED, RADIUS);
        searcher.set_node_limit(Some(1));
        let result = searcher.search(&mut board, Stone::X, 2);
        assert_eq!(result.depth, 2);
        assert!(!result.timed_out);
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_timed_search_stops_on_proven_win() {
        let mut searcher = Searcher::new(10_000, NEED, RADIUS);
        let mut board = setup(&[
            (0, 0, Stone::X),
            (1, 0, Stone::X),
            (2, 0, Stone::X),
            (0, 4, Stone::O),
        ]);
        let result = searcher.search_timed(&mut board, Stone::X, 8, Duration::from_secs(60));
        assert_eq!(result.depth, 1);
        assert!(result.score >= WIN_SCORE);
        assert!(matches!(
            result.best_move,
            Some(c) if c == Coord::new(-1, 0) || c == Coord::new(3, 0)
        ));
    }

    #[test]
    fn test_order_moves_puts_win_first() {
        let searcher = Searcher::new(1000, NEED, RADIUS);
        let mut board = setup(&[
            (0, 0, Stone::O),
            (0, 1, Stone::O),
            (0, 2, Stone::O),
            (0, 3, Stone::X),
        ]);
        let ordered = searcher.order_moves(&mut board, Stone::O, None);
        assert_eq!(ordered[0], Coord::new(0, -1));
        assert_eq!(ordered.len(), board.candidates(RADIUS).len());

        // A table hint never outranks a win
        let hinted = searcher.order_moves(&mut board, Stone::O, Some(Coord::new(2, 2)));
        assert_eq!(hinted[0], Coord::new(0, -1));
        assert_eq!(hinted[1], Coord::new(2, 2));
    }

    #[test]
    fn test_order_moves_leads_with_table_move() {
        let mut searcher = Searcher::new(1000, NEED, RADIUS);
        let mut board = setup(&[(0, 0, Stone::X), (1, 1, Stone::O)]);
        let plain = searcher.order_moves(&mut board, Stone::X, None);
        let last = *plain.last().unwrap();
        assert_ne!(plain[0], last);

        let key = board.position_key(Stone::X);
        searcher.tt.store(key, 1, 0, EntryType::UpperBound, Some(last));
        let hint = searcher.tt.get_best_move(key);
        let hinted = searcher.order_moves(&mut board, Stone::X, hint);
        assert_eq!(hinted[0], last);
        assert_eq!(hinted.len(), plain.len());
        assert_eq!(&hinted[1..], &plain[..plain.len() - 1]);
    }

    #[test]
    fn test_stats_rates() {
        let empty = SearchStats::default();
        assert_eq!(empty.tt_hit_rate(), 0.0);
        assert_eq!(empty.first_move_rate(), 0.0);

        let stats = SearchStats {
            beta_cutoffs: 4,
            first_move_cutoffs: 3,
            tt_probes: 10,
            tt_hits: 1,
            timeouts: 0,
        };
        assert_eq!(stats.first_move_rate(), 75.0);
        assert_eq!(stats.tt_hit_rate(), 10.0);
    }

    #[test]
    fn test_tt_stats_and_clear() {
        let mut searcher = Searcher::new(100_000, NEED, RADIUS);
        let mut board = setup(&[(0, 0, Stone::X), (1, 1, Stone::O)]);
        searcher.search(&mut board, Stone::X, 2);
        assert!(searcher.tt_stats().used > 0);
        assert!(searcher.nodes() > 0);

        searcher.clear_tt();
        assert_eq!(searcher.tt_stats().used, 0);
    }

    #[test]
    fn test_search_multiple_times_same_answer() {
        let mut searcher = Searcher::new(100_000, NEED, RADIUS);
        let mut board = setup(&[(0, 0, Stone::X), (1, 1, Stone::O), (2, 0, Stone::X)]);
        let first = searcher.search(&mut board, Stone::O, 2);
        let second = searcher.search(&mut board, Stone::O, 2);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
    }
}
