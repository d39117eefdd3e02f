//! Monte Carlo move selection (random playouts)
//!
//! Each candidate gets the same number of playouts. A playout places the
//! candidate, then alternates uniformly random candidate moves up to a depth
//! limit, scoring +1 if the mover completes a run first, -1 if the opponent
//! does, 0 otherwise. The candidate with the highest total wins.
//!
//! The generator is seeded from a fixed value, so a given board and budget
//! always produce the same choice.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Coord, Stone, DEFAULT_CANDIDATE_RADIUS, DEFAULT_RUN_LENGTH};

/// Default seed for the playout generator.
pub const DEFAULT_MC_SEED: u64 = 1337;

/// Default total playout budget per move.
pub const DEFAULT_MC_ITERATIONS: u32 = 1200;

/// Default random plies per playout after the candidate.
pub const DEFAULT_MC_PLAYOUT_DEPTH: u32 = 12;

/// Outcome of a Monte Carlo move choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloResult {
    pub best_move: Coord,
    /// Sum of playout outcomes for the chosen move
    pub score: i64,
    /// Total playouts run over all candidates
    pub playouts: u64,
    /// Number of candidates considered
    pub candidates: usize,
}

/// Random-playout move chooser.
#[derive(Debug, Clone)]
pub struct MonteCarlo {
    pub iterations: u32,
    pub playout_depth: u32,
    pub seed: u64,
    pub radius: i32,
    pub run_length: usize,
}

impl Default for MonteCarlo {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_MC_ITERATIONS,
            playout_depth: DEFAULT_MC_PLAYOUT_DEPTH,
            seed: DEFAULT_MC_SEED,
            radius: DEFAULT_CANDIDATE_RADIUS,
            run_length: DEFAULT_RUN_LENGTH,
        }
    }
}

impl MonteCarlo {
    /// Playouts given to each of `candidates` moves.
    #[inline]
    pub fn quota(&self, candidates: usize) -> u32 {
        let n = u32::try_from(candidates).unwrap_or(u32::MAX).max(1);
        (self.iterations / n).max(1)
    }

    /// Choose a move for `color`. The board is restored before returning.
    pub fn choose(&self, board: &mut Board, color: Stone) -> MonteCarloResult {
        let candidates = board.candidates(self.radius);
        if candidates.len() <= 1 {
            return MonteCarloResult {
                best_move: candidates.first().copied().unwrap_or(Coord::ORIGIN),
                score: 0,
                playouts: 0,
                candidates: candidates.len(),
            };
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let quota = self.quota(candidates.len());
        let mut best = candidates[0];
        let mut best_score = i64::MIN;
        let mut playouts = 0u64;

        for &c in &candidates {
            let mut score = 0i64;
            for _ in 0..quota {
                score += self.playout(board, c, color, &mut rng);
                playouts += 1;
            }
            if score > best_score {
                best_score = score;
                best = c;
            }
        }

        MonteCarloResult {
            best_move: best,
            score: best_score,
            playouts,
            candidates: candidates.len(),
        }
    }

    /// One playout starting with `me` on `start`; every stone it places is
    /// taken back, newest first.
    pub fn playout(&self, board: &mut Board, start: Coord, me: Stone, rng: &mut SmallRng) -> i64 {
        let mut placed = Vec::with_capacity(self.playout_depth as usize + 1);
        let outcome = self.run(board, start, me, rng, &mut placed);
        for &c in placed.iter().rev() {
            board.undo(c);
        }
        outcome
    }

    fn run(
        &self,
        board: &mut Board,
        start: Coord,
        me: Stone,
        rng: &mut SmallRng,
        placed: &mut Vec<Coord>,
    ) -> i64 {
        if !board.place(start, me) {
            return 0;
        }
        placed.push(start);
        if board.win_from(start, me, self.run_length) {
            return 1;
        }

        let mut turn = me.opponent();
        for _ in 0..self.playout_depth {
            let moves = board.candidates(self.radius);
            if moves.is_empty() {
                break;
            }
            let at = moves[rng.gen_range(0..moves.len())];
            if !board.place(at, turn) {
                break;
            }
            placed.push(at);
            if board.win_from(at, turn, self.run_length) {
                return if turn == me { 1 } else { -1 };
            }
            turn = turn.opponent();
        }
        0
    }
}
