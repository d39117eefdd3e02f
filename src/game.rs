//! Game session: one board, whose turn it is, and the engine playing it
//!
//! X always moves first. The human plays one side and the engine the other;
//! [`Game::ai_move`] asks the engine to move for whoever is to play, so a
//! front-end can also run engine-versus-engine games.

use thiserror::Error;

use crate::board::{Board, Coord, Stone};
use crate::config::{Algorithm, ConfigError, EngineConfig};
use crate::engine::{AIEngine, MoveResult};

/// Depth change per strength step for the alpha-beta algorithms.
const DEPTH_STEP: u8 = 1;
/// Playout change per strength step for Monte Carlo.
const ITERATION_STEP: u32 = 200;

/// Rejected session actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("the game is over")]
    GameOver,

    #[error("it is {0}'s turn")]
    NotYourTurn(Stone),
}

pub struct Game {
    board: Board,
    turn: Stone,
    human: Stone,
    winner: Option<Stone>,
    last_move: Option<Coord>,
    engine: AIEngine,
}

impl Game {
    /// New game with the human playing `human`.
    pub fn new(config: EngineConfig, human: Stone) -> Result<Self, ConfigError> {
        Ok(Self {
            board: Board::new(),
            turn: Stone::X,
            human,
            winner: None,
            last_move: None,
            engine: AIEngine::with_config(config)?,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn human(&self) -> Stone {
        self.human
    }

    pub fn is_human_turn(&self) -> bool {
        self.turn == self.human
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    /// Play `at` for the side to move. Returns the winner if this move won.
    pub fn play(&mut self, at: Coord) -> Result<Option<Stone>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let mover = self.turn;
        if !self.board.place(at, mover) {
            return Err(GameError::Occupied(at));
        }
        self.last_move = Some(at);

        let need = self.engine.config().run_length;
        if self.board.win_from(at, mover, need) {
            self.winner = Some(mover);
        } else {
            self.turn = mover.opponent();
        }
        Ok(self.winner)
    }

    /// Play `at` for the human side.
    pub fn play_human(&mut self, at: Coord) -> Result<Option<Stone>, GameError> {
        if !self.is_over() && !self.is_human_turn() {
            return Err(GameError::NotYourTurn(self.turn));
        }
        self.play(at)
    }

    /// Let the engine move for the side to move.
    pub fn ai_move(&mut self) -> Result<MoveResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let result = self
            .engine
            .choose_move_with_stats(&mut self.board, self.turn);
        self.play(result.best_move)?;
        Ok(result)
    }

    /// Empty the board and give X the move. Engine settings are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Stone::X;
        self.winner = None;
        self.last_move = None;
        self.engine.clear_cache();
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.engine.set_algorithm(algorithm);
    }

    /// Deepen the search, or add playouts for Monte Carlo.
    pub fn stronger(&mut self) {
        let config = self.engine.config().clone();
        match config.algorithm {
            Algorithm::MonteCarlo => self
                .engine
                .set_mc_iterations(config.mc_iterations.saturating_add(ITERATION_STEP)),
            _ => self
                .engine
                .set_max_depth(config.max_depth.saturating_add(DEPTH_STEP)),
        }
    }

    /// Inverse of [`Game::stronger`]; depth stays at least 1 and playouts at
    /// least one step.
    pub fn weaker(&mut self) {
        let config = self.engine.config().clone();
        match config.algorithm {
            Algorithm::MonteCarlo => self.engine.set_mc_iterations(
                config
                    .mc_iterations
                    .saturating_sub(ITERATION_STEP)
                    .max(ITERATION_STEP),
            ),
            _ => self
                .engine
                .set_max_depth(config.max_depth.saturating_sub(DEPTH_STEP)),
        }
    }
}
