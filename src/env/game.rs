//! The training environment: agent move followed by a random reply.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::opponent::{OpponentPolicy, UniformOpponent};
use crate::core::{Action, ActionError, Board, EnvConfig, GameRng, Side};
use crate::rules::{self, ActionSpace, Outcome};

/// Result of one `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Board after the agent's move and, if the game went on, the reply.
    pub board: Board,

    /// Agent reward for this step.
    pub reward: i32,

    /// Status of `board`.
    pub outcome: Outcome,

    /// The environment's reply, if it moved.
    pub opponent_action: Option<Action>,
}

impl StepResult {
    /// Create a step result.
    #[must_use]
    pub const fn new(
        board: Board,
        reward: i32,
        outcome: Outcome,
        opponent_action: Option<Action>,
    ) -> Self {
        Self {
            board,
            reward,
            outcome,
            opponent_action,
        }
    }

    /// Check if the episode ended on this step.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }
}

/// Numeric Tic-Tac-Toe environment.
///
/// The agent plays odd numbers through `step`; the environment replies in
/// the same call with a move chosen by `O` (uniformly random by default).
///
/// ## Example
///
/// ```
/// use numeric_tictactoe::core::{Action, EnvConfig};
/// use numeric_tictactoe::env::TicTacToeEnv;
/// use numeric_tictactoe::rules::Outcome;
///
/// let mut env = TicTacToeEnv::new(EnvConfig::default().with_seed(1));
/// let mut board = env.reset();
///
/// let result = env.step(&mut board, Action::try_new(0, 1).unwrap()).unwrap();
/// assert_eq!(result.outcome, Outcome::Resume);
/// assert_eq!(result.reward, -1);
/// assert_eq!(board.filled_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TicTacToeEnv<O: OpponentPolicy = UniformOpponent> {
    config: EnvConfig,
    rng: GameRng,
    opponent: O,
}

impl TicTacToeEnv {
    /// Create an env with a uniform random opponent seeded from `config`.
    #[must_use]
    pub fn new(config: EnvConfig) -> Self {
        Self::with_opponent(config, UniformOpponent)
    }

    /// Create an env drawing opponent moves from an existing RNG.
    #[must_use]
    pub fn with_rng(config: EnvConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            opponent: UniformOpponent,
        }
    }
}

impl Default for TicTacToeEnv {
    fn default() -> Self {
        Self::new(EnvConfig::default())
    }
}

impl<O: OpponentPolicy> TicTacToeEnv<O> {
    /// Create an env with a custom opponent policy.
    #[must_use]
    pub fn with_opponent(config: EnvConfig, opponent: O) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            opponent,
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Get the opponent's RNG (for checkpointing via `GameRng::state`).
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Fresh all-empty board.
    #[must_use]
    pub fn reset(&self) -> Board {
        Board::new()
    }

    /// Legal actions per side on `board`.
    #[must_use]
    pub fn action_space(&self, board: &Board) -> ActionSpace {
        rules::action_space(board)
    }

    /// Classify `board` without stepping.
    #[must_use]
    pub fn is_terminal(&self, board: &Board) -> (bool, Outcome) {
        rules::is_terminal(board)
    }

    /// Play the agent's action, then (if the game continues) one random
    /// environment reply.
    ///
    /// Rewards come from `EnvConfig::rewards`:
    /// - agent move wins: `win`, the environment does not move
    /// - agent move fills the board: `tie`
    /// - reply wins: `loss`
    /// - reply fills the board: `tie`
    /// - otherwise: `step`
    ///
    /// Fails with `GameOver` if `board` is already terminal, with the
    /// validation error if the agent's action is illegal, or with
    /// `NoLegalReply` if the game continues but the environment cannot move.
    /// On error `board` is unchanged.
    pub fn step(&mut self, board: &mut Board, action: Action) -> Result<StepResult, ActionError> {
        let (done, outcome) = rules::is_terminal(board);
        if done {
            return Err(ActionError::GameOver(outcome));
        }

        let before = *board;
        rules::apply_action(board, Side::Agent, action)?;
        debug!(%action, "agent move");

        let rewards = self.config.rewards;
        match rules::is_terminal(board) {
            (true, Outcome::Win) => {
                debug!("agent completed a line");
                return Ok(StepResult::new(*board, rewards.win, Outcome::Win, None));
            }
            (true, outcome) => {
                debug!("board filled by agent");
                return Ok(StepResult::new(*board, rewards.tie, outcome, None));
            }
            (false, _) => {}
        }

        let Some(reply) = self.opponent.choose_action(board, &mut self.rng) else {
            warn!(board = ?before.to_values(), "environment has no legal reply");
            *board = before;
            return Err(ActionError::NoLegalReply);
        };
        if let Err(err) = rules::apply_action(board, Side::Environment, reply) {
            *board = before;
            return Err(err);
        }
        debug!(action = %reply, "environment move");

        let (_, outcome) = rules::is_terminal(board);
        let reward = match outcome {
            Outcome::Win => rewards.loss,
            Outcome::Tie => rewards.tie,
            Outcome::Resume => rewards.step,
        };
        if outcome.is_terminal() {
            debug!(%outcome, "episode ended on environment move");
        }
        Ok(StepResult::new(*board, reward, outcome, Some(reply)))
    }
}

impl<O: OpponentPolicy + Clone> TicTacToeEnv<O> {
    /// Derive an independent env for a parallel worker.
    ///
    /// Forks are deterministic: the n-th fork of equally seeded envs replays
    /// the same opponent moves.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let rng = self.rng.fork();
        Self {
            config: self.config.clone().with_seed(rng.seed()),
            rng,
            opponent: self.opponent.clone(),
        }
    }
}
