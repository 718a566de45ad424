//! Episode driver: one game from the empty board to a terminal outcome.

use super::game::{StepResult, TicTacToeEnv};
use super::opponent::OpponentPolicy;
use crate::core::{Action, ActionError, ActionRecord, Board, Side};
use crate::rules::{self, Outcome};
use crate::training::{Trajectory, Transition};

/// A running episode.
///
/// Owns the board and the move history; the env (and its RNG) is borrowed
/// per step so one env can drive many episodes in sequence.
#[derive(Clone, Debug)]
pub struct Episode {
    board: Board,
    history: Vec<ActionRecord>,
    trajectory: Trajectory,
}

impl Episode {
    /// Start an episode on a fresh board, capturing the env's RNG state.
    #[must_use]
    pub fn start<O: OpponentPolicy>(env: &TicTacToeEnv<O>) -> Self {
        Self {
            board: env.reset(),
            history: Vec::new(),
            trajectory: Trajectory::new(env.rng().state()),
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every placement so far, both sides, in order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.trajectory.outcome
    }

    /// Check if the episode has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.trajectory.is_complete()
    }

    /// Sum of rewards so far.
    #[must_use]
    pub fn total_reward(&self) -> i32 {
        self.trajectory.total_reward
    }

    /// Agent actions legal on the current board.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        rules::legal_actions(&self.board, Side::Agent)
    }

    /// Step the env with the agent's action and record the result.
    pub fn step<O: OpponentPolicy>(
        &mut self,
        env: &mut TicTacToeEnv<O>,
        action: Action,
    ) -> Result<StepResult, ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver(self.outcome()));
        }

        let state = self.board;
        let result = env.step(&mut self.board, action)?;

        let ply = self.history.len() as u32;
        self.history.push(ActionRecord::new(Side::Agent, action, ply));
        if let Some(reply) = result.opponent_action {
            self.history
                .push(ActionRecord::new(Side::Environment, reply, ply + 1));
        }
        self.trajectory
            .push(Transition::from_step(state, action, &result));

        Ok(result)
    }

    /// The recorded trajectory so far.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Finish and take the trajectory.
    #[must_use]
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }
}
