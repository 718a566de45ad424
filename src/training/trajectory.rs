//! Episode records for training collaborators.
//!
//! A trajectory records one episode from the agent's point of view:
//! - Board before each agent move
//! - The agent's action and the reward it earned
//! - Board after the environment's reply
//!
//! Learning code consumes these; nothing here updates a model.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, GameRngState};
use crate::env::StepResult;
use crate::rules::Outcome;

/// One agent decision and its consequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Board the agent saw.
    pub state: Board,

    /// Action the agent took.
    pub action: Action,

    /// Reward returned by `step`.
    pub reward: i32,

    /// Board after the step.
    pub next_state: Board,

    /// Status of `next_state`.
    pub outcome: Outcome,

    /// Environment reply applied during the step, if any.
    pub opponent_action: Option<Action>,
}

impl Transition {
    /// Build a transition from the pre-step board and a step result.
    #[must_use]
    pub fn from_step(state: Board, action: Action, result: &StepResult) -> Self {
        Self {
            state,
            action,
            reward: result.reward,
            next_state: result.board,
            outcome: result.outcome,
            opponent_action: result.opponent_action,
        }
    }

    /// Check if this transition ended the episode.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }
}

/// A complete (or in-progress) episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Agent decisions in order.
    pub transitions: Vec<Transition>,

    /// Opponent RNG state when the episode started. Restoring it with
    /// `GameRng::from_state` and replaying the agent's actions reproduces
    /// the environment's replies.
    pub rng_state: GameRngState,

    /// Sum of rewards.
    pub total_reward: i32,

    /// Outcome of the last transition (`Resume` while in progress).
    pub outcome: Outcome,
}

impl Trajectory {
    /// Create an empty trajectory.
    pub fn new(rng_state: GameRngState) -> Self {
        Self {
            transitions: Vec::new(),
            rng_state,
            total_reward: 0,
            outcome: Outcome::Resume,
        }
    }

    /// Add a transition.
    pub fn push(&mut self, transition: Transition) {
        self.total_reward += transition.reward;
        self.outcome = transition.outcome;
        self.transitions.push(transition);
    }

    /// Get the number of transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if trajectory is empty.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Check if the episode has ended.
    pub fn is_complete(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Discounted return from each transition to the end.
    ///
    /// `G_t = r_t + gamma * G_{t+1}`, computed backwards.
    pub fn returns(&self, gamma: f64) -> Vec<f64> {
        let mut returns = vec![0.0; self.transitions.len()];
        let mut acc = 0.0;
        for (i, t) in self.transitions.iter().enumerate().rev() {
            acc = f64::from(t.reward) + gamma * acc;
            returns[i] = acc;
        }
        returns
    }
}
