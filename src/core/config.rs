//! Environment configuration.
//!
//! - `RewardConfig`: agent reward per step outcome
//! - `EnvConfig`: seed plus rewards
//!
//! The defaults reproduce the standard reward table:
//!
//! | Event | Reward |
//! |---|---|
//! | Agent move wins | +10 |
//! | Agent move ties | 0 |
//! | Opponent reply wins | -10 |
//! | Opponent reply ties | 0 |
//! | Game continues | -1 |

use serde::{Deserialize, Serialize};

/// Rewards handed to the agent by `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Agent's move completed a line.
    pub win: i32,

    /// Board filled with no line completed.
    pub tie: i32,

    /// Opponent's reply completed a line.
    pub loss: i32,

    /// Cost of a ply pair that leaves the game running.
    pub step: i32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            win: 10,
            tie: 0,
            loss: -10,
            step: -1,
        }
    }
}

/// Configuration for a `TicTacToeEnv`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Seed for the opponent's RNG.
    /// Same seed produces the same opponent replies.
    pub seed: u64,

    /// Reward table.
    pub rewards: RewardConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rewards: RewardConfig::default(),
        }
    }
}

impl EnvConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom reward table.
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }
}
