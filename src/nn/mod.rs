//! Board encodings for learning code.
//!
//! - `state_key`: string key for Q-tables
//! - `BoardEncoder`: one-hot tensor (9 × 10)
//! - `action_index` / `action_from_index`: flat policy indices (81)

pub mod encoder;

pub use encoder::{
    action_from_index, action_index, state_key, BoardEncoder, EncodedState, StateEncoder,
    ACTION_SPACE_SIZE, CHANNELS,
};
