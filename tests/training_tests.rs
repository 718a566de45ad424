//! Full-episode tests: random agents against the uniform opponent.

use numeric_tictactoe::core::{EnvConfig, GameRng, Side};
use numeric_tictactoe::env::{Episode, TicTacToeEnv};
use numeric_tictactoe::nn::{action_index, state_key, BoardEncoder, StateEncoder};
use numeric_tictactoe::rules::Outcome;
use numeric_tictactoe::training::Trajectory;
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test output; filter with `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_episode(env: &mut TicTacToeEnv, agent_rng: &mut GameRng) -> Trajectory {
    init_tracing();
    let mut episode = Episode::start(env);
    while !episode.is_over() {
        let actions = episode.legal_actions();
        let action = *agent_rng.choose(&actions).unwrap();
        episode.step(env, action).unwrap();
    }
    episode.into_trajectory()
}

#[test]
fn test_random_episodes_terminate() {
    let mut env = TicTacToeEnv::new(EnvConfig::default().with_seed(123));
    let mut agent_rng = GameRng::new(456);

    for _ in 0..200 {
        let traj = random_episode(&mut env, &mut agent_rng);

        assert!(traj.is_complete());
        assert!(!traj.is_empty());
        assert!(traj.len() <= 5);
        assert_eq!(traj.outcome, traj.transitions.last().unwrap().outcome);
    }
}

#[test]
fn test_trajectory_rewards_follow_table() {
    let mut env = TicTacToeEnv::new(EnvConfig::default().with_seed(5));
    let mut agent_rng = GameRng::new(6);

    for _ in 0..200 {
        let traj = random_episode(&mut env, &mut agent_rng);
        let (last, rest) = traj.transitions.split_last().unwrap();

        assert!(rest.iter().all(|t| t.reward == -1 && t.outcome == Outcome::Resume));
        match (last.outcome, last.opponent_action) {
            (Outcome::Win, None) => assert_eq!(last.reward, 10),
            (Outcome::Win, Some(_)) => assert_eq!(last.reward, -10),
            (Outcome::Tie, _) => assert_eq!(last.reward, 0),
            (Outcome::Resume, _) => panic!("trajectory ended without a terminal outcome"),
        }
        assert_eq!(
            traj.total_reward,
            traj.transitions.iter().map(|t| t.reward).sum::<i32>()
        );
    }
}

#[test]
fn test_transitions_chain() {
    let mut env = TicTacToeEnv::new(EnvConfig::default().with_seed(8));
    let mut agent_rng = GameRng::new(9);
    let traj = random_episode(&mut env, &mut agent_rng);

    assert_eq!(traj.transitions[0].state.filled_count(), 0);
    for pair in traj.transitions.windows(2) {
        assert_eq!(pair[0].next_state, pair[1].state);
    }
    for t in &traj.transitions {
        assert!(Side::Agent.owns(t.action.value));
        assert_eq!(
            t.next_state.get(t.action.position).value(),
            Some(t.action.value)
        );
    }
}

#[test]
fn test_all_outcomes_occur() {
    let mut env = TicTacToeEnv::new(EnvConfig::default().with_seed(1));
    let mut agent_rng = GameRng::new(2);
    let (mut agent_wins, mut env_wins, mut ties) = (0, 0, 0);

    for _ in 0..500 {
        let traj = random_episode(&mut env, &mut agent_rng);
        match traj.transitions.last().map(|t| (t.outcome, t.opponent_action.is_some())) {
            Some((Outcome::Win, false)) => agent_wins += 1,
            Some((Outcome::Win, true)) => env_wins += 1,
            Some((Outcome::Tie, _)) => ties += 1,
            _ => {}
        }
    }

    assert!(agent_wins > 0);
    assert!(env_wins > 0);
    assert!(ties > 0);
}

#[test]
fn test_encodings_of_trajectory_states() {
    let mut env = TicTacToeEnv::new(EnvConfig::default().with_seed(21));
    let mut agent_rng = GameRng::new(22);
    let traj = random_episode(&mut env, &mut agent_rng);

    for t in &traj.transitions {
        let encoded = BoardEncoder.encode(&t.state);
        assert_eq!(encoded.len(), 90);
        assert_eq!(encoded.tensor.iter().sum::<f32>(), 9.0);

        assert_eq!(state_key(&t.state).split('-').count(), 9);
        assert!(action_index(t.action) < BoardEncoder.action_space_size());
    }
}

#[test]
fn test_trajectory_json_round_trip() {
    let mut env = TicTacToeEnv::new(EnvConfig::default().with_seed(31));
    let mut agent_rng = GameRng::new(32);
    let traj = random_episode(&mut env, &mut agent_rng);

    let json = serde_json::to_string(&traj).unwrap();
    let restored: Trajectory = serde_json::from_str(&json).unwrap();

    assert_eq!(traj, restored);
}
