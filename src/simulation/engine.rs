//! Trial engine — plays N shuffled games and tallies the verdicts.
//!
//! Each trial owns an independent [`TombGame`] and an independent
//! `SmallRng` seeded from `seed.wrapping_add(trial_index)`, so the batch
//! parallelizes with rayon without any shared state and replays exactly
//! for a given seed.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

use crate::game::{TombGame, Verdict};

/// Per-game record: the verdict plus the transfer count, enough for
/// offline aggregation.
#[derive(Copy, Clone, Debug)]
pub struct GameRecord {
    pub won: bool,
    /// Total transfers the game made (bounded by 4 x 52).
    pub transfers: u16,
}

/// Results of a batch of trials.
pub struct SimulationResult {
    pub records: Vec<GameRecord>,
    pub wins: u64,
    pub losses: u64,
    pub win_rate: f64,
    pub elapsed: std::time::Duration,
}

/// Simulate one shuffled game, returning the verdict.
pub fn simulate_game(rng: &mut SmallRng) -> Verdict {
    TombGame::new_shuffled(rng).play()
}

/// Simulate one shuffled game with recording.
pub fn simulate_game_with_recording(rng: &mut SmallRng) -> GameRecord {
    let mut game = TombGame::new_shuffled(rng);
    let verdict = game.play();
    GameRecord {
        won: verdict == Verdict::Won,
        transfers: game.transfers() as u16,
    }
}

/// Simulate N games in parallel, returning records and the tally.
pub fn simulate_batch(num_trials: usize, seed: u64) -> SimulationResult {
    let start = Instant::now();

    let records: Vec<GameRecord> = (0..num_trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_game_with_recording(&mut rng)
        })
        .collect();

    let elapsed = start.elapsed();

    let wins = records.iter().filter(|r| r.won).count() as u64;
    let losses = num_trials as u64 - wins;
    let win_rate = if num_trials == 0 {
        0.0
    } else {
        wins as f64 / num_trials as f64
    };

    SimulationResult {
        records,
        wins,
        losses,
        win_rate,
        elapsed,
    }
}
