//! Statistics aggregation from trial records.
//!
//! Computes the win-rate estimate with its binomial standard error, the
//! move-count distribution split by verdict, and a downsampled rolling
//! win-rate trajectory suitable for plotting convergence.

use serde::Serialize;

use crate::constants::MAX_TRANSFERS;

use super::engine::GameRecord;

/// Width of a move-count histogram bin.
const HISTOGRAM_BIN_WIDTH: u16 = 10;

/// Maximum points kept in the rolling win-rate trajectory.
const TRAJECTORY_POINTS: usize = 200;

// ── Top-level statistics ────────────────────────────────────────────

#[derive(Serialize)]
pub struct TrialStatistics {
    pub num_trials: u64,
    pub seed: u64,
    pub wins: u64,
    pub losses: u64,
    pub win_rate: f64,
    /// Binomial standard error of the win-rate estimate.
    pub std_error: f64,
    pub transfers: TransferDistribution,
    /// Rolling win rate after each sampled trial, for convergence plots.
    pub win_rate_trajectory: Vec<TrajectoryPoint>,
}

// ── Move-count distribution ─────────────────────────────────────────

#[derive(Serialize)]
pub struct TransferDistribution {
    pub mean: f64,
    pub std_dev: f64,
    pub min: u16,
    pub max: u16,
    pub median: u16,
    pub mean_when_won: f64,
    pub mean_when_lost: f64,
    /// 10-transfer bins covering 0 to the termination bound.
    pub histogram: Vec<HistogramBin>,
}

#[derive(Serialize)]
pub struct HistogramBin {
    pub lower: u16,
    pub upper: u16,
    pub count: u32,
}

#[derive(Serialize)]
pub struct TrajectoryPoint {
    pub trial: u64,
    pub win_rate: f64,
}

// ── Aggregation ─────────────────────────────────────────────────────

/// Aggregate statistics from a slice of GameRecords.
pub fn aggregate_statistics(records: &[GameRecord], seed: u64) -> TrialStatistics {
    let n = records.len().max(1) as f64;
    let num_trials = records.len() as u64;

    let wins = records.iter().filter(|r| r.won).count() as u64;
    let losses = num_trials - wins;
    let win_rate = wins as f64 / n;
    let std_error = (win_rate * (1.0 - win_rate) / n).sqrt();

    // ── Transfer counts ─────────────────────────────────────────
    let mut sorted: Vec<u16> = records.iter().map(|r| r.transfers).collect();
    sorted.sort_unstable();

    let sum: f64 = sorted.iter().map(|&t| t as f64).sum();
    let mean = sum / n;
    let variance: f64 = sorted
        .iter()
        .map(|&t| (t as f64 - mean).powi(2))
        .sum::<f64>()
        / n;

    let mean_of = |want_won: bool| -> f64 {
        let subset: Vec<f64> = records
            .iter()
            .filter(|r| r.won == want_won)
            .map(|r| r.transfers as f64)
            .collect();
        subset.iter().sum::<f64>() / subset.len().max(1) as f64
    };

    let num_bins = (MAX_TRANSFERS as u16 / HISTOGRAM_BIN_WIDTH + 1) as usize;
    let mut hist_counts = vec![0u32; num_bins];
    for &t in &sorted {
        hist_counts[(t / HISTOGRAM_BIN_WIDTH) as usize] += 1;
    }
    let histogram: Vec<HistogramBin> = hist_counts
        .iter()
        .enumerate()
        .filter(|(_, &c)| c > 0)
        .map(|(i, &c)| HistogramBin {
            lower: i as u16 * HISTOGRAM_BIN_WIDTH,
            upper: (i as u16 + 1) * HISTOGRAM_BIN_WIDTH,
            count: c,
        })
        .collect();

    let transfers = TransferDistribution {
        mean,
        std_dev: variance.sqrt(),
        min: sorted.first().copied().unwrap_or(0),
        max: sorted.last().copied().unwrap_or(0),
        median: sorted.get(sorted.len() / 2).copied().unwrap_or(0),
        mean_when_won: mean_of(true),
        mean_when_lost: mean_of(false),
        histogram,
    };

    // ── Rolling win rate ────────────────────────────────────────
    // Sample the running estimate at most TRAJECTORY_POINTS times, in
    // trial order (the trajectory the original program plotted live).
    let stride = records.len().div_ceil(TRAJECTORY_POINTS).max(1);
    let mut running_wins = 0u64;
    let mut win_rate_trajectory = Vec::new();
    for (i, record) in records.iter().enumerate() {
        if record.won {
            running_wins += 1;
        }
        let trial = i as u64 + 1;
        if trial % stride as u64 == 0 || i + 1 == records.len() {
            win_rate_trajectory.push(TrajectoryPoint {
                trial,
                win_rate: running_wins as f64 / trial as f64,
            });
        }
    }

    TrialStatistics {
        num_trials,
        seed,
        wins,
        losses,
        win_rate,
        std_error,
        transfers,
        win_rate_trajectory,
    }
}

/// Save aggregated statistics as JSON.
pub fn save_statistics(stats: &TrialStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_records(n: usize) -> Vec<GameRecord> {
        (0..n)
            .map(|i| GameRecord {
                won: i % 4 == 0,
                transfers: (60 + (i % 100)) as u16,
            })
            .collect()
    }

    #[test]
    fn test_aggregate_basic() {
        let records = make_test_records(100);
        let stats = aggregate_statistics(&records, 42);

        assert_eq!(stats.num_trials, 100);
        assert_eq!(stats.seed, 42);
        assert_eq!(stats.wins, 25);
        assert_eq!(stats.losses, 75);
        assert!((stats.win_rate - 0.25).abs() < 1e-12);
        assert!(stats.std_error > 0.0);
        assert!(stats.transfers.min <= stats.transfers.median);
        assert!(stats.transfers.median <= stats.transfers.max);
    }

    #[test]
    fn test_histogram_counts_every_trial() {
        let records = make_test_records(1000);
        let stats = aggregate_statistics(&records, 42);
        let total: u32 = stats.transfers.histogram.iter().map(|b| b.count).sum();
        assert_eq!(total as u64, stats.num_trials);
    }

    #[test]
    fn test_trajectory_is_bounded_and_ends_at_final_rate() {
        let records = make_test_records(5000);
        let stats = aggregate_statistics(&records, 42);
        assert!(stats.win_rate_trajectory.len() <= TRAJECTORY_POINTS + 1);
        let last = stats.win_rate_trajectory.last().unwrap();
        assert_eq!(last.trial, 5000);
        assert!((last.win_rate - stats.win_rate).abs() < 1e-12);
    }

    #[test]
    fn test_save_load_json() {
        let records = make_test_records(50);
        let stats = aggregate_statistics(&records, 42);
        let path = "/tmp/tomb_test_stats.json";
        save_statistics(&stats, path);

        let content = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["num_trials"], 50);
        assert_eq!(parsed["wins"], 13);
        assert!(parsed["win_rate_trajectory"].as_array().unwrap().len() <= 51);

        let _ = std::fs::remove_file(path);
    }
}
