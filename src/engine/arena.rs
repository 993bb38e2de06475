//! Simulation orchestrator: partitions games across a worker pool, runs the
//! shards, and folds their rosters into one aggregate result.

use std::collections::HashMap;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::engine::models::{CoinValue, PlayerSpec, SimConfig, Strategy};
use crate::engine::player::Player;
use crate::engine::shard::run_shard;

/// Aggregate key: a strategy together with its starting guess. The roster
/// never contains two players sharing both, so keys identify players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StrategyKey {
    pub strategy: Strategy,
    pub original_guess: CoinValue,
}

/// Aggregated win counts from a completed simulation run.
#[derive(Debug, Clone)]
pub struct SimResults {
    pub num_games: u64,
    pub wins: HashMap<StrategyKey, u64>,
}

impl SimResults {
    pub fn win_rate(&self, key: &StrategyKey) -> f64 {
        *self.wins.get(key).unwrap_or(&0) as f64 / self.num_games.max(1) as f64
    }

    /// Sum over every key; equals the number of games actually played.
    pub fn total_wins(&self) -> u64 {
        self.wins.values().sum()
    }

    /// Human-readable report, one line per key in deterministic order.
    pub fn summary(&self) -> String {
        let mut keys: Vec<&StrategyKey> = self.wins.keys().collect();
        keys.sort();

        let mut lines = vec![format!("Simulation results ({} games)", self.num_games)];
        lines.push("=".repeat(60));
        for key in keys {
            lines.push(format!(
                "Strategy: {} Original Guess: {} Total wins: {} ({:.2}%)",
                key.strategy,
                key.original_guess,
                self.wins[key],
                self.win_rate(key) * 100.0,
            ));
        }
        lines.push(format!("Total games checked: {}", self.total_wins()));
        lines.join("\n")
    }

    /// The same report as a JSON document.
    pub fn to_json(&self) -> serde_json::Value {
        let mut keys: Vec<&StrategyKey> = self.wins.keys().collect();
        keys.sort();

        let players: Vec<serde_json::Value> = keys
            .iter()
            .map(|key| {
                serde_json::json!({
                    "strategy": key.strategy,
                    "original_guess": key.original_guess,
                    "wins": self.wins[key],
                    "win_rate": self.win_rate(key),
                })
            })
            .collect();

        serde_json::json!({
            "num_games": self.num_games,
            "players": players,
        })
    }
}

/// Fold one shard's finished roster into the aggregate.
fn merge_roster(wins: &mut HashMap<StrategyKey, u64>, roster: &[Player]) {
    for player in roster {
        let key = StrategyKey {
            strategy: player.strategy(),
            original_guess: player.original_guess(),
        };
        *wins.entry(key).or_insert(0) += player.wins();
    }
}

/// Run `config.games` games split across `config.workers` parallel shards,
/// plus a sequential remainder shard on the calling thread, and merge every
/// shard's wins keyed by (strategy, original guess).
///
/// Each shard owns its roster copy and its RNG (seeded `base_seed + index`),
/// so the parallel phase shares no mutable state; the merge happens on the
/// calling thread after the collect barrier, with no concurrent writers.
pub fn run_simulation(config: &SimConfig, specs: &[PlayerSpec]) -> Result<SimResults, String> {
    if specs.is_empty() {
        return Err("roster must contain at least one player".into());
    }
    if config.base_allowance == 0 {
        // A zero allowance puts every player at the elimination threshold
        // before the first toss, so no game could credit a winner.
        return Err("base loss allowance must be at least 1".into());
    }

    let workers = config.workers.max(1);
    let per_worker = config.games / workers as u64;
    let remainder = config.games % workers as u64;

    tracing::info!(
        games = config.games,
        workers,
        per_worker,
        remainder,
        base_seed = config.base_seed,
        "starting simulation run"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| format!("failed to build worker pool: {}", e))?;

    let mut rosters: Vec<Vec<Player>> = pool.install(|| {
        (0..workers as u64)
            .into_par_iter()
            .map(|shard_idx| {
                let t0 = Instant::now();
                let roster = run_shard(
                    specs,
                    config.base_allowance,
                    per_worker,
                    config.base_seed + shard_idx,
                );
                tracing::debug!(
                    shard = shard_idx,
                    games = per_worker,
                    elapsed_ms = t0.elapsed().as_millis() as u64,
                    "shard complete"
                );
                roster
            })
            .collect()
    });

    if remainder > 0 {
        rosters.push(run_shard(
            specs,
            config.base_allowance,
            remainder,
            config.base_seed + workers as u64,
        ));
    }

    let mut wins = HashMap::new();
    for roster in &rosters {
        merge_roster(&mut wins, roster);
    }

    let results = SimResults {
        num_games: config.games,
        wins,
    };
    debug_assert_eq!(results.total_wins(), config.games);
    tracing::info!(total_wins = results.total_wins(), "merged shard results");

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<PlayerSpec> {
        vec![
            PlayerSpec {
                strategy: Strategy::Random,
                guess: CoinValue::Heads,
                extra_allowance: 0,
            },
            PlayerSpec {
                strategy: Strategy::Alternating,
                guess: CoinValue::Heads,
                extra_allowance: 0,
            },
            PlayerSpec {
                strategy: Strategy::Alternating,
                guess: CoinValue::Tails,
                extra_allowance: 0,
            },
            PlayerSpec {
                strategy: Strategy::HoldOnLossSwitchOnWin,
                guess: CoinValue::Heads,
                extra_allowance: 0,
            },
        ]
    }

    fn config(games: u64, workers: usize) -> SimConfig {
        SimConfig {
            games,
            base_allowance: 3,
            workers,
            base_seed: 42,
        }
    }

    #[test]
    fn wins_sum_to_requested_games_including_remainder() {
        // 103 games over 4 workers: 25 each plus a remainder shard of 3.
        let results = run_simulation(&config(103, 4), &specs()).unwrap();
        assert_eq!(results.total_wins(), 103);
        assert_eq!(results.num_games, 103);
    }

    #[test]
    fn zero_workers_behaves_as_one() {
        let zero = run_simulation(&config(60, 0), &specs()).unwrap();
        let one = run_simulation(&config(60, 1), &specs()).unwrap();
        assert_eq!(zero.wins, one.wins);
    }

    #[test]
    fn zero_games_yields_all_zero_tallies() {
        let results = run_simulation(&config(0, 4), &specs()).unwrap();
        assert_eq!(results.wins.len(), specs().len());
        assert!(results.wins.values().all(|&w| w == 0));
    }

    #[test]
    fn empty_roster_is_a_configuration_error() {
        assert!(run_simulation(&config(10, 2), &[]).is_err());
    }

    #[test]
    fn zero_allowance_is_a_configuration_error() {
        let mut cfg = config(10, 2);
        cfg.base_allowance = 0;
        assert!(run_simulation(&cfg, &specs()).is_err());
    }

    #[test]
    fn identical_configs_reproduce_identical_results() {
        let a = run_simulation(&config(200, 3), &specs()).unwrap();
        let b = run_simulation(&config(200, 3), &specs()).unwrap();
        assert_eq!(a.wins, b.wins);
    }

    #[test]
    fn summary_lists_every_key_and_the_check_value() {
        let results = run_simulation(&config(40, 2), &specs()).unwrap();
        let summary = results.summary();
        assert!(summary.contains("Strategy: Random Original Guess: Heads"));
        assert!(summary.contains("Strategy: Alternating Original Guess: Tails"));
        assert!(summary.contains("Total games checked: 40"));
    }

    #[test]
    fn json_report_carries_all_players() {
        let results = run_simulation(&config(40, 2), &specs()).unwrap();
        let json = results.to_json();
        assert_eq!(json["num_games"], 40);
        assert_eq!(json["players"].as_array().unwrap().len(), specs().len());
    }
}
