//! Core value types shared across the engine.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One face of the shared coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinValue {
    Heads,
    Tails,
}

impl CoinValue {
    /// The opposite face.
    pub fn toggled(self) -> CoinValue {
        match self {
            CoinValue::Heads => CoinValue::Tails,
            CoinValue::Tails => CoinValue::Heads,
        }
    }
}

impl fmt::Display for CoinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinValue::Heads => write!(f, "Heads"),
            CoinValue::Tails => write!(f, "Tails"),
        }
    }
}

/// How a player's guess evolves after each round's outcome.
///
/// The set is closed; behavior is dispatched through a single match in the
/// player state machine rather than through trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Random,
    Alternating,
    HoldOnWinSwitchOnLoss,
    HoldOnLossSwitchOnWin,
    AlwaysHeads,
    AlwaysTails,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Random => "Random",
            Strategy::Alternating => "Alternating",
            Strategy::HoldOnWinSwitchOnLoss => "HoldOnWinSwitchOnLoss",
            Strategy::HoldOnLossSwitchOnWin => "HoldOnLossSwitchOnWin",
            Strategy::AlwaysHeads => "AlwaysHeads",
            Strategy::AlwaysTails => "AlwaysTails",
        };
        write!(f, "{}", name)
    }
}

/// Where a player stands within the current game.
///
/// `Lost` is distinct from `Out` so a round can tell "failed just now" apart
/// from "eliminated earlier" when resolving a simultaneous total elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    StillIn,
    Lost,
    Out,
}

/// One roster entry: strategy, starting guess, and a per-player bonus on the
/// loss allowance. Supplied by the caller or loaded from a roster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub strategy: Strategy,
    pub guess: CoinValue,
    #[serde(default)]
    pub extra_allowance: u32,
}

/// Numeric parameters for one simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Total games to play across all workers.
    pub games: u64,
    /// Wrong guesses each player may accumulate per game, before any
    /// per-player bonus.
    pub base_allowance: u32,
    /// Parallel workers. Zero is treated as one.
    pub workers: usize,
    /// Base seed; shard `i` runs on `base_seed + i`.
    pub base_seed: u64,
}

/// Injected source of fair coin flips.
///
/// The engine depends only on this statistical contract, never on a global
/// generator, so shards stay independent and tests can script toss sequences.
pub trait CoinSource {
    /// One uniformly distributed boolean.
    fn flip_bool(&mut self) -> bool;

    /// One uniformly distributed coin value.
    fn flip(&mut self) -> CoinValue {
        if self.flip_bool() {
            CoinValue::Heads
        } else {
            CoinValue::Tails
        }
    }
}

impl<R: Rng> CoinSource for R {
    fn flip_bool(&mut self) -> bool {
        self.gen()
    }
}
