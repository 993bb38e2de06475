//! Per-player state machine: guess evolution, loss accounting, elimination.

use crate::engine::models::{CoinSource, CoinValue, PlayerSpec, PlayerStatus, Strategy};

/// One contestant. Created once per shard and mutated in place across every
/// game; `reset` restores it between games without reallocation.
#[derive(Debug, Clone)]
pub struct Player {
    strategy: Strategy,
    original_guess: CoinValue,
    current_guess: CoinValue,
    base_allowance: u32,
    extra_allowance: u32,
    losses_remaining: u32,
    status: PlayerStatus,
    wins: u64,
}

impl Player {
    pub fn new(spec: &PlayerSpec, base_allowance: u32) -> Self {
        Self {
            strategy: spec.strategy,
            original_guess: spec.guess,
            current_guess: spec.guess,
            base_allowance,
            extra_allowance: spec.extra_allowance,
            losses_remaining: base_allowance + spec.extra_allowance,
            status: PlayerStatus::StillIn,
            wins: 0,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn original_guess(&self) -> CoinValue {
        self.original_guess
    }

    pub fn current_guess(&self) -> CoinValue {
        self.current_guess
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn losses_remaining(&self) -> u32 {
        self.losses_remaining
    }

    /// Games won so far across the whole shard. Monotonic.
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// Apply one shared toss to this player and advance its guess.
    ///
    /// Returns whether the player lost this round. Callers only invoke this
    /// on `StillIn` players; a wrong guess costs one loss credit and drops
    /// the player to `Lost` when the credits run out.
    pub fn evaluate<S: CoinSource + ?Sized>(&mut self, toss: CoinValue, coins: &mut S) -> bool {
        debug_assert_eq!(
            self.status,
            PlayerStatus::StillIn,
            "evaluate called on inactive player"
        );

        let lost = self.current_guess != toss;
        if lost {
            self.losses_remaining -= 1;
        }
        self.status = if self.losses_remaining > 0 {
            PlayerStatus::StillIn
        } else {
            PlayerStatus::Lost
        };

        self.strategize(lost, coins);
        lost
    }

    /// Advance the guess per the strategy table. Exhaustive over the closed
    /// strategy set; no fallthrough.
    fn strategize<S: CoinSource + ?Sized>(&mut self, lost: bool, coins: &mut S) {
        match self.strategy {
            Strategy::Random => self.current_guess = coins.flip(),
            Strategy::Alternating => self.current_guess = self.current_guess.toggled(),
            Strategy::HoldOnWinSwitchOnLoss => {
                if lost {
                    self.current_guess = self.current_guess.toggled();
                }
            }
            Strategy::HoldOnLossSwitchOnWin => {
                if !lost {
                    self.current_guess = self.current_guess.toggled();
                }
            }
            Strategy::AlwaysHeads => self.current_guess = CoinValue::Heads,
            Strategy::AlwaysTails => self.current_guess = CoinValue::Tails,
        }
    }

    /// Undo this round's loss after a round in which every active player
    /// lost at once. The guess keeps its post-`strategize` value.
    pub fn retry_toss(&mut self) {
        debug_assert_eq!(
            self.status,
            PlayerStatus::Lost,
            "retry_toss called on a player that did not just lose"
        );
        self.losses_remaining += 1;
        self.status = PlayerStatus::StillIn;
    }

    /// Permanently exclude a just-lost player from the rest of this game.
    pub fn eliminate(&mut self) {
        debug_assert_eq!(
            self.status,
            PlayerStatus::Lost,
            "eliminate called on a player that did not just lose"
        );
        self.status = PlayerStatus::Out;
    }

    /// End-of-game bookkeeping, applied to every roster slot: credit a win
    /// to any player whose allowance was never exhausted, then restore the
    /// starting guess, the full allowance, and active status.
    pub fn reset(&mut self) {
        self.current_guess = self.original_guess;
        if self.losses_remaining > 0 {
            self.wins += 1;
        }
        self.losses_remaining = self.base_allowance + self.extra_allowance;
        self.status = PlayerStatus::StillIn;
    }
}
