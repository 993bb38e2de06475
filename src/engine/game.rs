//! Synchronous game runner — advances a roster through elimination rounds.
//!
//! One round applies a single shared toss to every active player. A round in
//! which at least one player survives moves the just-lost players out of the
//! game; a round in which every active player loses at once is voided and
//! the losers are restored, so no round can ever eliminate the whole field.

use crate::engine::models::{CoinSource, PlayerStatus};
use crate::engine::player::Player;

/// How a single round resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// At least one active player survived; `eliminated` players moved out.
    Eliminated { eliminated: usize },
    /// Every active player lost simultaneously; the round was voided and
    /// `restored` players were returned to the active set.
    TieBreak { restored: usize },
}

/// Bookkeeping for one completed game.
#[derive(Debug, Clone, Copy)]
pub struct GameSummary {
    pub rounds: u64,
    pub tie_breaks: u64,
    /// Roster slot of the surviving player, if the roster was non-empty.
    pub winner: Option<usize>,
}

/// Players still eligible to act this game.
pub fn active_count(roster: &[Player]) -> usize {
    roster
        .iter()
        .filter(|p| p.status() == PlayerStatus::StillIn)
        .count()
}

/// Play one round: draw a shared toss, evaluate every active player against
/// it, then either eliminate the just-lost players or, if nobody survived,
/// void the round and restore them.
///
/// Players already out are skipped entirely, including by the tie-break.
pub fn play_round<S: CoinSource + ?Sized>(roster: &mut [Player], coins: &mut S) -> RoundOutcome {
    let toss = coins.flip();

    for player in roster.iter_mut() {
        if player.status() == PlayerStatus::StillIn {
            player.evaluate(toss, coins);
        }
    }

    let survivors = active_count(roster);
    if survivors > 0 {
        let mut eliminated = 0;
        for player in roster.iter_mut() {
            if player.status() == PlayerStatus::Lost {
                player.eliminate();
                eliminated += 1;
            }
        }
        RoundOutcome::Eliminated { eliminated }
    } else {
        let mut restored = 0;
        for player in roster.iter_mut() {
            if player.status() == PlayerStatus::Lost {
                player.retry_toss();
                restored += 1;
            }
        }
        RoundOutcome::TieBreak { restored }
    }
}

/// Drive one game from all-active down to a single survivor, then reset the
/// whole roster (crediting the survivor's win) for the next game.
///
/// A size-one roster wins trivially with no rounds played. Termination is
/// not guaranteed for a roster whose active set can only lose in lockstep
/// (two `AlwaysTails` players, say); no round cap is imposed here because a
/// capped game would end with more than one un-eliminated player and break
/// the one-win-per-game accounting.
pub fn play_game<S: CoinSource + ?Sized>(roster: &mut [Player], coins: &mut S) -> GameSummary {
    let mut rounds = 0;
    let mut tie_breaks = 0;

    while active_count(roster) > 1 {
        rounds += 1;
        if let RoundOutcome::TieBreak { .. } = play_round(roster, coins) {
            tie_breaks += 1;
        }
    }

    let winner = roster
        .iter()
        .position(|p| p.status() == PlayerStatus::StillIn);

    for player in roster.iter_mut() {
        player.reset();
    }

    GameSummary {
        rounds,
        tie_breaks,
        winner,
    }
}
