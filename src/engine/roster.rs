//! Roster definitions: the built-in default lineup and TOML file loading.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::engine::models::{CoinValue, PlayerSpec, Strategy};

/// Top-level TOML file structure: a `[[players]]` array of specs.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub players: Vec<PlayerSpec>,
}

/// The built-in lineup: one entry per strategy, with both `Alternating`
/// starting guesses fielded.
static DEFAULT_ROSTER: Lazy<Vec<PlayerSpec>> = Lazy::new(|| {
    let entries = [
        (Strategy::Random, CoinValue::Heads),
        (Strategy::Alternating, CoinValue::Heads),
        (Strategy::Alternating, CoinValue::Tails),
        (Strategy::HoldOnWinSwitchOnLoss, CoinValue::Heads),
        (Strategy::HoldOnLossSwitchOnWin, CoinValue::Heads),
        (Strategy::AlwaysHeads, CoinValue::Heads),
        (Strategy::AlwaysTails, CoinValue::Tails),
    ];
    entries
        .iter()
        .map(|&(strategy, guess)| PlayerSpec {
            strategy,
            guess,
            extra_allowance: 0,
        })
        .collect()
});

/// The built-in default roster.
pub fn default_roster() -> Vec<PlayerSpec> {
    DEFAULT_ROSTER.clone()
}

/// Load a roster from a TOML file at the given path.
pub fn load_roster(path: &Path) -> Result<Vec<PlayerSpec>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let file: RosterFile =
        toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    if file.players.is_empty() {
        return Err(format!("{} defines no players", path.display()));
    }
    tracing::info!(path = %path.display(), count = file.players.len(), "loaded roster");
    Ok(file.players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_roster_fields_every_strategy() {
        let roster = default_roster();
        assert_eq!(roster.len(), 7);
        for strategy in [
            Strategy::Random,
            Strategy::Alternating,
            Strategy::HoldOnWinSwitchOnLoss,
            Strategy::HoldOnLossSwitchOnWin,
            Strategy::AlwaysHeads,
            Strategy::AlwaysTails,
        ] {
            assert!(roster.iter().any(|s| s.strategy == strategy));
        }
        assert!(roster.iter().all(|s| s.extra_allowance == 0));
    }

    #[test]
    fn roster_file_round_trips_through_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[players]]
strategy = "always_heads"
guess = "heads"

[[players]]
strategy = "hold_on_win_switch_on_loss"
guess = "tails"
extra_allowance = 2
"#
        )
        .unwrap();

        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].strategy, Strategy::AlwaysHeads);
        assert_eq!(roster[0].guess, CoinValue::Heads);
        assert_eq!(roster[0].extra_allowance, 0);
        assert_eq!(roster[1].strategy, Strategy::HoldOnWinSwitchOnLoss);
        assert_eq!(roster[1].extra_allowance, 2);
    }

    #[test]
    fn unknown_strategy_name_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[players]]
strategy = "psychic"
guess = "heads"
"#
        )
        .unwrap();

        assert!(load_roster(file.path()).is_err());
    }

    #[test]
    fn empty_roster_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(load_roster(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_roster(Path::new("/nonexistent/roster.toml")).is_err());
    }
}
