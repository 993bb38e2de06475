//! Shard executor — a contiguous batch of games run sequentially by one
//! worker against one persistent roster, with a private seeded RNG.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::game::play_game;
use crate::engine::models::PlayerSpec;
use crate::engine::player::Player;

/// Build a roster from its specs.
pub fn build_roster(specs: &[PlayerSpec], base_allowance: u32) -> Vec<Player> {
    specs
        .iter()
        .map(|spec| Player::new(spec, base_allowance))
        .collect()
}

/// Run `games` independent games and return the roster with its accumulated
/// per-player win counts.
///
/// The roster is built once and reset between games; the RNG is owned by
/// this shard alone, so a fixed seed reproduces the shard exactly and no
/// synchronization is needed while it runs.
pub fn run_shard(specs: &[PlayerSpec], base_allowance: u32, games: u64, seed: u64) -> Vec<Player> {
    let mut roster = build_roster(specs, base_allowance);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..games {
        play_game(&mut roster, &mut rng);
    }

    roster
}
