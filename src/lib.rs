//! coin-arena: a parallel Monte Carlo simulator for a repeated coin-toss
//! elimination game.
//!
//! A roster of players, each following a fixed guessing strategy, predicts a
//! shared fair coin toss every round; a wrong guess costs a loss credit and
//! a player with no credits left is eliminated, except that a round wiping
//! the whole field is voided. The last player standing wins the game, games
//! are replayed across parallel workers, and wins are tallied per
//! (strategy, original guess) to estimate long-run win rates.

pub mod engine;
