pub mod arena;
pub mod game;
pub mod models;
pub mod player;
pub mod roster;
pub mod shard;
