//! Single-game simulation engine.

pub mod game;

pub use game::{simulate_game, GameResult};
