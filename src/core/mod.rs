//! Core types: RNG, seats, board, configuration, and errors.

pub mod board;
pub mod config;
pub mod error;
pub mod rng;
pub mod seat;

pub use board::{Board, SpaceKind};
pub use config::{BoardSpec, CardParams, CardSpec, DeckSpec, SimulationSpec};
pub use error::SimError;
pub use rng::{GameRng, DIE_SIDES};
pub use seat::{SeatFlags, SeatId, SeatMap};
