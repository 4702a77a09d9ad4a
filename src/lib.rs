//! # tracksim
//!
//! Monte Carlo outcome estimation for chance-driven race-track board
//! games: dice-rolled movement, good/bad chance spaces, and card decks
//! with deterministic reshuffle semantics. Given a declarative board
//! and deck description, the engine runs many independent games and
//! aggregates win rates, turn counts, and draw counts per seat.
//!
//! ## Design Principles
//!
//! 1. **Chance-Driven**: no player strategy or choice anywhere. Every
//!    outcome flows from one explicit, seeded random stream, so a batch
//!    is exactly reproducible from its inputs.
//!
//! 2. **Configuration Over Convention**: boards and decks are data
//!    (`SimulationSpec`); the engine hardcodes only the effect
//!    vocabulary. Malformed configuration fails fast, before the first
//!    game runs.
//!
//! 3. **Structural Invariants**: the pinned-tail deck property and the
//!    consume-once flag semantics are guaranteed by the shape of the
//!    types (two deck partitions, `take_*` flag accessors), not by
//!    scattered conditionals.
//!
//! ## Modules
//!
//! - `core`: RNG, seats, board, configuration, errors
//! - `cards`: cards and decks with reshuffle-on-exhaustion
//! - `effects`: card effect parsing and resolution
//! - `engine`: single-game state machine
//! - `stats`: batch aggregation into per-seat statistics
//! - `report`: markdown report rendering

pub mod cards;
pub mod core;
pub mod effects;
pub mod engine;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardSpec, CardParams, CardSpec, DeckSpec, GameRng, SeatFlags, SeatId, SeatMap,
    SimError, SimulationSpec, SpaceKind,
};

pub use crate::cards::{Card, Deck};

pub use crate::effects::{resolve, CardEffect, JumpSpan};

pub use crate::engine::{simulate_game, GameResult};

pub use crate::stats::{run_batch, AggregateStats, SeatStats};

pub use crate::report::{render_markdown, VariantReport};
