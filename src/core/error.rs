//! Error taxonomy for the simulation engine.
//!
//! Every variant is a configuration problem: a malformed board, an
//! unknown card, a bad parameter, or batch dimensions that cannot
//! produce statistics. All are fatal and abort the offending batch
//! without partial results; the engine has no transient-failure modes.

use thiserror::Error;

/// Errors produced while building or running a simulation batch.
#[derive(Debug, Error)]
pub enum SimError {
    /// Board does not begin with `start` and finish with `end`.
    #[error("board must begin with a 'start' space and finish with an 'end' space")]
    InvalidBoard,

    /// Card effect identifier is not one the resolver supports.
    #[error("unknown card id: {0:?}")]
    UnknownCardId(String),

    /// Card entry omits a parameter its effect requires.
    #[error("card {id:?} is missing required parameter {param:?}")]
    MissingParam { id: &'static str, param: &'static str },

    /// Card entry carries parameters that cannot be satisfied.
    #[error("card {id:?} has an invalid parameter range [{min}, {max}]")]
    InvalidRange { id: &'static str, min: i64, max: i64 },

    /// Draw attempted from a deck built with zero cards.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    /// Batch was asked to run zero games.
    #[error("batch must run at least one game")]
    EmptyBatch,

    /// Player count outside the supported 1-255 range.
    #[error("player count {0} is not in 1..=255")]
    InvalidPlayers(usize),

    /// Input document failed to parse.
    #[error("failed to parse simulation spec: {0}")]
    Parse(#[from] serde_json::Error),
}
