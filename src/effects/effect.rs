//! Card effects parsed from spec identifiers.
//!
//! Effect identifiers and their parameters are validated once, when a
//! deck is built, so an unknown id or a missing required parameter
//! aborts the batch before the first turn is taken. After parsing, an
//! effect is a closed enum and resolution cannot fail.

use crate::core::config::CardParams;
use crate::core::error::SimError;

/// Distance covered by a `jump_forward` card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpSpan {
    /// Fixed number of steps.
    Fixed(i64),
    /// Uniform random steps in `[min, max]`.
    Range { min: i64, max: i64 },
}

/// One chance-card effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    /// Move back by a fixed number of steps, floored at the start.
    GoBack { steps: i64 },
    /// Return to the start space.
    GoToStart,
    /// Move back by one die roll, floored at the start.
    RollBack,
    /// Forfeit the next turn.
    LoseTurn,
    /// Negate the next landing on a bad space.
    CounterNextBad,
    /// Move forward by one die roll, capped at the end.
    RollForward,
    /// Immediately take another turn.
    ExtraTurn,
    /// Move forward by a fixed or random span, capped at the end.
    JumpForward(JumpSpan),
    /// Advance to the next space that is neither good nor bad.
    JumpNextNeutral,
    /// Advance straight to the end space.
    GoToEnd,
}

/// Default random span for `jump_forward` without explicit parameters.
const DEFAULT_JUMP_MIN: i64 = 1;
const DEFAULT_JUMP_MAX: i64 = 3;

impl CardEffect {
    /// Parse a spec identifier plus parameter map into an effect.
    ///
    /// Unrecognized identifiers and missing required parameters are
    /// fatal configuration errors.
    pub fn parse(id: &str, params: &CardParams) -> Result<Self, SimError> {
        match id {
            "go_back" => {
                let steps = *params
                    .get("steps")
                    .ok_or(SimError::MissingParam { id: "go_back", param: "steps" })?;
                Ok(CardEffect::GoBack { steps })
            }
            "go_to_start" => Ok(CardEffect::GoToStart),
            "roll_back" => Ok(CardEffect::RollBack),
            "lose_turn" => Ok(CardEffect::LoseTurn),
            "counter_next_bad" => Ok(CardEffect::CounterNextBad),
            "roll_forward" => Ok(CardEffect::RollForward),
            "extra_turn" => Ok(CardEffect::ExtraTurn),
            "jump_forward" => {
                let span = if let Some(&steps) = params.get("steps") {
                    JumpSpan::Fixed(steps)
                } else {
                    let min = params.get("min").copied().unwrap_or(DEFAULT_JUMP_MIN);
                    let max = params.get("max").copied().unwrap_or(DEFAULT_JUMP_MAX);
                    if min > max {
                        return Err(SimError::InvalidRange { id: "jump_forward", min, max });
                    }
                    JumpSpan::Range { min, max }
                };
                Ok(CardEffect::JumpForward(span))
            }
            "jump_next_neutral" => Ok(CardEffect::JumpNextNeutral),
            "go_to_end" => Ok(CardEffect::GoToEnd),
            other => Err(SimError::UnknownCardId(other.to_string())),
        }
    }

    /// Canonical spec identifier for this effect.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            CardEffect::GoBack { .. } => "go_back",
            CardEffect::GoToStart => "go_to_start",
            CardEffect::RollBack => "roll_back",
            CardEffect::LoseTurn => "lose_turn",
            CardEffect::CounterNextBad => "counter_next_bad",
            CardEffect::RollForward => "roll_forward",
            CardEffect::ExtraTurn => "extra_turn",
            CardEffect::JumpForward(_) => "jump_forward",
            CardEffect::JumpNextNeutral => "jump_next_neutral",
            CardEffect::GoToEnd => "go_to_end",
        }
    }
}
