//! Board model: an ordered sequence of space kinds.
//!
//! A board is immutable for the duration of a simulation batch. The
//! first space must be `start` and the last must be `end`; the end
//! index is the winning threshold.

use serde::{Deserialize, Serialize};

use crate::core::config::BoardSpec;
use crate::core::error::SimError;

/// Kind of one board space.
///
/// Only `good` and `bad` trigger card draws. Any label that is not
/// `start`, `end`, `good`, or `bad` is treated as neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    Start,
    End,
    Good,
    Bad,
    Neutral,
}

impl SpaceKind {
    /// Classify a space label from an input document.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "start" => SpaceKind::Start,
            "end" => SpaceKind::End,
            "good" => SpaceKind::Good,
            "bad" => SpaceKind::Bad,
            _ => SpaceKind::Neutral,
        }
    }

    /// True for spaces that trigger no effect when landed on.
    ///
    /// This is the category `jump_next_neutral` scans for: everything
    /// except `good` and `bad` qualifies.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        !matches!(self, SpaceKind::Good | SpaceKind::Bad)
    }
}

/// An ordered race track of spaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    spaces: Vec<SpaceKind>,
}

impl Board {
    /// Build and validate a board from its declarative spec.
    ///
    /// Fails unless the first space is `start` and the last is `end`.
    pub fn from_spec(spec: &BoardSpec) -> Result<Self, SimError> {
        let spaces: Vec<SpaceKind> = spec
            .spaces
            .iter()
            .map(|label| SpaceKind::from_label(label))
            .collect();

        let valid = spaces.len() >= 2
            && spaces.first() == Some(&SpaceKind::Start)
            && spaces.last() == Some(&SpaceKind::End);
        if !valid {
            return Err(SimError::InvalidBoard);
        }

        Ok(Self { spaces })
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Index of the `end` space, the winning threshold.
    #[must_use]
    pub fn end_index(&self) -> usize {
        self.spaces.len() - 1
    }

    /// Kind of the space at `index`.
    #[must_use]
    pub fn space(&self, index: usize) -> SpaceKind {
        self.spaces[index]
    }
}
