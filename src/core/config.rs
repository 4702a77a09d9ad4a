//! Declarative simulation configuration.
//!
//! A `SimulationSpec` is the input document for one board variant: the
//! track layout plus the good and bad chance decks. Specs are
//! deserialized from JSON by the surrounding tooling and handed to the
//! engine by reference; the engine never touches the filesystem.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::SimError;

/// Effect-specific card parameters (step counts, ranges).
pub type CardParams = FxHashMap<String, i64>;

/// One board variant: track layout plus both chance decks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSpec {
    /// Display name for reporting. Not used by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub board: BoardSpec,
    pub good_deck: DeckSpec,
    pub bad_deck: DeckSpec,
}

impl SimulationSpec {
    /// Parse a spec from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Ordered list of space-kind labels.
///
/// Must begin with `start` and finish with `end`; validated when the
/// board is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSpec {
    pub spaces: Vec<String>,
}

/// Declarative contents of one deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckSpec {
    pub cards: Vec<CardSpec>,
}

/// One card entry: an effect identifier expanded into `count` copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    /// Effect identifier, e.g. `go_back` or `roll_forward`.
    pub id: String,
    /// Number of copies of this card in the deck.
    #[serde(default = "default_count")]
    pub count: u32,
    /// Effect-specific parameters.
    #[serde(default)]
    pub params: CardParams,
    /// Pin every copy of this card to the tail of each shuffle cycle.
    #[serde(default)]
    pub pin_last: bool,
}

fn default_count() -> u32 {
    1
}
