//! A single chance card.

use crate::effects::CardEffect;

/// One card in a deck.
///
/// Effect-specific parameters from the spec are folded into the effect
/// when the deck is built, so a drawn card is ready to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub effect: CardEffect,
}

impl Card {
    /// Create a card carrying the given effect.
    #[must_use]
    pub const fn new(effect: CardEffect) -> Self {
        Self { effect }
    }

    /// The spec identifier of this card's effect.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.effect.id()
    }
}
