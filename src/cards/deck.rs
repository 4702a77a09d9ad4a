//! Deck with deterministic reshuffle-on-exhaustion semantics.
//!
//! A deck holds two explicit partitions: the shuffle pool and the
//! pinned tail. Draw order walks the pool first, then the pinned cards
//! in their spec order. When the cursor would advance past the end, the
//! pool alone is reshuffled and the cursor resets, so the pinned cards
//! occupy the final slots of every cycle by construction. This is the
//! mechanism behind deterministic "you will eventually draw X after
//! exhausting the deck" effects.

use crate::core::config::DeckSpec;
use crate::core::error::SimError;
use crate::core::rng::GameRng;
use crate::effects::CardEffect;

use super::card::Card;

/// An ordered deck of chance cards with a draw cursor.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Cards that are shuffled at construction and on every reshuffle.
    pool: Vec<Card>,
    /// Cards fixed to the tail of every cycle, in spec order.
    pinned: Vec<Card>,
    cursor: usize,
    reshuffles: u64,
}

impl Deck {
    /// Build a deck from its spec, validating every card entry.
    ///
    /// Counts are expanded into individual cards, the non-pinned cards
    /// are shuffled using the supplied stream, and the pinned cards are
    /// kept after them in their spec order. Unknown identifiers and
    /// missing required parameters fail here, before any game runs.
    pub fn build(spec: &DeckSpec, rng: &mut GameRng) -> Result<Self, SimError> {
        let mut pool = Vec::new();
        let mut pinned = Vec::new();

        for entry in &spec.cards {
            let effect = CardEffect::parse(&entry.id, &entry.params)?;
            let target = if entry.pin_last { &mut pinned } else { &mut pool };
            for _ in 0..entry.count {
                target.push(Card::new(effect));
            }
        }

        rng.shuffle(&mut pool);

        Ok(Self {
            pool,
            pinned,
            cursor: 0,
            reshuffles: 0,
        })
    }

    /// Total number of cards across both partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len() + self.pinned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty() && self.pinned.is_empty()
    }

    /// How many reshuffles this deck has performed.
    #[must_use]
    pub fn reshuffles(&self) -> u64 {
        self.reshuffles
    }

    /// Draw the card at the cursor and advance.
    ///
    /// When the draw exhausts the deck the cursor resets and the pool
    /// is reshuffled in place; the pinned tail is untouched. Drawing
    /// from a deck built with zero cards is an error.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Card, SimError> {
        if self.is_empty() {
            return Err(SimError::EmptyDeck);
        }

        let card = if self.cursor < self.pool.len() {
            self.pool[self.cursor]
        } else {
            self.pinned[self.cursor - self.pool.len()]
        };

        self.cursor += 1;
        if self.cursor >= self.len() {
            self.cursor = 0;
            rng.shuffle(&mut self.pool);
            self.reshuffles += 1;
        }

        Ok(card)
    }
}
