//! Seat identification, per-seat data storage, and sticky turn flags.
//!
//! ## SeatId
//!
//! Type-safe seat identifier supporting games with 1-255 seats.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access, indexable by
//! `SeatId`.
//!
//! ## SeatFlags
//!
//! The three sticky flags card effects can set on a seat. Each flag is
//! consumed exactly once: setters arm it, `take_*` reads and clears it
//! in one step, so the "cleared on use" invariant is enforced by the
//! API rather than by discipline at every call site.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier for one player slot, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one in round-robin order.
    #[must_use]
    pub fn next(self, seat_count: usize) -> Self {
        Self(((self.index() + 1) % seat_count) as u8)
    }

    /// Iterate over all seat IDs for a game with `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// One entry per seat, in seat order. Serializes transparently as a
/// list so seat `i`'s data is element `i` of the output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(|i| factory(SeatId(i))).collect();
        Self { data }
    }

    /// Create a new SeatMap with default values.
    pub fn with_default(seat_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(seat_count, |_| T::default())
    }

    /// Take ownership of per-seat values already in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 seat");
        assert!(data.len() <= 255, "At most 255 seats supported");
        Self { data }
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    /// Mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over `(SeatId, &T)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// Sticky per-seat flags set by card effects.
///
/// - `skip_next`: the seat's next turn is forfeited without a roll.
/// - `counter_bad`: the next landing on a `bad` space is negated and
///   consumes no bad-card draw.
/// - `extra_turn`: the seat immediately repeats its turn without
///   advancing turn order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeatFlags {
    skip_next: bool,
    counter_bad: bool,
    extra_turn: bool,
}

impl SeatFlags {
    /// Arm the skip-next-turn flag.
    pub fn set_skip_next(&mut self) {
        self.skip_next = true;
    }

    /// Arm the counter-next-bad flag.
    pub fn set_counter_bad(&mut self) {
        self.counter_bad = true;
    }

    /// Arm the extra-turn flag.
    pub fn set_extra_turn(&mut self) {
        self.extra_turn = true;
    }

    /// Consume the skip-next-turn flag, returning whether it was armed.
    pub fn take_skip_next(&mut self) -> bool {
        std::mem::take(&mut self.skip_next)
    }

    /// Consume the counter-next-bad flag, returning whether it was armed.
    pub fn take_counter_bad(&mut self) -> bool {
        std::mem::take(&mut self.counter_bad)
    }

    /// Consume the extra-turn flag, returning whether it was armed.
    pub fn take_extra_turn(&mut self) -> bool {
        std::mem::take(&mut self.extra_turn)
    }

    /// True when no flag is armed.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}
