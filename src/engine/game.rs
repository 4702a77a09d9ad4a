//! Single-game state machine.
//!
//! One game drives a round-robin turn sequence until a seat reaches the
//! end space. Per turn, the current seat:
//!
//! 1. increments its turn counter;
//! 2. forfeits without a roll if `skip_next` is armed;
//! 3. otherwise rolls a d6 and moves forward, capped at the end index;
//!    reaching it wins immediately;
//! 4. on a `good` space draws from the good deck and resolves the card;
//!    on a `bad` space draws from the bad deck unless `counter_bad`
//!    negates the landing (no draw, no count);
//! 5. wins if card resolution carried it to the end index;
//! 6. repeats immediately if `extra_turn` is armed (the repeat is not a
//!    separate turn for counting), else play passes to the next seat.
//!
//! Decks are built fresh for each game; all seats share the same two
//! deck instances within a game.

use crate::cards::Deck;
use crate::core::board::{Board, SpaceKind};
use crate::core::config::SimulationSpec;
use crate::core::error::SimError;
use crate::core::rng::GameRng;
use crate::core::seat::{SeatFlags, SeatId, SeatMap};
use crate::effects::resolver::resolve;

/// Per-seat mutable state for one game.
#[derive(Clone, Debug, Default)]
struct SeatState {
    position: usize,
    turns: u32,
    good_draws: u32,
    bad_draws: u32,
    flags: SeatFlags,
}

/// Outcome of one complete game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameResult {
    pub winner: SeatId,
    pub turns: SeatMap<u32>,
    pub good_draws: SeatMap<u32>,
    pub bad_draws: SeatMap<u32>,
}

/// One in-flight game.
struct ActiveGame {
    board: Board,
    good_deck: Deck,
    bad_deck: Deck,
    seats: SeatMap<SeatState>,
    current: SeatId,
}

impl ActiveGame {
    /// Validate the board and deal both decks for a fresh game.
    ///
    /// Deck construction consumes randomness (good deck first, then
    /// bad), so the call order here is part of the stream contract.
    fn new(spec: &SimulationSpec, rng: &mut GameRng, players: usize) -> Result<Self, SimError> {
        let board = Board::from_spec(&spec.board)?;
        let good_deck = Deck::build(&spec.good_deck, rng)?;
        let bad_deck = Deck::build(&spec.bad_deck, rng)?;

        Ok(Self {
            board,
            good_deck,
            bad_deck,
            seats: SeatMap::with_default(players),
            current: SeatId::new(0),
        })
    }

    /// Run turns until a seat wins.
    fn play(&mut self, rng: &mut GameRng) -> Result<SeatId, SimError> {
        loop {
            if let Some(winner) = self.take_turn(rng)? {
                return Ok(winner);
            }
        }
    }

    /// One turn for the current seat. Returns the winner if it ended
    /// the game.
    fn take_turn(&mut self, rng: &mut GameRng) -> Result<Option<SeatId>, SimError> {
        let seat = self.current;
        let end_index = self.board.end_index();
        self.seats[seat].turns += 1;

        if self.seats[seat].flags.take_skip_next() {
            // Forfeited turn: no roll, no draw.
        } else {
            let roll = rng.roll_d6();
            let state = &mut self.seats[seat];
            state.position = (state.position + roll).min(end_index);
            if state.position >= end_index {
                return Ok(Some(seat));
            }

            self.resolve_landing(seat, rng)?;
            if self.seats[seat].position >= end_index {
                return Ok(Some(seat));
            }
        }

        self.advance_turn_order();
        Ok(None)
    }

    /// Inspect the space the seat landed on and apply its effect.
    fn resolve_landing(&mut self, seat: SeatId, rng: &mut GameRng) -> Result<(), SimError> {
        let position = self.seats[seat].position;
        match self.board.space(position) {
            SpaceKind::Good => {
                let card = self.good_deck.draw(rng)?;
                let state = &mut self.seats[seat];
                state.good_draws += 1;
                state.position =
                    resolve(&card.effect, state.position, &self.board, rng, &mut state.flags);
            }
            SpaceKind::Bad => {
                if self.seats[seat].flags.take_counter_bad() {
                    // Landing negated: no draw, no bad-draw counted.
                } else {
                    let card = self.bad_deck.draw(rng)?;
                    let state = &mut self.seats[seat];
                    state.bad_draws += 1;
                    state.position =
                        resolve(&card.effect, state.position, &self.board, rng, &mut state.flags);
                }
            }
            SpaceKind::Start | SpaceKind::End | SpaceKind::Neutral => {}
        }
        Ok(())
    }

    /// Consume an armed extra turn or pass play to the next seat.
    ///
    /// A repeated turn re-runs the counter increment in `take_turn`, so
    /// the increment is backed out here to keep `turns` counting only
    /// genuinely separate turns.
    fn advance_turn_order(&mut self) {
        let seat = self.current;
        if self.seats[seat].flags.take_extra_turn() {
            self.seats[seat].turns -= 1;
        } else {
            self.current = seat.next(self.seats.seat_count());
        }
    }

    fn into_result(self, winner: SeatId) -> GameResult {
        let seat_count = self.seats.seat_count();
        GameResult {
            winner,
            turns: SeatMap::new(seat_count, |s| self.seats[s].turns),
            good_draws: SeatMap::new(seat_count, |s| self.seats[s].good_draws),
            bad_draws: SeatMap::new(seat_count, |s| self.seats[s].bad_draws),
        }
    }
}

/// Drive one complete game to a winner.
///
/// Both decks are dealt fresh from `spec` and the supplied stream; the
/// stream is consumed strictly in turn order afterwards.
pub fn simulate_game(
    spec: &SimulationSpec,
    rng: &mut GameRng,
    players: usize,
) -> Result<GameResult, SimError> {
    if players == 0 || players > 255 {
        return Err(SimError::InvalidPlayers(players));
    }

    let mut game = ActiveGame::new(spec, rng, players)?;
    let winner = game.play(rng)?;
    Ok(game.into_result(winner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{BoardSpec, CardParams, CardSpec, DeckSpec};

    fn deck_of(entries: &[(&str, u32, bool)]) -> DeckSpec {
        DeckSpec {
            cards: entries
                .iter()
                .map(|(id, count, pin_last)| CardSpec {
                    id: id.to_string(),
                    count: *count,
                    params: CardParams::default(),
                    pin_last: *pin_last,
                })
                .collect(),
        }
    }

    fn spec_of(labels: &[&str], good: DeckSpec, bad: DeckSpec) -> SimulationSpec {
        SimulationSpec {
            name: None,
            board: BoardSpec {
                spaces: labels.iter().map(|s| s.to_string()).collect(),
            },
            good_deck: good,
            bad_deck: bad,
        }
    }

    fn active_game(spec: &SimulationSpec, rng: &mut GameRng, players: usize) -> ActiveGame {
        ActiveGame::new(spec, rng, players).unwrap()
    }

    #[test]
    fn test_counter_bad_negates_landing_without_draw() {
        let spec = spec_of(
            &["start", "bad", "end"],
            deck_of(&[]),
            deck_of(&[("lose_turn", 1, false)]),
        );
        let mut rng = GameRng::new(42);
        let mut game = active_game(&spec, &mut rng, 1);
        let seat = SeatId::new(0);

        game.seats[seat].position = 1;
        game.seats[seat].flags.set_counter_bad();
        game.resolve_landing(seat, &mut rng).unwrap();

        assert_eq!(game.seats[seat].bad_draws, 0);
        assert!(game.seats[seat].flags.is_clear());

        // The flag is spent: the next bad landing draws normally.
        game.resolve_landing(seat, &mut rng).unwrap();
        assert_eq!(game.seats[seat].bad_draws, 1);
    }

    #[test]
    fn test_bad_landing_draws_and_resolves() {
        let spec = spec_of(
            &["start", "bad", "end"],
            deck_of(&[]),
            deck_of(&[("lose_turn", 1, false)]),
        );
        let mut rng = GameRng::new(42);
        let mut game = active_game(&spec, &mut rng, 1);
        let seat = SeatId::new(0);

        game.seats[seat].position = 1;
        game.resolve_landing(seat, &mut rng).unwrap();

        assert_eq!(game.seats[seat].bad_draws, 1);
        assert!(game.seats[seat].flags.take_skip_next());
    }

    #[test]
    fn test_good_landing_draws_and_moves() {
        let spec = spec_of(
            &["start", "good", "neutral", "end"],
            deck_of(&[("go_to_end", 1, false)]),
            deck_of(&[]),
        );
        let mut rng = GameRng::new(42);
        let mut game = active_game(&spec, &mut rng, 1);
        let seat = SeatId::new(0);

        game.seats[seat].position = 1;
        game.resolve_landing(seat, &mut rng).unwrap();

        assert_eq!(game.seats[seat].good_draws, 1);
        assert_eq!(game.seats[seat].position, 3);
    }

    #[test]
    fn test_neutral_landing_has_no_effect() {
        let spec = spec_of(&["start", "neutral", "end"], deck_of(&[]), deck_of(&[]));
        let mut rng = GameRng::new(42);
        let mut game = active_game(&spec, &mut rng, 1);
        let seat = SeatId::new(0);

        game.seats[seat].position = 1;
        game.resolve_landing(seat, &mut rng).unwrap();

        assert_eq!(game.seats[seat].good_draws, 0);
        assert_eq!(game.seats[seat].bad_draws, 0);
        assert_eq!(game.seats[seat].position, 1);
    }

    #[test]
    fn test_landing_on_empty_deck_is_fatal() {
        let spec = spec_of(&["start", "good", "end"], deck_of(&[]), deck_of(&[]));
        let mut rng = GameRng::new(42);
        let mut game = active_game(&spec, &mut rng, 1);
        let seat = SeatId::new(0);

        game.seats[seat].position = 1;
        assert!(matches!(
            game.resolve_landing(seat, &mut rng),
            Err(SimError::EmptyDeck)
        ));
    }

    #[test]
    fn test_extra_turn_keeps_seat_and_turn_count() {
        let spec = spec_of(&["start", "neutral", "end"], deck_of(&[]), deck_of(&[]));
        let mut rng = GameRng::new(42);
        let mut game = active_game(&spec, &mut rng, 2);
        let seat = SeatId::new(0);

        game.seats[seat].turns = 3;
        game.seats[seat].flags.set_extra_turn();
        game.advance_turn_order();

        // The repeated turn is not double-counted and play stays with
        // the same seat.
        assert_eq!(game.current, seat);
        assert_eq!(game.seats[seat].turns, 2);
        assert!(game.seats[seat].flags.is_clear());

        // Without the flag, play passes on.
        game.advance_turn_order();
        assert_eq!(game.current, SeatId::new(1));
    }

    #[test]
    fn test_skipped_turn_counts_but_does_not_move() {
        let spec = spec_of(&["start", "neutral", "end"], deck_of(&[]), deck_of(&[]));
        let mut rng = GameRng::new(42);
        let mut game = active_game(&spec, &mut rng, 2);
        let seat = SeatId::new(0);

        game.seats[seat].flags.set_skip_next();
        let outcome = game.take_turn(&mut rng).unwrap();

        assert_eq!(outcome, None);
        assert_eq!(game.seats[seat].turns, 1);
        assert_eq!(game.seats[seat].position, 0);
        assert!(game.seats[seat].flags.is_clear());
        assert_eq!(game.current, SeatId::new(1));
    }

    #[test]
    fn test_minimal_board_wins_on_first_roll() {
        let spec = spec_of(&["start", "end"], deck_of(&[]), deck_of(&[]));
        let mut rng = GameRng::new(42);

        // Any roll of 1-6 reaches the end from the start.
        let result = simulate_game(&spec, &mut rng, 1).unwrap();
        assert_eq!(result.winner, SeatId::new(0));
        assert_eq!(result.turns[SeatId::new(0)], 1);
        assert_eq!(result.good_draws[SeatId::new(0)], 0);
    }

    #[test]
    fn test_all_good_board_with_go_to_end_wins_in_one_turn() {
        // Every non-terminal space is good and every good card jumps to
        // the end, so the first turn always wins regardless of the roll.
        let spec = spec_of(
            &["start", "good", "good", "good", "good", "good", "end"],
            deck_of(&[("go_to_end", 1, false)]),
            deck_of(&[]),
        );

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let result = simulate_game(&spec, &mut rng, 3).unwrap();
            assert_eq!(result.winner, SeatId::new(0));
            assert_eq!(result.turns[SeatId::new(0)], 1);
            assert_eq!(result.turns[SeatId::new(1)], 0);
            assert_eq!(result.turns[SeatId::new(2)], 0);
            assert!(result.good_draws[SeatId::new(0)] <= 1);
        }
    }

    #[test]
    fn test_games_terminate_with_winner_in_range() {
        let spec = spec_of(
            &["start", "good", "neutral", "bad", "neutral", "good", "bad", "end"],
            deck_of(&[("roll_forward", 2, false), ("extra_turn", 1, false)]),
            deck_of(&[("lose_turn", 2, false), ("roll_back", 1, false)]),
        );

        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let players = (seed as usize % 4) + 1;
            let result = simulate_game(&spec, &mut rng, players).unwrap();
            assert!(result.winner.index() < players);
            assert!(result.turns[result.winner] >= 1);
        }
    }

    #[test]
    fn test_invalid_player_counts_rejected() {
        let spec = spec_of(&["start", "end"], deck_of(&[]), deck_of(&[]));
        let mut rng = GameRng::new(42);

        assert!(matches!(
            simulate_game(&spec, &mut rng, 0),
            Err(SimError::InvalidPlayers(0))
        ));
        assert!(matches!(
            simulate_game(&spec, &mut rng, 256),
            Err(SimError::InvalidPlayers(256))
        ));
    }
}
