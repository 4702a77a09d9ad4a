//! Card resolution: applying one effect to a seat's position and flags.
//!
//! Resolution is pure apart from consuming randomness and mutating the
//! seat's sticky flags. Movement is always clamped to the board: backward
//! moves floor at the start, forward moves cap at the end index.

use crate::core::board::Board;
use crate::core::rng::GameRng;
use crate::core::seat::SeatFlags;

use super::effect::{CardEffect, JumpSpan};

/// Apply `effect` to a seat at `position`, returning the new position.
///
/// Die rolls and random jump spans are drawn from `rng` in effect
/// order; sticky effects arm the corresponding flag instead of moving.
pub fn resolve(
    effect: &CardEffect,
    position: usize,
    board: &Board,
    rng: &mut GameRng,
    flags: &mut SeatFlags,
) -> usize {
    let end_index = board.end_index();

    match effect {
        CardEffect::GoBack { steps } => step_by(position, -steps, end_index),
        CardEffect::GoToStart => 0,
        CardEffect::RollBack => {
            let roll = rng.roll_d6() as i64;
            step_by(position, -roll, end_index)
        }
        CardEffect::LoseTurn => {
            flags.set_skip_next();
            position
        }
        CardEffect::CounterNextBad => {
            flags.set_counter_bad();
            position
        }
        CardEffect::RollForward => {
            let roll = rng.roll_d6() as i64;
            step_by(position, roll, end_index)
        }
        CardEffect::ExtraTurn => {
            flags.set_extra_turn();
            position
        }
        CardEffect::JumpForward(span) => {
            let steps = match *span {
                JumpSpan::Fixed(steps) => steps,
                JumpSpan::Range { min, max } => rng.gen_range_inclusive(min, max),
            };
            step_by(position, steps, end_index)
        }
        CardEffect::JumpNextNeutral => {
            let mut idx = position + 1;
            while idx < end_index && !board.space(idx).is_neutral() {
                idx += 1;
            }
            idx.min(end_index)
        }
        CardEffect::GoToEnd => end_index,
    }
}

/// Move `delta` steps from `position`, clamped to `[0, end_index]`.
fn step_by(position: usize, delta: i64, end_index: usize) -> usize {
    let target = (position as i64 + delta).clamp(0, end_index as i64);
    target as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BoardSpec;

    fn board_of(labels: &[&str]) -> Board {
        let spec = BoardSpec {
            spaces: labels.iter().map(|s| s.to_string()).collect(),
        };
        Board::from_spec(&spec).unwrap()
    }

    fn test_board() -> Board {
        board_of(&["start", "neutral", "good", "bad", "neutral", "end"])
    }

    #[test]
    fn test_go_back_floors_at_start() {
        let board = test_board();
        let mut rng = GameRng::new(1);
        let mut flags = SeatFlags::default();

        let effect = CardEffect::GoBack { steps: 2 };
        assert_eq!(resolve(&effect, 3, &board, &mut rng, &mut flags), 1);
        assert_eq!(resolve(&effect, 1, &board, &mut rng, &mut flags), 0);
        assert!(flags.is_clear());
    }

    #[test]
    fn test_go_to_start_and_end() {
        let board = test_board();
        let mut rng = GameRng::new(1);
        let mut flags = SeatFlags::default();

        assert_eq!(resolve(&CardEffect::GoToStart, 4, &board, &mut rng, &mut flags), 0);
        assert_eq!(resolve(&CardEffect::GoToEnd, 1, &board, &mut rng, &mut flags), 5);
    }

    #[test]
    fn test_roll_back_stays_on_board() {
        let board = test_board();
        let mut rng = GameRng::new(3);
        let mut flags = SeatFlags::default();

        for _ in 0..100 {
            let pos = resolve(&CardEffect::RollBack, 2, &board, &mut rng, &mut flags);
            assert!(pos <= 1);
        }
    }

    #[test]
    fn test_roll_forward_caps_at_end() {
        let board = test_board();
        let mut rng = GameRng::new(3);
        let mut flags = SeatFlags::default();

        for _ in 0..100 {
            let pos = resolve(&CardEffect::RollForward, 4, &board, &mut rng, &mut flags);
            assert_eq!(pos, 5);
        }
    }

    #[test]
    fn test_sticky_effects_do_not_move() {
        let board = test_board();
        let mut rng = GameRng::new(1);

        let mut flags = SeatFlags::default();
        assert_eq!(resolve(&CardEffect::LoseTurn, 2, &board, &mut rng, &mut flags), 2);
        assert!(flags.take_skip_next());

        let mut flags = SeatFlags::default();
        assert_eq!(resolve(&CardEffect::CounterNextBad, 2, &board, &mut rng, &mut flags), 2);
        assert!(flags.take_counter_bad());

        let mut flags = SeatFlags::default();
        assert_eq!(resolve(&CardEffect::ExtraTurn, 2, &board, &mut rng, &mut flags), 2);
        assert!(flags.take_extra_turn());
    }

    #[test]
    fn test_jump_forward_fixed() {
        let board = test_board();
        let mut rng = GameRng::new(1);
        let mut flags = SeatFlags::default();

        let effect = CardEffect::JumpForward(JumpSpan::Fixed(2));
        assert_eq!(resolve(&effect, 1, &board, &mut rng, &mut flags), 3);
        // Caps at the end.
        assert_eq!(resolve(&effect, 4, &board, &mut rng, &mut flags), 5);
    }

    #[test]
    fn test_jump_forward_range_bounds() {
        let board = test_board();
        let mut rng = GameRng::new(5);
        let mut flags = SeatFlags::default();

        let effect = CardEffect::JumpForward(JumpSpan::Range { min: 1, max: 3 });
        for _ in 0..100 {
            let pos = resolve(&effect, 1, &board, &mut rng, &mut flags);
            assert!((2..=4).contains(&pos));
        }
    }

    #[test]
    fn test_jump_next_neutral_skips_good_and_bad() {
        let board = test_board();
        let mut rng = GameRng::new(1);
        let mut flags = SeatFlags::default();

        // From position 1 the next two spaces are good and bad; the
        // first qualifying space is the neutral at index 4.
        assert_eq!(resolve(&CardEffect::JumpNextNeutral, 1, &board, &mut rng, &mut flags), 4);
    }

    #[test]
    fn test_jump_next_neutral_stops_at_end() {
        let board = board_of(&["start", "good", "bad", "end"]);
        let mut rng = GameRng::new(1);
        let mut flags = SeatFlags::default();

        // No neutral space before the end; lands on the end index.
        assert_eq!(resolve(&CardEffect::JumpNextNeutral, 0, &board, &mut rng, &mut flags), 3);
    }

    #[test]
    fn test_jump_next_neutral_any_nonchance_label_qualifies() {
        let board = board_of(&["start", "good", "swamp", "good", "end"]);
        let mut rng = GameRng::new(1);
        let mut flags = SeatFlags::default();

        assert_eq!(resolve(&CardEffect::JumpNextNeutral, 0, &board, &mut rng, &mut flags), 2);
    }
}
