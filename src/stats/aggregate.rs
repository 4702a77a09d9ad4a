//! Trial aggregation: many games reduced to per-seat statistics.
//!
//! `run_batch` seeds one random stream, runs the requested number of
//! games sequentially against it, and reduces the raw results into
//! distributional statistics per seat. Reproducibility contract: the
//! same `(spec, games, seed, players)` always yields bit-identical
//! output, because every game consumes the single stream in a fixed
//! order.

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationSpec;
use crate::core::error::SimError;
use crate::core::rng::GameRng;
use crate::core::seat::{SeatId, SeatMap};
use crate::engine::simulate_game;

use super::summary::{mean, percentile, std_dev};

/// Distributional statistics for one seat across a batch.
///
/// Field names match the JSON output of the statistics document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatStats {
    /// Fraction of games this seat won.
    pub win_rate: f64,
    pub avg_turns: f64,
    pub turns_stdev: f64,
    pub turns_p50: u32,
    pub turns_p90: u32,
    pub avg_good_draws: f64,
    pub avg_bad_draws: f64,
    pub avg_total_draws: f64,
    pub total_draws_stdev: f64,
    pub total_draws_p50: u32,
    pub total_draws_p90: u32,
}

/// Per-seat statistics for one `(spec, games, seed, players)` batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub games: usize,
    pub players: usize,
    pub per_player: SeatMap<SeatStats>,
}

/// Raw per-seat sample columns collected while games run.
struct SeatSamples {
    turns: Vec<u32>,
    good_draws: Vec<u32>,
    bad_draws: Vec<u32>,
    wins: u32,
}

impl SeatSamples {
    fn with_capacity(games: usize) -> Self {
        Self {
            turns: Vec::with_capacity(games),
            good_draws: Vec::with_capacity(games),
            bad_draws: Vec::with_capacity(games),
            wins: 0,
        }
    }

    fn reduce(mut self, games: usize) -> SeatStats {
        let total_draws: Vec<u32> = self
            .good_draws
            .iter()
            .zip(&self.bad_draws)
            .map(|(g, b)| g + b)
            .collect();

        let avg_turns = mean(&self.turns);
        let turns_stdev = std_dev(&self.turns);
        let avg_good_draws = mean(&self.good_draws);
        let avg_bad_draws = mean(&self.bad_draws);
        let avg_total_draws = mean(&total_draws);
        let total_draws_stdev = std_dev(&total_draws);

        self.turns.sort_unstable();
        let mut total_sorted = total_draws;
        total_sorted.sort_unstable();

        SeatStats {
            win_rate: f64::from(self.wins) / games as f64,
            avg_turns,
            turns_stdev,
            turns_p50: percentile(&self.turns, 0.5),
            turns_p90: percentile(&self.turns, 0.9),
            avg_good_draws,
            avg_bad_draws,
            avg_total_draws,
            total_draws_stdev,
            total_draws_p50: percentile(&total_sorted, 0.5),
            total_draws_p90: percentile(&total_sorted, 0.9),
        }
    }
}

/// Run `games` independent games and aggregate per-seat statistics.
///
/// All games share one stream created from `seed` and run
/// sequentially; decks are rebuilt fresh inside each game. The first
/// configuration error aborts the batch with no partial statistics.
pub fn run_batch(
    spec: &SimulationSpec,
    games: usize,
    seed: u64,
    players: usize,
) -> Result<AggregateStats, SimError> {
    if games == 0 {
        return Err(SimError::EmptyBatch);
    }
    if players == 0 || players > 255 {
        return Err(SimError::InvalidPlayers(players));
    }

    let mut rng = GameRng::new(seed);
    log::debug!(
        "running batch: spec={:?} games={games} seed={} players={players}",
        spec.name.as_deref().unwrap_or("<unnamed>"),
        rng.seed()
    );
    let mut samples: Vec<SeatSamples> = (0..players)
        .map(|_| SeatSamples::with_capacity(games))
        .collect();

    for _ in 0..games {
        let result = simulate_game(spec, &mut rng, players)?;
        for seat in SeatId::all(players) {
            let column = &mut samples[seat.index()];
            column.turns.push(result.turns[seat]);
            column.good_draws.push(result.good_draws[seat]);
            column.bad_draws.push(result.bad_draws[seat]);
        }
        samples[result.winner.index()].wins += 1;
    }

    let per_player = SeatMap::from_vec(
        samples
            .into_iter()
            .map(|column| column.reduce(games))
            .collect(),
    );

    Ok(AggregateStats {
        games,
        players,
        per_player,
    })
}
