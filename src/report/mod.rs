//! Markdown report rendering across board variants and player counts.
//!
//! Thin presentation glue over `AggregateStats`: no file I/O and no
//! simulation here, the caller runs the batches and hands over the
//! results.

use std::fmt::Write;

use crate::stats::AggregateStats;

/// Batch results for one board variant at each requested player count.
#[derive(Clone, Debug)]
pub struct VariantReport {
    /// Display name (the spec's `name`, or the file stem).
    pub name: String,
    /// Source file name shown under the variant heading.
    pub source: String,
    /// One entry per player count, in the order they were run.
    pub runs: Vec<AggregateStats>,
}

const TABLE_HEADER: &str = "| Seat | Win % | Avg Turns | Turns Std Dev | Turns P50 | Turns P90 \
     | Avg Good Draws | Avg Bad Draws | Avg Total Draws | Total Draws Std Dev \
     | Total Draws P50 | Total Draws P90 |";

const TABLE_RULE: &str =
    "| --- | --- | --- | --- | --- | --- | --- | --- | --- | --- | --- | --- |";

/// Render the full markdown report.
#[must_use]
pub fn render_markdown(variants: &[VariantReport], games: usize, seed: u64, date: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Simulation Report ({date})");
    out.push('\n');
    let _ = writeln!(
        out,
        "Runs: {} games per variant, fixed seed {seed}.",
        group_digits(games)
    );
    out.push('\n');
    out.push_str(
        "Assumptions: Decks reshuffle when they run out. \
         Game ends when any player reaches the end.\n\n",
    );

    for variant in variants {
        let _ = writeln!(out, "## {}", variant.name);
        out.push('\n');
        let _ = writeln!(out, "JSON: `{}`", variant.source);
        out.push('\n');

        for stats in &variant.runs {
            let _ = writeln!(out, "### Players: {}", stats.players);
            out.push('\n');
            out.push_str(TABLE_HEADER);
            out.push('\n');
            out.push_str(TABLE_RULE);
            out.push('\n');

            for (seat, s) in stats.per_player.iter() {
                let _ = writeln!(
                    out,
                    "| Player {idx} | {win:.1}% | {turns:.2} | {turns_sd:.2} | {tp50} | {tp90} \
                     | {good:.2} | {bad:.2} | {total:.2} | {total_sd:.2} | {dp50} | {dp90} |",
                    idx = seat.index() + 1,
                    win = s.win_rate * 100.0,
                    turns = s.avg_turns,
                    turns_sd = s.turns_stdev,
                    tp50 = s.turns_p50,
                    tp90 = s.turns_p90,
                    good = s.avg_good_draws,
                    bad = s.avg_bad_draws,
                    total = s.avg_total_draws,
                    total_sd = s.total_draws_stdev,
                    dp50 = s.total_draws_p50,
                    dp90 = s.total_draws_p90,
                );
            }

            out.push('\n');
        }
    }

    out
}

/// Format an integer with comma-grouped thousands (50000 -> "50,000").
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
