//! Numeric summaries over per-game sample values.
//!
//! Percentiles use the nearest-rank method: index `floor(n × p)` into
//! the ascending-sorted samples, no interpolation. This is biased for
//! small `n`; callers that care should run enough games.

/// Arithmetic mean.
#[must_use]
pub fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`).
#[must_use]
pub fn std_dev(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|&v| {
            let d = f64::from(v) - m;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Nearest-rank percentile of ascending-sorted `sorted`.
///
/// `p` is a fraction in `[0, 1)`; the result is the element at index
/// `floor(n × p)`.
#[must_use]
pub fn percentile(sorted: &[u32], p: f64) -> u32 {
    debug_assert!(!sorted.is_empty());
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let rank = (sorted.len() as f64 * p) as usize;
    sorted[rank.min(sorted.len() - 1)]
}
