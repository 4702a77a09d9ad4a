//! Batch aggregation and distributional statistics.

pub mod aggregate;
pub mod summary;

pub use aggregate::{run_batch, AggregateStats, SeatStats};
pub use summary::{mean, percentile, std_dev};
