//! Latency statistics
//!
//! Outcomes are split per category into all / successful / failed samples,
//! every duration rounded to milliseconds first, then each non-empty
//! sample is reduced to a [`StatRow`].

mod aggregate;
mod summary;

pub use aggregate::{CategoryResults, Samples};
pub use summary::{compute_percentile, compute_row, median, round3, StatRow};
