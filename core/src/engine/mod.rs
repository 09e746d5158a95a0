//! Benchmark run orchestration: one [`BenchRun`] per invocation, one
//! [`Batch`] per resource category.

mod run;

pub use run::{Batch, BenchRun};
