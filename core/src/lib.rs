//! csbench core: bounded-concurrency provisioning, latency statistics and
//! report rendering for cloud control-plane benchmarks.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod executor;
pub mod report;
pub mod state;
pub mod stats;
