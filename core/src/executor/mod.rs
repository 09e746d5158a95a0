//! Bounded-concurrency task execution
//!
//! ```text
//! driver ── submit(task) ──▶ unbounded queue ──▶ W workers ──▶ Vec<Outcome> per worker
//!                                                              │
//!                                   wait() ◀── join + concat ──┘
//! ```
//!
//! Each worker owns the outcomes it produces; nothing is shared until
//! `wait` joins them, so no lock guards the result set.

mod pool;
mod progress;
pub mod types;

pub use pool::WorkerPool;
pub use progress::{report_interval, CompletionMonitor, SubmissionProgress};
pub use types::{BatchSummary, BoxTask, ExecutionOpts, Outcome, Task};
