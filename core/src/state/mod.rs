//! # Run state
//!
//! One provisioning run moves through a fixed sequence of phases:
//!
//! ```text
//! Idle → Submitting ⇄ Draining → Aggregating → Rendered
//! ```
//!
//! `Draining → Submitting` is the only back-edge and starts the next
//! category. Aggregation never begins while tasks are still in flight.

pub mod transitions;
pub mod types;

pub use transitions::{StateTransition, TransitionError};
pub use types::RunPhase;
