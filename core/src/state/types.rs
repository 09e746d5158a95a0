use serde::Serialize;

/// Phase of a single provisioning run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunPhase {
    /// Nothing submitted yet
    Idle,
    /// Tasks of the current category are being handed to the pool
    Submitting,
    /// Blocked on the pool until every submitted task has an outcome
    Draining,
    /// Outcomes are being reduced into statistics rows
    Aggregating,
    /// Report written, run is over
    Rendered,
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunPhase::Idle => "idle",
            RunPhase::Submitting => "submitting",
            RunPhase::Draining => "draining",
            RunPhase::Aggregating => "aggregating",
            RunPhase::Rendered => "rendered",
        };
        f.write_str(name)
    }
}
