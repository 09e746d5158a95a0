use std::time::Duration;

use serde::Serialize;

/// Result of executing a single task
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outcome {
    /// Whether the task's remote call(s) succeeded
    pub success: bool,

    /// Wall time of the task itself, in seconds (queue wait excluded)
    pub duration_secs: f64,

    /// Stands in for a task whose worker was lost; the duration is zero.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub lost: bool,
}

impl Outcome {
    pub fn new(success: bool, duration: Duration) -> Self {
        Self {
            success,
            duration_secs: duration.as_secs_f64(),
            lost: false,
        }
    }

    /// Placeholder for an outcome that never came back.
    pub fn lost() -> Self {
        Self {
            success: false,
            duration_secs: 0.0,
            lost: true,
        }
    }

    pub fn succeeded(duration: Duration) -> Self {
        Self::new(true, duration)
    }

    pub fn failed(duration: Duration) -> Self {
        Self::new(false, duration)
    }
}

/// Counts reported once a batch has drained
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub category: String,
    pub submitted: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Failed outcomes padded in for lost workers, counted in `failed`
    pub lost: usize,
    pub elapsed_secs: f64,
}
