use serde::{Deserialize, Serialize};

/// Options for the bounded worker pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOpts {
    /// Concurrency ceiling: number of tasks executing at the same time
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Show an indicatif completion bar on stderr
    #[serde(default)]
    pub progress_bar: bool,
}

impl Default for ExecutionOpts {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            progress_bar: false,
        }
    }
}

fn default_workers() -> usize {
    10
}
