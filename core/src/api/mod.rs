//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `csbench_core::api` instead of reaching into internal modules.

mod client;
mod resources;

pub use client::ControlPlaneClient;
pub use resources::{Account, Domain, Network, VirtualMachine, VmState, Volume};

pub use crate::config::{
    load_default, load_from_path, validate_create, validate_teardown, AppConfig, ClientConfig,
    ClientMode, CreatePlan, CreateRequest, LoggingConfig, Profile, ResourceKind,
    ResourceSelection, TeardownPlan,
};
pub use crate::engine::{Batch, BenchRun};
pub use crate::error::{ApiError, CliError, ConfigError, EngineError};
pub use crate::executor::{BatchSummary, ExecutionOpts, Outcome};
pub use crate::report::{Delivery, ReportFormat};
pub use crate::stats::StatRow;
