use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use csbench_core::api::{CreateRequest, ResourceSelection};
use csbench_core::config::DEFAULT_PROFILE;

#[derive(Parser, Debug)]
#[command(
    name = "csbench",
    version,
    about = "Provision cloud fixtures at scale and report per-call latency"
)]
pub struct Args {
    /// TOML configuration file. Defaults to ./csbench.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create resources concurrently and report call latencies
    Create(CreateArgs),
    /// Delete every sub-domain of the parent domain
    Teardown(TeardownArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CreateArgs {
    /// Create domains, each with one account
    #[arg(long)]
    pub domain: bool,

    /// Lift resource limits of every account to -1
    #[arg(long)]
    pub limits: bool,

    /// Create one shared network per domain
    #[arg(long)]
    pub network: bool,

    /// Deploy VMs into every network
    #[arg(long)]
    pub vm: bool,

    /// Create and attach volumes to every VM
    #[arg(long)]
    pub volume: bool,

    /// Concurrency ceiling. Overrides `[engine].workers`.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Report format: csv, tsv or table.
    #[arg(long, default_value = "table")]
    pub format: String,

    /// Also write the report to this file.
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_PROFILE)]
    pub profile: String,
}

impl CreateArgs {
    pub fn to_request(&self) -> CreateRequest {
        CreateRequest {
            resources: ResourceSelection {
                domain: self.domain,
                limits: self.limits,
                network: self.network,
                vm: self.vm,
                volume: self.volume,
            },
            workers: self.workers,
            format: self.format.clone(),
            output: self.output.clone(),
            profile: self.profile.clone(),
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TeardownArgs {
    #[arg(long, default_value = DEFAULT_PROFILE)]
    pub profile: String,
}
