use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use super::types::{AppConfig, Profile};
use crate::error::ConfigError;
use crate::executor::ExecutionOpts;
use crate::report::ReportFormat;

/// Resource categories a `create` run can provision, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Domain,
    Limits,
    Network,
    Vm,
    Volume,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Domain,
        ResourceKind::Limits,
        ResourceKind::Network,
        ResourceKind::Vm,
        ResourceKind::Volume,
    ];

    /// Category label used in the report rows.
    pub fn category(self) -> &'static str {
        match self {
            ResourceKind::Domain => "domain",
            ResourceKind::Limits => "limits",
            ResourceKind::Network => "network",
            ResourceKind::Vm => "vm",
            ResourceKind::Volume => "volume",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// Which resource flags were passed to `create`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceSelection {
    pub domain: bool,
    pub limits: bool,
    pub network: bool,
    pub vm: bool,
    pub volume: bool,
}

impl ResourceSelection {
    pub fn kinds(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                ResourceKind::Domain => self.domain,
                ResourceKind::Limits => self.limits,
                ResourceKind::Network => self.network,
                ResourceKind::Vm => self.vm,
                ResourceKind::Volume => self.volume,
            })
            .collect()
    }
}

/// Raw `create` arguments before validation.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub resources: ResourceSelection,
    pub workers: Option<usize>,
    pub format: String,
    pub output: Option<PathBuf>,
    pub profile: String,
}

/// A validated `create` invocation.
#[derive(Debug, Clone)]
pub struct CreatePlan {
    pub resources: Vec<ResourceKind>,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub opts: ExecutionOpts,
    pub profile: Profile,
    pub parent_domain_id: String,
}

#[derive(Debug, Clone)]
pub struct TeardownPlan {
    pub profile: Profile,
    pub parent_domain_id: String,
}

/// Check a `create` request against the loaded configuration.
///
/// Runs before any task is submitted; the first problem found is returned.
pub fn validate_create(cfg: &AppConfig, req: &CreateRequest) -> Result<CreatePlan, ConfigError> {
    let resources = req.resources.kinds();
    if resources.is_empty() {
        return Err(ConfigError::NoResourceSelected);
    }

    let format = ReportFormat::from_str(&req.format)?;

    let workers = req.workers.unwrap_or(cfg.engine.workers);
    if workers == 0 {
        return Err(ConfigError::InvalidWorkers(workers));
    }

    let profile = cfg.profile(&req.profile)?.clone();
    let parent_domain_id = parent_domain(cfg)?;

    Ok(CreatePlan {
        resources,
        format,
        output: req.output.clone(),
        opts: ExecutionOpts {
            workers,
            progress_bar: cfg.engine.progress_bar,
        },
        profile,
        parent_domain_id,
    })
}

pub fn validate_teardown(cfg: &AppConfig, profile: &str) -> Result<TeardownPlan, ConfigError> {
    Ok(TeardownPlan {
        profile: cfg.profile(profile)?.clone(),
        parent_domain_id: parent_domain(cfg)?,
    })
}

fn parent_domain(cfg: &AppConfig) -> Result<String, ConfigError> {
    let id = cfg.cloud.parent_domain_id.trim();
    if id.is_empty() {
        return Err(ConfigError::Invalid(
            "cloud.parent_domain_id must be set".to_string(),
        ));
    }
    Ok(id.to_string())
}
