use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::executor::ExecutionOpts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub cloud: CloudConfig,

    #[serde(default)]
    pub provision: ProvisionConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub engine: ExecutionOpts,

    #[serde(default = "default_profiles")]
    pub profiles: Vec<Profile>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            cloud: CloudConfig::default(),
            provision: ProvisionConfig::default(),
            client: ClientConfig::default(),
            engine: ExecutionOpts::default(),
            profiles: default_profiles(),
        }
    }
}

impl AppConfig {
    /// Look up a credential profile by name.
    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))
    }
}

fn default_profiles() -> Vec<Profile> {
    vec![Profile::named(DEFAULT_PROFILE)]
}

pub const DEFAULT_PROFILE: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stdout.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, append to `directory/file_name`.
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "csbench_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Directory for the log file. Empty or unset means the working directory.
    #[serde(default)]
    pub directory: Option<String>,

    #[serde(default = "default_logging_file_name")]
    pub file_name: String,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

fn default_logging_file_name() -> String {
    "csmetrics.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
            file_name: default_logging_file_name(),
        }
    }
}

/// Where provisioning happens on the control plane.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Every provisioned domain is created under this one.
    #[serde(default)]
    pub parent_domain_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionConfig {
    #[serde(default = "default_num_domains")]
    pub num_domains: usize,

    #[serde(default = "default_per_parent")]
    pub num_vms_per_network: usize,

    #[serde(default = "default_per_parent")]
    pub num_volumes_per_vm: usize,
}

fn default_num_domains() -> usize {
    10
}

fn default_per_parent() -> usize {
    1
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            num_domains: default_num_domains(),
            num_vms_per_network: default_per_parent(),
            num_volumes_per_vm: default_per_parent(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientMode {
    #[default]
    Simulated,
}

/// Control-plane client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub mode: ClientMode,

    /// Base latency added to every simulated call.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Upper bound of the extra per-call latency.
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,

    /// Reject every n-th mutating call. 0 disables.
    #[serde(default)]
    pub fail_every: u64,
}

fn default_latency_ms() -> u64 {
    50
}

fn default_jitter_ms() -> u64 {
    25
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: ClientMode::default(),
            latency_ms: default_latency_ms(),
            jitter_ms: default_jitter_ms(),
            fail_every: 0,
        }
    }
}

/// A user role the run acts as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
}

impl Profile {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
