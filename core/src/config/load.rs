use std::path::Path;

use super::types::AppConfig;
use crate::error::ConfigError;

/// Looked up in the working directory by [`load_default`].
pub const DEFAULT_CONFIG_FILE: &str = "csbench.toml";

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut cfg = toml::from_str::<AppConfig>(&s)?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

/// `./csbench.toml` when present, built-in defaults otherwise.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let local_config = Path::new(DEFAULT_CONFIG_FILE);
    if local_config.exists() {
        return load_from_path(local_config);
    }

    let mut cfg = AppConfig::default();
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

/// Environment variables win over the file.
fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("CSBENCH_PARENT_DOMAIN_ID") {
        cfg.cloud.parent_domain_id = v;
    }
    if let Some(v) = non_empty("CSBENCH_LOG_DIR") {
        cfg.logging.directory = Some(v);
    }
}
