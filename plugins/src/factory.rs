use std::sync::Arc;

use anyhow::Result;

use csbench_core::api::{AppConfig, ClientMode, ControlPlaneClient, Profile};

use crate::client::SimulatedClient;

pub fn build_client(cfg: &AppConfig, profile: &Profile) -> Result<Arc<dyn ControlPlaneClient>> {
    let client: Arc<dyn ControlPlaneClient> = match cfg.client.mode {
        ClientMode::Simulated => Arc::new(SimulatedClient::new(
            &cfg.cloud.parent_domain_id,
            &cfg.client,
        )),
    };

    tracing::info!(
        "Using {} client under domain {} with profile '{}'",
        client.name(),
        cfg.cloud.parent_domain_id,
        profile.name
    );
    Ok(client)
}
