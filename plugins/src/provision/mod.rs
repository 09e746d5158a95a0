//! Provisioning task sources
//!
//! Each driver discovers the fixtures it builds on, then feeds one task per
//! resource into a [`BenchRun`] batch under its own category. Discovery
//! failures are logged and treated as "nothing found".

mod discover;
mod domain;
mod limits;
mod network;
mod teardown;
mod vm;
mod volume;

use std::sync::Arc;

use uuid::Uuid;

use csbench_core::api::{BatchSummary, BenchRun, ControlPlaneClient, EngineError, ResourceKind};
use csbench_core::config::ProvisionConfig;

pub use domain::create_domains;
pub use limits::{update_limits, RESOURCE_TYPES, UNLIMITED};
pub use network::create_networks;
pub use teardown::{teardown, TeardownSummary};
pub use vm::create_vms;
pub use volume::create_volumes;

pub type SharedClient = Arc<dyn ControlPlaneClient>;

/// Run the driver for `kind` as the next batch of `run`.
pub async fn provision(
    kind: ResourceKind,
    run: &mut BenchRun,
    client: &SharedClient,
    parent_domain_id: &str,
    counts: &ProvisionConfig,
) -> Result<BatchSummary, EngineError> {
    match kind {
        ResourceKind::Domain => {
            create_domains(run, client, parent_domain_id, counts.num_domains).await
        }
        ResourceKind::Limits => update_limits(run, client, parent_domain_id).await,
        ResourceKind::Network => create_networks(run, client, parent_domain_id).await,
        ResourceKind::Vm => {
            create_vms(run, client, parent_domain_id, counts.num_vms_per_network).await
        }
        ResourceKind::Volume => {
            create_volumes(run, client, parent_domain_id, counts.num_volumes_per_vm).await
        }
    }
}

/// `<prefix>-<10 random hex chars>`
pub(crate) fn random_name(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &id[..10])
}
