use std::collections::HashMap;

use csbench_core::api::{BatchSummary, BenchRun, EngineError, ResourceKind};

use super::{discover, random_name, SharedClient};

/// Deploy `per_network` VMs into every network of the parent's sub-domains,
/// owned by the account of the network's domain.
///
/// Networks whose domain has no account are skipped.
pub async fn create_vms(
    run: &mut BenchRun,
    client: &SharedClient,
    parent_domain_id: &str,
    per_network: usize,
) -> Result<BatchSummary, EngineError> {
    let domains = discover::sub_domains(client.as_ref(), parent_domain_id).await;
    let owners: HashMap<String, String> = discover::accounts(client.as_ref(), &domains)
        .await
        .into_iter()
        .map(|a| (a.domain_id, a.name))
        .collect();

    tracing::info!("Fetching networks for subdomains in domain {}", parent_domain_id);
    let (networks, orphaned): (Vec<_>, Vec<_>) = discover::networks(client.as_ref(), &domains)
        .await
        .into_iter()
        .partition(|n| owners.contains_key(&n.domain_id));
    if !orphaned.is_empty() {
        tracing::warn!("Skipping {} networks without an owning account", orphaned.len());
    }

    let mut batch = run.batch(
        ResourceKind::Vm.category(),
        "Created",
        "VMs",
        networks.len() * per_network,
    )?;

    for network in networks {
        let account = owners[&network.domain_id].clone();
        for _ in 0..per_network {
            let client = client.clone();
            let network = network.clone();
            let account = account.clone();
            batch.submit(move || async move {
                client
                    .deploy_vm(&random_name("VM"), &network, &account)
                    .await?;
                Ok(())
            });
        }
    }

    batch.finish().await
}
