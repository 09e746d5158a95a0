use csbench_core::api::{Account, ControlPlaneClient, Domain, Network, VirtualMachine};

pub(crate) async fn sub_domains(client: &dyn ControlPlaneClient, parent_id: &str) -> Vec<Domain> {
    tracing::info!("Fetching subdomains for domain {}", parent_id);
    client
        .list_sub_domains(parent_id)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to list subdomains of {}: {}", parent_id, e);
            Vec::new()
        })
}

pub(crate) async fn accounts(client: &dyn ControlPlaneClient, domains: &[Domain]) -> Vec<Account> {
    let mut out = Vec::new();
    for domain in domains {
        match client.list_accounts(&domain.id).await {
            Ok(accounts) => out.extend(accounts),
            Err(e) => tracing::warn!("Failed to list accounts of domain {}: {}", domain.id, e),
        }
    }
    out
}

pub(crate) async fn networks(client: &dyn ControlPlaneClient, domains: &[Domain]) -> Vec<Network> {
    let mut out = Vec::new();
    for domain in domains {
        match client.list_networks(&domain.id).await {
            Ok(networks) => out.extend(networks),
            Err(e) => tracing::warn!("Failed to list networks of domain {}: {}", domain.id, e),
        }
    }
    out
}

pub(crate) async fn vms(
    client: &dyn ControlPlaneClient,
    domains: &[Domain],
) -> Vec<VirtualMachine> {
    let mut out = Vec::new();
    for domain in domains {
        match client.list_vms(&domain.id).await {
            Ok(vms) => out.extend(vms),
            Err(e) => tracing::warn!("Error listing VMs of domain {}: {}", domain.id, e),
        }
    }
    out
}
