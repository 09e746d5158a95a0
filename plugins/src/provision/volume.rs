use csbench_core::api::{BatchSummary, BenchRun, EngineError, ResourceKind};

use super::{discover, random_name, SharedClient};

/// Create and attach `per_vm` data volumes for every Running or Stopped VM
/// in the parent's sub-domains.
pub async fn create_volumes(
    run: &mut BenchRun,
    client: &SharedClient,
    parent_domain_id: &str,
    per_vm: usize,
) -> Result<BatchSummary, EngineError> {
    tracing::info!("Fetching all VMs in subdomains for domain {}", parent_domain_id);
    let domains = discover::sub_domains(client.as_ref(), parent_domain_id).await;
    let (vms, unsuitable): (Vec<_>, Vec<_>) = discover::vms(client.as_ref(), &domains)
        .await
        .into_iter()
        .partition(|vm| vm.state.accepts_volumes());
    if !unsuitable.is_empty() {
        tracing::warn!("Found {} VMs in unsuitable state", unsuitable.len());
    }

    let mut batch = run.batch(
        ResourceKind::Volume.category(),
        "Created",
        "volumes",
        vms.len() * per_vm,
    )?;

    for vm in vms {
        for _ in 0..per_vm {
            let client = client.clone();
            let vm = vm.clone();
            batch.submit(move || async move {
                let volume = client
                    .create_volume(&random_name("Volume"), &vm.domain_id, &vm.account)
                    .await?;
                client.attach_volume(&volume.id, &vm.id).await?;
                Ok(())
            });
        }
    }

    batch.finish().await
}
