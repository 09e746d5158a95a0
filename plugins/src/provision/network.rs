use csbench_core::api::{BatchSummary, BenchRun, EngineError, ResourceKind};

use super::{discover, random_name, SharedClient};

/// One shared network per sub-domain of the parent.
pub async fn create_networks(
    run: &mut BenchRun,
    client: &SharedClient,
    parent_domain_id: &str,
) -> Result<BatchSummary, EngineError> {
    let domains = discover::sub_domains(client.as_ref(), parent_domain_id).await;

    let mut batch = run.batch(
        ResourceKind::Network.category(),
        "Created",
        "networks",
        domains.len(),
    )?;

    for domain in domains {
        let client = client.clone();
        batch.submit(move || async move {
            client
                .create_network(&random_name("Network"), &domain.id)
                .await?;
            Ok(())
        });
    }

    batch.finish().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::create_domains;
    use crate::provision::testing::{client, run, ROOT};
    use csbench_core::api::ControlPlaneClient;

    #[tokio::test]
    async fn test_one_network_per_domain() {
        let sim = client(0);
        let shared: SharedClient = sim.clone();
        let mut run = run(4);
        create_domains(&mut run, &shared, ROOT, 5).await.unwrap();

        let summary = create_networks(&mut run, &shared, ROOT).await.unwrap();
        assert_eq!(summary.submitted, 5);
        assert_eq!(summary.succeeded, 5);

        for domain in sim.list_sub_domains(ROOT).await.unwrap() {
            assert_eq!(sim.list_networks(&domain.id).await.unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_failed_discovery_submits_nothing() {
        let sim = client(0);
        let shared: SharedClient = sim.clone();
        let mut run = run(2);

        let summary = create_networks(&mut run, &shared, "unknown-parent")
            .await
            .unwrap();
        assert_eq!(summary.submitted, 0);
        assert!(run.results().get("network").unwrap().is_empty());
    }
}
