use csbench_core::api::ControlPlaneClient;

use super::discover;

/// Counts from a teardown pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeardownSummary {
    pub found: usize,
    pub deleted: usize,
    pub failed: usize,
}

/// Delete every sub-domain of the parent together with its resources.
///
/// Deletes run one after another and are not benchmarked.
pub async fn teardown(client: &dyn ControlPlaneClient, parent_domain_id: &str) -> TeardownSummary {
    let domains = discover::sub_domains(client, parent_domain_id).await;
    tracing::info!("Deleting {} domains", domains.len());

    let mut summary = TeardownSummary {
        found: domains.len(),
        ..Default::default()
    };
    for domain in &domains {
        match client.delete_domain(&domain.id).await {
            Ok(()) => {
                tracing::debug!("Deleted domain {} ({})", domain.name, domain.id);
                summary.deleted += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to delete domain with id {}: {}", domain.id, e);
                summary.failed += 1;
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::testing::{client, run, ROOT};
    use crate::provision::{create_domains, create_networks, SharedClient};

    #[tokio::test]
    async fn test_removes_every_sub_domain() {
        let sim = client(0);
        let shared: SharedClient = sim.clone();
        let mut run = run(4);
        create_domains(&mut run, &shared, ROOT, 4).await.unwrap();
        create_networks(&mut run, &shared, ROOT).await.unwrap();

        let summary = teardown(sim.as_ref(), ROOT).await;
        assert_eq!(
            summary,
            TeardownSummary {
                found: 4,
                deleted: 4,
                failed: 0
            }
        );
        assert!(sim.list_sub_domains(ROOT).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_counted_not_fatal() {
        // Calls 1-6 create three domains with accounts; delete calls are 7, 8, 9.
        let sim = client(8);
        let shared: SharedClient = sim.clone();
        let mut run = run(1);
        create_domains(&mut run, &shared, ROOT, 3).await.unwrap();

        let summary = teardown(sim.as_ref(), ROOT).await;
        assert_eq!(summary.found, 3);
        assert_eq!(summary.deleted, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(sim.list_sub_domains(ROOT).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_parent_deletes_nothing() {
        let sim = client(0);
        assert_eq!(teardown(sim.as_ref(), "nope").await, TeardownSummary::default());
    }
}
