use csbench_core::api::{BatchSummary, BenchRun, EngineError, ResourceKind};

use super::{random_name, SharedClient};

/// Create `count` domains under `parent_domain_id`, each with one account.
///
/// A task only succeeds when both calls do.
pub async fn create_domains(
    run: &mut BenchRun,
    client: &SharedClient,
    parent_domain_id: &str,
    count: usize,
) -> Result<BatchSummary, EngineError> {
    let mut batch = run.batch(ResourceKind::Domain.category(), "Created", "domains", count)?;

    for _ in 0..count {
        let client = client.clone();
        let parent = parent_domain_id.to_string();
        batch.submit(move || async move {
            let domain = client
                .create_domain(&random_name("Domain"), &parent)
                .await?;
            client
                .create_account(&random_name("Account"), &domain.id)
                .await?;
            Ok(())
        });
    }

    batch.finish().await
}
