use std::ops::RangeInclusive;

use csbench_core::api::{BatchSummary, BenchRun, EngineError, ResourceKind};

use super::{discover, SharedClient};

/// Resource type ids whose limits are lifted.
pub const RESOURCE_TYPES: RangeInclusive<u8> = 0..=11;

pub const UNLIMITED: i64 = -1;

/// Lift every resource limit of each account in the parent's sub-domains.
///
/// A task stops at the first rejected update.
pub async fn update_limits(
    run: &mut BenchRun,
    client: &SharedClient,
    parent_domain_id: &str,
) -> Result<BatchSummary, EngineError> {
    let domains = discover::sub_domains(client.as_ref(), parent_domain_id).await;
    let accounts = discover::accounts(client.as_ref(), &domains).await;

    let mut batch = run.batch(
        ResourceKind::Limits.category(),
        "Updated limits for",
        "accounts",
        accounts.len(),
    )?;

    for account in accounts {
        let client = client.clone();
        batch.submit(move || async move {
            for resource_type in RESOURCE_TYPES {
                client
                    .update_resource_limit(resource_type, &account, UNLIMITED)
                    .await?;
            }
            Ok(())
        });
    }

    batch.finish().await
}
