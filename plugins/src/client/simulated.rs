use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use csbench_core::api::{
    Account, ApiError, ClientConfig, ControlPlaneClient, Domain, Network, VirtualMachine, VmState,
    Volume,
};

/// Highest resource type id accepted by `update_resource_limit`.
const MAX_RESOURCE_TYPE: u8 = 11;

#[derive(Default)]
struct Store {
    domains: Vec<Domain>,
    accounts: Vec<Account>,
    limits: HashMap<(String, u8), i64>,
    networks: Vec<Network>,
    vms: Vec<VirtualMachine>,
    volumes: Vec<Volume>,
}

impl Store {
    fn domain_exists(&self, id: &str) -> bool {
        self.domains.iter().any(|d| d.id == id)
    }

    /// `root` plus every domain below it.
    fn subtree(&self, root: &str) -> Vec<String> {
        let mut ids = vec![root.to_string()];
        let mut i = 0;
        while i < ids.len() {
            let parent = ids[i].clone();
            ids.extend(
                self.domains
                    .iter()
                    .filter(|d| d.parent_id == parent)
                    .map(|d| d.id.clone()),
            );
            i += 1;
        }
        ids
    }
}

/// In-memory control plane with configurable latency and failure injection.
///
/// Starts with a single root domain whose id is the configured parent domain.
/// Every call sleeps `latency_ms` plus a deterministic jitter in
/// `[0, jitter_ms]`; every `fail_every`-th mutating call is rejected.
pub struct SimulatedClient {
    store: Mutex<Store>,
    latency_ms: u64,
    jitter_ms: u64,
    fail_every: u64,
    calls: AtomicU64,
    mutations: AtomicU64,
}

impl SimulatedClient {
    pub fn new(root_domain_id: &str, cfg: &ClientConfig) -> Self {
        let store = Store {
            domains: vec![Domain {
                id: root_domain_id.to_string(),
                name: "ROOT".to_string(),
                parent_id: String::new(),
            }],
            ..Default::default()
        };

        Self {
            store: Mutex::new(store),
            latency_ms: cfg.latency_ms,
            jitter_ms: cfg.jitter_ms,
            fail_every: cfg.fail_every,
            calls: AtomicU64::new(0),
            mutations: AtomicU64::new(0),
        }
    }

    /// Number of mutating calls received so far, rejected ones included.
    pub fn mutation_calls(&self) -> u64 {
        self.mutations.load(Ordering::SeqCst)
    }

    pub async fn resource_limit(&self, account_id: &str, resource_type: u8) -> Option<i64> {
        let store = self.store.lock().await;
        store
            .limits
            .get(&(account_id.to_string(), resource_type))
            .copied()
    }

    /// Force a VM into `state`, e.g. to model a deployment stuck in Starting.
    pub async fn set_vm_state(&self, vm_id: &str, state: VmState) -> Result<(), ApiError> {
        let mut store = self.store.lock().await;
        let vm = store
            .vms
            .iter_mut()
            .find(|vm| vm.id == vm_id)
            .ok_or_else(|| not_found("vm", vm_id))?;
        vm.state = state;
        Ok(())
    }

    pub async fn volumes(&self) -> Vec<Volume> {
        self.store.lock().await.volumes.clone()
    }

    async fn delay(&self) {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let jitter = if self.jitter_ms == 0 {
            0
        } else {
            n.wrapping_mul(7919) % (self.jitter_ms + 1)
        };
        let total = self.latency_ms + jitter;
        if total > 0 {
            tokio::time::sleep(Duration::from_millis(total)).await;
        }
    }

    /// Simulated latency for a mutating call, then failure injection.
    async fn mutate(&self, op: &str) -> Result<(), ApiError> {
        self.delay().await;
        let n = self.mutations.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_every > 0 && n % self.fail_every == 0 {
            return Err(ApiError::Rejected(format!(
                "{} rejected by simulated control plane (call {})",
                op, n
            )));
        }
        Ok(())
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn not_found(kind: &'static str, id: &str) -> ApiError {
    ApiError::NotFound {
        kind,
        id: id.to_string(),
    }
}

#[async_trait]
impl ControlPlaneClient for SimulatedClient {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn create_domain(&self, name: &str, parent_id: &str) -> Result<Domain, ApiError> {
        self.mutate("createDomain").await?;
        let mut store = self.store.lock().await;
        if !store.domain_exists(parent_id) {
            return Err(not_found("domain", parent_id));
        }
        let domain = Domain {
            id: new_id(),
            name: name.to_string(),
            parent_id: parent_id.to_string(),
        };
        store.domains.push(domain.clone());
        Ok(domain)
    }

    async fn list_sub_domains(&self, parent_id: &str) -> Result<Vec<Domain>, ApiError> {
        self.delay().await;
        let store = self.store.lock().await;
        if !store.domain_exists(parent_id) {
            return Err(not_found("domain", parent_id));
        }
        Ok(store
            .domains
            .iter()
            .filter(|d| d.parent_id == parent_id)
            .cloned()
            .collect())
    }

    async fn delete_domain(&self, id: &str) -> Result<(), ApiError> {
        self.mutate("deleteDomain").await?;
        let mut store = self.store.lock().await;
        match store.domains.iter().find(|d| d.id == id) {
            None => return Err(not_found("domain", id)),
            Some(d) if d.parent_id.is_empty() => {
                return Err(ApiError::Rejected("cannot delete the root domain".to_string()))
            }
            Some(_) => {}
        }

        let doomed = store.subtree(id);
        let owned = |domain_id: &String| doomed.contains(domain_id);
        let gone_accounts: Vec<String> = store
            .accounts
            .iter()
            .filter(|a| owned(&a.domain_id))
            .map(|a| a.id.clone())
            .collect();

        store.domains.retain(|d| !owned(&d.id));
        store.accounts.retain(|a| !owned(&a.domain_id));
        store.limits.retain(|(account, _), _| !gone_accounts.contains(account));
        store.networks.retain(|n| !owned(&n.domain_id));
        store.vms.retain(|vm| !owned(&vm.domain_id));
        store.volumes.retain(|v| !owned(&v.domain_id));
        Ok(())
    }

    async fn create_account(&self, name: &str, domain_id: &str) -> Result<Account, ApiError> {
        self.mutate("createAccount").await?;
        let mut store = self.store.lock().await;
        if !store.domain_exists(domain_id) {
            return Err(not_found("domain", domain_id));
        }
        let account = Account {
            id: new_id(),
            name: name.to_string(),
            domain_id: domain_id.to_string(),
        };
        store.accounts.push(account.clone());
        Ok(account)
    }

    async fn list_accounts(&self, domain_id: &str) -> Result<Vec<Account>, ApiError> {
        self.delay().await;
        let store = self.store.lock().await;
        Ok(store
            .accounts
            .iter()
            .filter(|a| a.domain_id == domain_id)
            .cloned()
            .collect())
    }

    async fn update_resource_limit(
        &self,
        resource_type: u8,
        account: &Account,
        max: i64,
    ) -> Result<(), ApiError> {
        self.mutate("updateResourceLimit").await?;
        if resource_type > MAX_RESOURCE_TYPE {
            return Err(ApiError::Rejected(format!(
                "unknown resource type {}",
                resource_type
            )));
        }
        let mut store = self.store.lock().await;
        if !store.accounts.iter().any(|a| a.id == account.id) {
            return Err(not_found("account", &account.id));
        }
        store
            .limits
            .insert((account.id.clone(), resource_type), max);
        Ok(())
    }

    async fn create_network(&self, name: &str, domain_id: &str) -> Result<Network, ApiError> {
        self.mutate("createNetwork").await?;
        let mut store = self.store.lock().await;
        if !store.domain_exists(domain_id) {
            return Err(not_found("domain", domain_id));
        }
        let network = Network {
            id: new_id(),
            name: name.to_string(),
            domain_id: domain_id.to_string(),
        };
        store.networks.push(network.clone());
        Ok(network)
    }

    async fn list_networks(&self, domain_id: &str) -> Result<Vec<Network>, ApiError> {
        self.delay().await;
        let store = self.store.lock().await;
        Ok(store
            .networks
            .iter()
            .filter(|n| n.domain_id == domain_id)
            .cloned()
            .collect())
    }

    async fn deploy_vm(
        &self,
        name: &str,
        network: &Network,
        account: &str,
    ) -> Result<VirtualMachine, ApiError> {
        self.mutate("deployVirtualMachine").await?;
        let mut store = self.store.lock().await;
        if !store.networks.iter().any(|n| n.id == network.id) {
            return Err(not_found("network", &network.id));
        }
        if !store
            .accounts
            .iter()
            .any(|a| a.name == account && a.domain_id == network.domain_id)
        {
            return Err(not_found("account", account));
        }
        let vm = VirtualMachine {
            id: new_id(),
            name: name.to_string(),
            domain_id: network.domain_id.clone(),
            account: account.to_string(),
            network_id: network.id.clone(),
            state: VmState::Running,
        };
        store.vms.push(vm.clone());
        Ok(vm)
    }

    async fn list_vms(&self, domain_id: &str) -> Result<Vec<VirtualMachine>, ApiError> {
        self.delay().await;
        let store = self.store.lock().await;
        Ok(store
            .vms
            .iter()
            .filter(|vm| vm.domain_id == domain_id)
            .cloned()
            .collect())
    }

    async fn create_volume(
        &self,
        name: &str,
        domain_id: &str,
        account: &str,
    ) -> Result<Volume, ApiError> {
        self.mutate("createVolume").await?;
        let mut store = self.store.lock().await;
        if !store.domain_exists(domain_id) {
            return Err(not_found("domain", domain_id));
        }
        let volume = Volume {
            id: new_id(),
            name: name.to_string(),
            domain_id: domain_id.to_string(),
            account: account.to_string(),
            vm_id: None,
        };
        store.volumes.push(volume.clone());
        Ok(volume)
    }

    async fn attach_volume(&self, volume_id: &str, vm_id: &str) -> Result<Volume, ApiError> {
        self.mutate("attachVolume").await?;
        let mut store = self.store.lock().await;

        let state = store
            .vms
            .iter()
            .find(|vm| vm.id == vm_id)
            .map(|vm| vm.state)
            .ok_or_else(|| not_found("vm", vm_id))?;
        if !state.accepts_volumes() {
            return Err(ApiError::Rejected(format!(
                "vm {} is {}, volumes need Running or Stopped",
                vm_id, state
            )));
        }

        let volume = store
            .volumes
            .iter_mut()
            .find(|v| v.id == volume_id)
            .ok_or_else(|| not_found("volume", volume_id))?;
        if let Some(attached) = &volume.vm_id {
            return Err(ApiError::Rejected(format!(
                "volume {} already attached to {}",
                volume_id, attached
            )));
        }
        volume.vm_id = Some(vm_id.to_string());
        Ok(volume.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn instant(fail_every: u64) -> SimulatedClient {
        SimulatedClient::new(
            "root",
            &ClientConfig {
                latency_ms: 0,
                jitter_ms: 0,
                fail_every,
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_domain_tree() {
        let client = instant(0);
        let a = client.create_domain("a", "root").await.unwrap();
        let b = client.create_domain("b", "root").await.unwrap();
        client.create_domain("a1", &a.id).await.unwrap();

        let names: Vec<String> = client
            .list_sub_domains("root")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(client.list_sub_domains(&b.id).await.unwrap().len(), 0);
        assert_eq!(
            client.list_sub_domains("nope").await.unwrap_err(),
            ApiError::NotFound {
                kind: "domain",
                id: "nope".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fail_every_counts_mutations_only() {
        let client = instant(2);
        assert!(client.create_domain("a", "root").await.is_ok());
        client.list_sub_domains("root").await.unwrap();
        assert!(matches!(
            client.create_domain("b", "root").await,
            Err(ApiError::Rejected(_))
        ));
        assert!(client.create_domain("c", "root").await.is_ok());
        assert_eq!(client.mutation_calls(), 3);
        assert_eq!(client.list_sub_domains("root").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_domain_cascades() {
        let client = instant(0);
        let domain = client.create_domain("d", "root").await.unwrap();
        let child = client.create_domain("c", &domain.id).await.unwrap();
        let account = client.create_account("acct", &child.id).await.unwrap();
        client
            .update_resource_limit(0, &account, -1)
            .await
            .unwrap();
        let network = client.create_network("n", &child.id).await.unwrap();
        client.deploy_vm("vm", &network, "acct").await.unwrap();

        client.delete_domain(&domain.id).await.unwrap();

        assert!(client.list_sub_domains("root").await.unwrap().is_empty());
        assert!(client.list_accounts(&child.id).await.unwrap().is_empty());
        assert!(client.list_vms(&child.id).await.unwrap().is_empty());
        assert_eq!(client.resource_limit(&account.id, 0).await, None);
        assert!(client.delete_domain("root").await.is_err());
    }

    #[tokio::test]
    async fn test_attach_requires_suitable_vm() {
        let client = instant(0);
        let domain = client.create_domain("d", "root").await.unwrap();
        client.create_account("acct", &domain.id).await.unwrap();
        let network = client.create_network("n", &domain.id).await.unwrap();
        let vm = client.deploy_vm("vm", &network, "acct").await.unwrap();
        assert_eq!(vm.state, VmState::Running);

        let volume = client
            .create_volume("vol", &domain.id, "acct")
            .await
            .unwrap();
        client.set_vm_state(&vm.id, VmState::Starting).await.unwrap();
        assert!(client.attach_volume(&volume.id, &vm.id).await.is_err());

        client.set_vm_state(&vm.id, VmState::Stopped).await.unwrap();
        let attached = client.attach_volume(&volume.id, &vm.id).await.unwrap();
        assert_eq!(attached.vm_id.as_deref(), Some(vm.id.as_str()));
        assert!(client.attach_volume(&volume.id, &vm.id).await.is_err());
    }

    #[tokio::test]
    async fn test_deploy_needs_account_in_network_domain() {
        let client = instant(0);
        let domain = client.create_domain("d", "root").await.unwrap();
        let network = client.create_network("n", &domain.id).await.unwrap();
        assert!(matches!(
            client.deploy_vm("vm", &network, "ghost").await,
            Err(ApiError::NotFound { kind: "account", .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_resource_type() {
        let client = instant(0);
        let domain = client.create_domain("d", "root").await.unwrap();
        let account = client.create_account("acct", &domain.id).await.unwrap();
        assert!(client.update_resource_limit(12, &account, -1).await.is_err());
        client
            .update_resource_limit(11, &account, -1)
            .await
            .unwrap();
        assert_eq!(client.resource_limit(&account.id, 11).await, Some(-1));
    }
}
