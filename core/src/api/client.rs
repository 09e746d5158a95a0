use async_trait::async_trait;

use super::resources::{Account, Domain, Network, VirtualMachine, Volume};
use crate::error::ApiError;

/// The control-plane calls used by the provisioning drivers.
///
/// Implementations are shared across worker tasks behind an `Arc`.
#[async_trait]
pub trait ControlPlaneClient: Send + Sync {
    fn name(&self) -> &str;

    async fn create_domain(&self, name: &str, parent_id: &str) -> Result<Domain, ApiError>;

    /// Direct children of `parent_id`.
    async fn list_sub_domains(&self, parent_id: &str) -> Result<Vec<Domain>, ApiError>;

    /// Delete a domain together with everything it owns.
    async fn delete_domain(&self, id: &str) -> Result<(), ApiError>;

    async fn create_account(&self, name: &str, domain_id: &str) -> Result<Account, ApiError>;

    async fn list_accounts(&self, domain_id: &str) -> Result<Vec<Account>, ApiError>;

    /// Set the maximum of one resource type for an account. `-1` is unlimited.
    async fn update_resource_limit(
        &self,
        resource_type: u8,
        account: &Account,
        max: i64,
    ) -> Result<(), ApiError>;

    async fn create_network(&self, name: &str, domain_id: &str) -> Result<Network, ApiError>;

    async fn list_networks(&self, domain_id: &str) -> Result<Vec<Network>, ApiError>;

    async fn deploy_vm(
        &self,
        name: &str,
        network: &Network,
        account: &str,
    ) -> Result<VirtualMachine, ApiError>;

    async fn list_vms(&self, domain_id: &str) -> Result<Vec<VirtualMachine>, ApiError>;

    async fn create_volume(
        &self,
        name: &str,
        domain_id: &str,
        account: &str,
    ) -> Result<Volume, ApiError>;

    async fn attach_volume(&self, volume_id: &str, vm_id: &str) -> Result<Volume, ApiError>;
}
