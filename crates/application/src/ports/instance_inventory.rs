use async_trait::async_trait;
use ec2_dns_sync_domain::{DomainError, InstanceSnapshot};

#[async_trait]
pub trait InstanceInventory: Send + Sync {
    /// Tags and current addresses of one instance.
    ///
    /// Fails with [`DomainError::Lookup`] when the instance is unknown or the
    /// call itself fails.
    async fn describe_instance(&self, instance_id: &str) -> Result<InstanceSnapshot, DomainError>;
}
