use async_trait::async_trait;
use ec2_dns_sync_domain::{
    ChangeRequest, ChangeStatus, DomainError, HostedZone, HostedZoneId, RecordSet,
};

#[async_trait]
pub trait DnsRecordStore: Send + Sync {
    /// Hosted zones the store returns for a by-name lookup of `suffix`, in
    /// store order. The list may contain zones that only sort after `suffix`.
    async fn find_zones_by_domain_suffix(
        &self,
        suffix: &str,
    ) -> Result<Vec<HostedZone>, DomainError>;

    /// Record sets of `zone_id` starting at `name`, in store order.
    async fn list_records(
        &self,
        zone_id: &HostedZoneId,
        name: &str,
    ) -> Result<Vec<RecordSet>, DomainError>;

    /// Fails with [`DomainError::Change`] carrying every cause the store
    /// reported.
    async fn submit_change(&self, request: &ChangeRequest) -> Result<ChangeStatus, DomainError>;
}
