use crate::ports::DnsRecordStore;
use ec2_dns_sync_domain::{DnsRole, DomainError, HostedZoneId, InstanceSnapshot};
use std::sync::Arc;
use tracing::info;

/// Picks the address to publish, or to match against when deleting.
///
/// A terminated instance often no longer reports its addresses, so the
/// currently published value is read back from the store instead.
pub struct AddressResolver {
    store: Arc<dyn DnsRecordStore>,
}

impl AddressResolver {
    pub fn new(store: Arc<dyn DnsRecordStore>) -> Self {
        Self { store }
    }

    /// `Ok(None)` means the record is already gone.
    pub async fn resolve(
        &self,
        role: DnsRole,
        snapshot: &InstanceSnapshot,
        zone_id: &HostedZoneId,
        dns_name: &str,
    ) -> Result<Option<String>, DomainError> {
        if let Some(address) = role.address_of(snapshot) {
            return Ok(Some(address.to_string()));
        }

        info!(
            role = %role,
            zone_id = %zone_id,
            dns_name = %dns_name,
            "No ip address provided, looking up by hosted zone and dns name"
        );

        let records = self.store.list_records(zone_id, dns_name).await?;
        let address = records
            .first()
            .and_then(|record| record.first_value())
            .map(str::to_string);

        if address.is_none() {
            info!(
                zone_id = %zone_id,
                dns_name = %dns_name,
                "No record set found, looks like it has been deleted already"
            );
        }

        Ok(address)
    }
}
