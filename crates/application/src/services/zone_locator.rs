use crate::ports::DnsRecordStore;
use ec2_dns_sync_domain::{zone_suffix_of, DomainError, HostedZoneId};
use std::sync::Arc;
use tracing::{debug, info};

/// Maps a DNS name to the hosted zone that owns it.
pub struct ZoneLocator {
    store: Arc<dyn DnsRecordStore>,
}

impl ZoneLocator {
    pub fn new(store: Arc<dyn DnsRecordStore>) -> Self {
        Self { store }
    }

    /// The zone is the one named exactly after `dns_name` minus its leftmost
    /// label. No retries.
    pub async fn locate(&self, dns_name: &str) -> Result<HostedZoneId, DomainError> {
        info!(dns_name = %dns_name, "Getting hosted zone id");

        let suffix = zone_suffix_of(dns_name).ok_or_else(|| {
            DomainError::Lookup(format!("{} has no parent zone", dns_name))
        })?;

        let zones = self.store.find_zones_by_domain_suffix(&suffix).await?;
        debug!(suffix = %suffix, candidates = zones.len(), "Hosted zones listed");

        let zone_id = zones
            .iter()
            .find(|zone| zone.has_name(&suffix))
            .map(|zone| zone.id())
            .ok_or_else(|| DomainError::Lookup(format!("No hosted zone named {}", suffix)))?;

        info!(dns_name = %dns_name, zone_id = %zone_id, "Hosted zone resolved");
        Ok(zone_id)
    }
}
