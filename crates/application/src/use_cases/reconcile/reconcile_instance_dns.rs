use ec2_dns_sync_domain::{
    decide, zone_suffix_of, ChangeRequest, Decision, DnsRole, DnsRoleKeys, DomainError,
    HostedZoneId, InstanceSnapshot, LifecycleEvent, LifecycleState,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use super::report::{Outcome, ReconcileReport};
use crate::ports::{DnsRecordStore, InstanceInventory};
use crate::services::{AddressResolver, ZoneLocator};

/// Brings the DNS records named by an instance's tags in line with its
/// lifecycle state.
///
/// Only the instance lookup can fail the whole run. Every later failure is
/// logged and recorded against its tag, and the next tag is still
/// processed.
pub struct ReconcileInstanceDnsUseCase {
    inventory: Arc<dyn InstanceInventory>,
    store: Arc<dyn DnsRecordStore>,
    zone_locator: ZoneLocator,
    address_resolver: AddressResolver,
    role_keys: DnsRoleKeys,
}

impl ReconcileInstanceDnsUseCase {
    pub fn new(inventory: Arc<dyn InstanceInventory>, store: Arc<dyn DnsRecordStore>) -> Self {
        Self::with_role_keys(inventory, store, DnsRoleKeys::default())
    }

    pub fn with_role_keys(
        inventory: Arc<dyn InstanceInventory>,
        store: Arc<dyn DnsRecordStore>,
        role_keys: DnsRoleKeys,
    ) -> Self {
        Self {
            inventory,
            zone_locator: ZoneLocator::new(store.clone()),
            address_resolver: AddressResolver::new(store.clone()),
            store,
            role_keys,
        }
    }

    #[instrument(skip_all, fields(instance_id = %event.instance_id(), state = %event.detail.state))]
    pub async fn execute(&self, event: &LifecycleEvent) -> Result<ReconcileReport, DomainError> {
        if let Ok(json) = serde_json::to_string(event) {
            debug!(event = %json, "Lifecycle event received");
        }

        let instance_id = event.instance_id();
        let state = event.state();

        info!(instance_id = %instance_id, "Getting tags");
        let snapshot = self
            .inventory
            .describe_instance(instance_id)
            .await
            .map_err(|e| {
                error!(instance_id = %instance_id, error = %e, "Failed to describe instance");
                e
            })?;

        info!(tag_keys = %snapshot.tag_keys().join(";"), "Got tag keys");
        info!("Checking whether to update, delete or ignore");

        let mut report = ReconcileReport::new(instance_id);
        let mut zones: HashMap<String, HostedZoneId> = HashMap::new();

        for tag in &snapshot.tags {
            let Some(role) = self.role_keys.role_for(&tag.key) else {
                continue;
            };
            let dns_name = tag.value.as_str();
            info!(key = %tag.key, role = %role, dns_name = %dns_name, "DNS tag found");

            let outcome = self
                .reconcile_tag(&state, role, &snapshot, dns_name, &mut zones)
                .await;
            report.record(role, dns_name, outcome);
        }

        info!(
            instance_id = %instance_id,
            submitted = report.submitted(),
            skipped = report.skipped(),
            failed = report.failed(),
            "Reconciliation finished"
        );
        Ok(report)
    }

    async fn reconcile_tag(
        &self,
        state: &LifecycleState,
        role: DnsRole,
        snapshot: &InstanceSnapshot,
        dns_name: &str,
        zones: &mut HashMap<String, HostedZoneId>,
    ) -> Outcome {
        let decision = decide(state, role);
        match decision {
            Decision::Ignore => {
                info!(state = %state, instance_id = %snapshot.instance_id, "Ignoring");
                return Outcome::Ignored;
            }
            Decision::Update => {
                info!(dns_name = %dns_name, "Creating / updating record set")
            }
            Decision::Delete => info!(dns_name = %dns_name, "Deleting record set"),
        }

        let zone_id = match self.zone_for(dns_name, zones).await {
            Ok(zone_id) => zone_id,
            Err(e) => {
                error!(dns_name = %dns_name, error = %e, "Failed to get hosted zone id");
                return Outcome::Failed {
                    reasons: e.causes(),
                };
            }
        };

        let address = match self
            .address_resolver
            .resolve(role, snapshot, &zone_id, dns_name)
            .await
        {
            Ok(address) => address,
            Err(e) => {
                error!(dns_name = %dns_name, zone_id = %zone_id, error = %e, "Failed to look up existing record set");
                return Outcome::Failed {
                    reasons: e.causes(),
                };
            }
        };

        let Some(request) = ChangeRequest::build(&zone_id, dns_name, address.as_deref(), decision)
        else {
            warn!(dns_name = %dns_name, "Couldn't update, skipping this one");
            return Outcome::AlreadyAbsent;
        };

        info!(
            action = %request.action,
            dns_name = %request.name,
            value = %request.value,
            zone_id = %request.zone_id,
            "Change request created"
        );
        if let Ok(json) = serde_json::to_string(&request) {
            debug!(request = %json, "Submitting change request");
        }

        match self.store.submit_change(&request).await {
            Ok(status) => {
                info!(dns_name = %dns_name, status = %status, "Result");
                Outcome::Submitted {
                    action: request.action,
                    status: status.0,
                }
            }
            Err(e) => {
                let reasons = e.causes();
                for cause in &reasons {
                    error!(dns_name = %dns_name, cause = %cause, "Record set change failed");
                }
                Outcome::Failed { reasons }
            }
        }
    }

    async fn zone_for(
        &self,
        dns_name: &str,
        zones: &mut HashMap<String, HostedZoneId>,
    ) -> Result<HostedZoneId, DomainError> {
        let cache_key = zone_suffix_of(dns_name).map(|s| s.to_ascii_lowercase());
        if let Some(zone_id) = cache_key.as_ref().and_then(|k| zones.get(k)) {
            return Ok(zone_id.clone());
        }

        let zone_id = self.zone_locator.locate(dns_name).await?;
        if let Some(key) = cache_key {
            zones.insert(key, zone_id.clone());
        }
        Ok(zone_id)
    }
}
