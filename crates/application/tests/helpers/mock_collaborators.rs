#![allow(dead_code)]

use async_trait::async_trait;
use ec2_dns_sync_application::ports::{DnsRecordStore, InstanceInventory};
use ec2_dns_sync_domain::{
    ChangeRequest, ChangeStatus, DomainError, HostedZone, HostedZoneId, InstanceSnapshot,
    InstanceTag, RecordSet, RecordType,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const INSTANCE_ID: &str = "i-0123456789abcdef0";
pub const PUBLIC_DNS_NAME: &str = "server.example.com";
pub const PRIVATE_DNS_NAME: &str = "server.internal.corp";
pub const PUBLIC_IP: &str = "50.1.1.1";
pub const PRIVATE_IP: &str = "10.0.0.123";
pub const PUBLIC_ZONE_ID: &str = "ZPUBLIC123";
pub const PRIVATE_ZONE_ID: &str = "ZPRIVATE456";

pub fn tagged_snapshot(public_ip: Option<&str>, private_ip: Option<&str>) -> InstanceSnapshot {
    InstanceSnapshot::new(
        INSTANCE_ID,
        vec![
            InstanceTag::new("Name", "web-server"),
            InstanceTag::new("PublicDNS", PUBLIC_DNS_NAME),
            InstanceTag::new("PrivateDNS", PRIVATE_DNS_NAME),
        ],
        public_ip.map(str::to_string),
        private_ip.map(str::to_string),
    )
}

#[derive(Clone)]
pub struct MockInstanceInventory {
    snapshots: Arc<RwLock<HashMap<String, InstanceSnapshot>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockInstanceInventory {
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_snapshot(snapshot: InstanceSnapshot) -> Self {
        let mut map = HashMap::new();
        map.insert(snapshot.instance_id.clone(), snapshot);
        Self {
            snapshots: Arc::new(RwLock::new(map)),
            ..Self::new()
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }
}

impl Default for MockInstanceInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InstanceInventory for MockInstanceInventory {
    async fn describe_instance(&self, instance_id: &str) -> Result<InstanceSnapshot, DomainError> {
        self.calls.write().await.push(instance_id.to_string());

        if *self.should_fail.read().await {
            return Err(DomainError::Lookup("Mock inventory failed".to_string()));
        }

        self.snapshots
            .read()
            .await
            .get(instance_id)
            .cloned()
            .ok_or_else(|| DomainError::Lookup(format!("Instance {} not found", instance_id)))
    }
}

#[derive(Clone)]
pub struct MockDnsRecordStore {
    zones: Arc<RwLock<Vec<HostedZone>>>,
    records: Arc<RwLock<HashMap<(String, String), Vec<RecordSet>>>>,
    failing_zone_suffixes: Arc<RwLock<HashSet<String>>>,
    failing_record_lookups: Arc<RwLock<bool>>,
    change_failures: Arc<RwLock<HashMap<String, Vec<String>>>>,
    zone_lookups: Arc<RwLock<Vec<String>>>,
    record_lookups: Arc<RwLock<Vec<(String, String)>>>,
    submitted: Arc<RwLock<Vec<ChangeRequest>>>,
}

impl MockDnsRecordStore {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(RwLock::new(Vec::new())),
            records: Arc::new(RwLock::new(HashMap::new())),
            failing_zone_suffixes: Arc::new(RwLock::new(HashSet::new())),
            failing_record_lookups: Arc::new(RwLock::new(false)),
            change_failures: Arc::new(RwLock::new(HashMap::new())),
            zone_lookups: Arc::new(RwLock::new(Vec::new())),
            record_lookups: Arc::new(RwLock::new(Vec::new())),
            submitted: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Store with the public and private zones of the shared fixtures, both
    /// already holding an `A` record for their name.
    pub async fn with_default_zones() -> Self {
        let store = Self::new();
        store
            .add_zone(&format!("/hostedzone/{}", PUBLIC_ZONE_ID), "example.com.")
            .await;
        store
            .add_zone(&format!("/hostedzone/{}", PRIVATE_ZONE_ID), "internal.corp.")
            .await;
        store
            .set_records(PUBLIC_ZONE_ID, PUBLIC_DNS_NAME, vec![PUBLIC_IP])
            .await;
        store
            .set_records(PRIVATE_ZONE_ID, PRIVATE_DNS_NAME, vec![PRIVATE_IP])
            .await;
        store
    }

    pub async fn add_zone(&self, raw_id: &str, name: &str) {
        self.zones.write().await.push(HostedZone::new(raw_id, name));
    }

    pub async fn set_records(&self, zone_id: &str, name: &str, values: Vec<&str>) {
        let record = RecordSet::new(
            format!("{}.", name),
            RecordType::A,
            values.into_iter().map(str::to_string).collect(),
        );
        self.records
            .write()
            .await
            .insert((zone_id.to_string(), name.to_string()), vec![record]);
    }

    pub async fn clear_records(&self) {
        self.records.write().await.clear();
    }

    pub async fn fail_zone_lookup(&self, suffix: &str) {
        self.failing_zone_suffixes
            .write()
            .await
            .insert(suffix.to_string());
    }

    pub async fn fail_record_lookups(&self) {
        *self.failing_record_lookups.write().await = true;
    }

    pub async fn fail_change(&self, name: &str, causes: Vec<&str>) {
        self.change_failures.write().await.insert(
            name.to_string(),
            causes.into_iter().map(str::to_string).collect(),
        );
    }

    pub async fn zone_lookups(&self) -> Vec<String> {
        self.zone_lookups.read().await.clone()
    }

    pub async fn record_lookups(&self) -> Vec<(String, String)> {
        self.record_lookups.read().await.clone()
    }

    pub async fn submitted(&self) -> Vec<ChangeRequest> {
        self.submitted.read().await.clone()
    }

    pub async fn submitted_for(&self, name: &str) -> Vec<ChangeRequest> {
        self.submitted
            .read()
            .await
            .iter()
            .filter(|r| r.name == name)
            .cloned()
            .collect()
    }
}

impl Default for MockDnsRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsRecordStore for MockDnsRecordStore {
    async fn find_zones_by_domain_suffix(
        &self,
        suffix: &str,
    ) -> Result<Vec<HostedZone>, DomainError> {
        self.zone_lookups.write().await.push(suffix.to_string());

        if self.failing_zone_suffixes.read().await.contains(suffix) {
            return Err(DomainError::Lookup(format!(
                "Mock zone lookup failed for {}",
                suffix
            )));
        }

        Ok(self.zones.read().await.clone())
    }

    async fn list_records(
        &self,
        zone_id: &HostedZoneId,
        name: &str,
    ) -> Result<Vec<RecordSet>, DomainError> {
        self.record_lookups
            .write()
            .await
            .push((zone_id.as_str().to_string(), name.to_string()));

        if *self.failing_record_lookups.read().await {
            return Err(DomainError::Lookup("Mock record lookup failed".to_string()));
        }

        Ok(self
            .records
            .read()
            .await
            .get(&(zone_id.as_str().to_string(), name.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn submit_change(&self, request: &ChangeRequest) -> Result<ChangeStatus, DomainError> {
        if let Some(causes) = self.change_failures.read().await.get(&request.name) {
            return Err(DomainError::Change(causes.clone()));
        }

        self.submitted.write().await.push(request.clone());
        Ok(ChangeStatus("PENDING".to_string()))
    }
}
