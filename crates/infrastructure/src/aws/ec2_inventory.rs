use async_trait::async_trait;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::Instance;
use aws_sdk_ec2::Client;
use ec2_dns_sync_application::ports::InstanceInventory;
use ec2_dns_sync_domain::{DomainError, InstanceSnapshot, InstanceTag};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

use super::sdk::AwsSdkLoader;

/// [`InstanceInventory`] backed by EC2 `DescribeInstances`.
pub struct Ec2InstanceInventory {
    loader: Arc<AwsSdkLoader>,
    client: OnceCell<Client>,
}

impl Ec2InstanceInventory {
    /// The client is built on the first lookup.
    pub fn new(loader: Arc<AwsSdkLoader>) -> Self {
        Self {
            loader,
            client: OnceCell::new(),
        }
    }

    pub fn with_client(loader: Arc<AwsSdkLoader>, client: Client) -> Self {
        Self {
            loader,
            client: OnceCell::from(client),
        }
    }

    async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                let sdk = self.loader.sdk_config().await;
                let mut builder = aws_sdk_ec2::config::Builder::from(sdk);
                if let Some(endpoint) = &self.loader.settings().ec2_endpoint {
                    builder = builder.endpoint_url(endpoint);
                }
                Client::from_conf(builder.build())
            })
            .await
    }
}

#[async_trait]
impl InstanceInventory for Ec2InstanceInventory {
    async fn describe_instance(&self, instance_id: &str) -> Result<InstanceSnapshot, DomainError> {
        let output = self
            .client()
            .await
            .describe_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| {
                DomainError::Lookup(format!(
                    "DescribeInstances for {} failed: {}",
                    instance_id,
                    DisplayErrorContext(&e)
                ))
            })?;

        let instance = output
            .reservations()
            .iter()
            .flat_map(|reservation| reservation.instances())
            .next()
            .ok_or_else(|| DomainError::Lookup(format!("Instance {} not found", instance_id)))?;

        let snapshot = snapshot_from_instance(instance_id, instance);
        debug!(
            instance_id = %instance_id,
            tags = snapshot.tags.len(),
            public_address = ?snapshot.public_address,
            private_address = ?snapshot.private_address,
            "Instance described"
        );
        Ok(snapshot)
    }
}

/// Tags without a key are dropped; a missing value becomes an empty string.
pub fn snapshot_from_instance(instance_id: &str, instance: &Instance) -> InstanceSnapshot {
    let tags = instance
        .tags()
        .iter()
        .filter_map(|tag| {
            let key = tag.key()?;
            Some(InstanceTag::new(key, tag.value().unwrap_or_default()))
        })
        .collect();

    InstanceSnapshot::new(
        instance.instance_id().unwrap_or(instance_id),
        tags,
        instance.public_ip_address().map(str::to_string),
        instance.private_ip_address().map(str::to_string),
    )
}
