use async_trait::async_trait;
use aws_sdk_route53::error::{DisplayErrorContext, SdkError};
use aws_sdk_route53::operation::change_resource_record_sets::ChangeResourceRecordSetsError;
use aws_sdk_route53::types::{
    Change, ChangeAction as SdkChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet,
    RrType,
};
use aws_sdk_route53::Client;
use ec2_dns_sync_application::ports::DnsRecordStore;
use ec2_dns_sync_domain::{
    ChangeAction, ChangeRequest, ChangeStatus, DomainError, HostedZone, HostedZoneId, RecordSet,
    RecordType,
};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

use super::sdk::AwsSdkLoader;

/// [`DnsRecordStore`] backed by Route 53.
pub struct Route53RecordStore {
    loader: Arc<AwsSdkLoader>,
    client: OnceCell<Client>,
}

impl Route53RecordStore {
    /// The client is built on the first call.
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
                let mut builder = aws_sdk_route53::config::Builder::from(sdk);
                if let Some(endpoint) = &self.loader.settings().route53_endpoint {
                    builder = builder.endpoint_url(endpoint);
                }
                Client::from_conf(builder.build())
            })
            .await
    }

    fn log_responses(&self) -> bool {
        self.loader.settings().log_responses
    }
}

#[async_trait]
impl DnsRecordStore for Route53RecordStore {
    async fn find_zones_by_domain_suffix(
        &self,
        suffix: &str,
    ) -> Result<Vec<HostedZone>, DomainError> {
        let output = self
            .client()
            .await
            .list_hosted_zones_by_name()
            .dns_name(suffix)
            .send()
            .await
            .map_err(|e| {
                DomainError::Lookup(format!(
                    "ListHostedZonesByName for {} failed: {}",
                    suffix,
                    DisplayErrorContext(&e)
                ))
            })?;

        if self.log_responses() {
            debug!(response = ?output, "ListHostedZonesByName response");
        }

        Ok(output
            .hosted_zones()
            .iter()
            .map(|zone| HostedZone::new(zone.id(), zone.name()))
            .collect())
    }

    async fn list_records(
        &self,
        zone_id: &HostedZoneId,
        name: &str,
    ) -> Result<Vec<RecordSet>, DomainError> {
        let output = self
            .client()
            .await
            .list_resource_record_sets()
            .hosted_zone_id(zone_id.as_str())
            .start_record_name(name)
            .send()
            .await
            .map_err(|e| {
                DomainError::Lookup(format!(
                    "ListResourceRecordSets for {} in {} failed: {}",
                    name,
                    zone_id,
                    DisplayErrorContext(&e)
                ))
            })?;

        if self.log_responses() {
            debug!(response = ?output, "ListResourceRecordSets response");
        }

        Ok(output
            .resource_record_sets()
            .iter()
            .map(|set| {
                RecordSet::new(
                    set.name(),
                    RecordType::from(set.r#type().as_str()),
                    set.resource_records()
                        .iter()
                        .map(|record| record.value().to_string())
                        .collect(),
                )
            })
            .collect())
    }

    async fn submit_change(&self, request: &ChangeRequest) -> Result<ChangeStatus, DomainError> {
        let batch = change_batch_for(request)?;

        let output = self
            .client()
            .await
            .change_resource_record_sets()
            .hosted_zone_id(request.zone_id.as_str())
            .change_batch(batch)
            .send()
            .await
            .map_err(change_error)?;

        if self.log_responses() {
            debug!(response = ?output, "ChangeResourceRecordSets response");
        }

        let status = output
            .change_info()
            .map(|info| info.status().as_str().to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string());
        Ok(ChangeStatus(status))
    }
}

/// Single-change batch for `request`, always carrying the record value so a
/// delete matches the published record exactly.
pub fn change_batch_for(request: &ChangeRequest) -> Result<ChangeBatch, DomainError> {
    let action = match request.action {
        ChangeAction::Upsert => SdkChangeAction::Upsert,
        ChangeAction::Delete => SdkChangeAction::Delete,
    };

    let record = ResourceRecord::builder()
        .value(request.value.as_str())
        .build()
        .map_err(|e| DomainError::change(e.to_string()))?;

    let record_set = ResourceRecordSet::builder()
        .name(request.name.as_str())
        .r#type(RrType::from(request.record_type.as_str()))
        .ttl(request.ttl)
        .resource_records(record)
        .build()
        .map_err(|e| DomainError::change(e.to_string()))?;

    let change = Change::builder()
        .action(action)
        .resource_record_set(record_set)
        .build()
        .map_err(|e| DomainError::change(e.to_string()))?;

    ChangeBatch::builder()
        .changes(change)
        .build()
        .map_err(|e| DomainError::change(e.to_string()))
}

/// Route 53 reports every rejected change of a batch separately; each one
/// becomes a cause of its own.
pub fn change_error(err: SdkError<ChangeResourceRecordSetsError>) -> DomainError {
    if let Some(ChangeResourceRecordSetsError::InvalidChangeBatch(invalid)) =
        err.as_service_error()
    {
        let messages = invalid.messages();
        if !messages.is_empty() {
            return DomainError::Change(messages.to_vec());
        }
    }
    DomainError::change(DisplayErrorContext(&err).to_string())
}
