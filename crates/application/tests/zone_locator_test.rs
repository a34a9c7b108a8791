use ec2_dns_sync_application::services::ZoneLocator;
use ec2_dns_sync_domain::{DomainError, HostedZoneId};
use std::sync::Arc;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_locates_zone_from_name_suffix() {
    let store = MockDnsRecordStore::with_default_zones().await;
    let locator = ZoneLocator::new(Arc::new(store.clone()));

    let zone_id = locator.locate(PUBLIC_DNS_NAME).await.unwrap();

    assert_eq!(zone_id, HostedZoneId::new(PUBLIC_ZONE_ID));
    assert_eq!(store.zone_lookups().await, vec!["example.com".to_string()]);
}

#[tokio::test]
async fn test_requires_exact_zone_name() {
    let store = MockDnsRecordStore::new();
    store.add_zone("/hostedzone/ZSUB", "sub.example.com.").await;
    store.add_zone("/hostedzone/ZAPEX", "example.com.").await;
    let locator = ZoneLocator::new(Arc::new(store));

    let zone_id = locator.locate("server.example.com").await.unwrap();

    assert_eq!(zone_id.as_str(), "ZAPEX");
}

#[tokio::test]
async fn test_first_matching_zone_wins() {
    let store = MockDnsRecordStore::new();
    store.add_zone("/hostedzone/ZFIRST", "example.com.").await;
    store.add_zone("/hostedzone/ZSECOND", "example.com.").await;
    let locator = ZoneLocator::new(Arc::new(store));

    let zone_id = locator.locate("server.example.com").await.unwrap();

    assert_eq!(zone_id.as_str(), "ZFIRST");
}

#[tokio::test]
async fn test_no_matching_zone_is_lookup_error() {
    let store = MockDnsRecordStore::new();
    store.add_zone("/hostedzone/ZOTHER", "example.org.").await;
    let locator = ZoneLocator::new(Arc::new(store));

    let result = locator.locate("server.example.com").await;

    assert!(matches!(result, Err(DomainError::Lookup(_))));
}

#[tokio::test]
async fn test_single_label_name_is_lookup_error() {
    let store = MockDnsRecordStore::with_default_zones().await;
    let locator = ZoneLocator::new(Arc::new(store.clone()));

    let result = locator.locate("localhost").await;

    assert!(matches!(result, Err(DomainError::Lookup(_))));
    assert!(store.zone_lookups().await.is_empty());
}

#[tokio::test]
async fn test_store_failure_propagates_without_retry() {
    let store = MockDnsRecordStore::with_default_zones().await;
    store.fail_zone_lookup("example.com").await;
    let locator = ZoneLocator::new(Arc::new(store.clone()));

    let result = locator.locate(PUBLIC_DNS_NAME).await;

    assert!(matches!(result, Err(DomainError::Lookup(_))));
    assert_eq!(store.zone_lookups().await.len(), 1);
}
