use ec2_dns_sync_domain::config::AwsConfig;
use ec2_dns_sync_infrastructure::aws::{AwsSdkLoader, Ec2InstanceInventory, Route53RecordStore};
use std::sync::Arc;

pub struct Collaborators {
    pub inventory: Arc<Ec2InstanceInventory>,
    pub store: Arc<Route53RecordStore>,
}

impl Collaborators {
    /// Nothing touches the network until the first call.
    pub fn new(config: &AwsConfig) -> Self {
        let loader = Arc::new(AwsSdkLoader::new(config.clone()));
        Self {
            inventory: Arc::new(Ec2InstanceInventory::new(loader.clone())),
            store: Arc::new(Route53RecordStore::new(loader)),
        }
    }
}
