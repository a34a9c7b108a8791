use super::Collaborators;
use ec2_dns_sync_application::use_cases::ReconcileInstanceDnsUseCase;
use ec2_dns_sync_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub reconcile: Arc<ReconcileInstanceDnsUseCase>,
}

impl UseCases {
    pub fn new(collaborators: &Collaborators, config: &Config) -> Self {
        Self {
            reconcile: Arc::new(ReconcileInstanceDnsUseCase::with_role_keys(
                collaborators.inventory.clone(),
                collaborators.store.clone(),
                config.tags.role_keys(),
            )),
        }
    }
}
