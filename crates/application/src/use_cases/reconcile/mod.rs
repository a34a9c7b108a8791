mod reconcile_instance_dns;
mod report;

pub use reconcile_instance_dns::ReconcileInstanceDnsUseCase;
pub use report::{Outcome, ReconcileReport, TagOutcome};
