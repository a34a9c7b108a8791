pub mod reconcile;

pub use reconcile::{Outcome, ReconcileInstanceDnsUseCase, ReconcileReport, TagOutcome};
