//! ec2-dns-sync Domain Layer
pub mod change_request;
pub mod config;
pub mod decision;
pub mod dns_role;
pub mod errors;
pub mod hosted_zone;
pub mod instance;
pub mod lifecycle_event;
pub mod record_set;

pub use change_request::{ChangeAction, ChangeRequest, ChangeStatus, DEFAULT_RECORD_TTL};
pub use config::{CliOverrides, Config, ConfigError};
pub use decision::{decide, Decision};
pub use dns_role::{DnsRole, DnsRoleKeys, PRIVATE_DNS_TAG_KEY, PUBLIC_DNS_TAG_KEY};
pub use errors::DomainError;
pub use hosted_zone::{zone_suffix_of, HostedZone, HostedZoneId};
pub use instance::{InstanceSnapshot, InstanceTag};
pub use lifecycle_event::{EventDetail, LifecycleEvent, LifecycleState};
pub use record_set::{RecordSet, RecordType};
