mod ec2_inventory;
mod route53_store;
mod sdk;

pub use ec2_inventory::{snapshot_from_instance, Ec2InstanceInventory};
pub use route53_store::{change_batch_for, change_error, Route53RecordStore};
pub use sdk::AwsSdkLoader;
