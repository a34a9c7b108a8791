mod dns_record_store;
mod instance_inventory;

pub use dns_record_store::DnsRecordStore;
pub use instance_inventory::InstanceInventory;
