mod address_resolver;
mod zone_locator;

pub use address_resolver::AddressResolver;
pub use zone_locator::ZoneLocator;
