use crate::dns_role::{DnsRoleKeys, PRIVATE_DNS_TAG_KEY, PUBLIC_DNS_TAG_KEY};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagsConfig {
    #[serde(default = "default_public_dns_key")]
    pub public_dns_key: String,

    #[serde(default = "default_private_dns_key")]
    pub private_dns_key: String,
}

impl TagsConfig {
    pub fn role_keys(&self) -> DnsRoleKeys {
        DnsRoleKeys::new(
            self.public_dns_key.trim().to_string(),
            self.private_dns_key.trim().to_string(),
        )
    }
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            public_dns_key: default_public_dns_key(),
            private_dns_key: default_private_dns_key(),
        }
    }
}

fn default_public_dns_key() -> String {
    PUBLIC_DNS_TAG_KEY.to_string()
}

fn default_private_dns_key() -> String {
    PRIVATE_DNS_TAG_KEY.to_string()
}
