use crate::instance::InstanceSnapshot;
use std::fmt;

pub const PUBLIC_DNS_TAG_KEY: &str = "PublicDNS";
pub const PRIVATE_DNS_TAG_KEY: &str = "PrivateDNS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsRole {
    Public,
    Private,
}

impl DnsRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsRole::Public => "public",
            DnsRole::Private => "private",
        }
    }

    /// Address the instance currently reports for this role.
    pub fn address_of<'a>(&self, snapshot: &'a InstanceSnapshot) -> Option<&'a str> {
        match self {
            DnsRole::Public => snapshot.public_address.as_deref(),
            DnsRole::Private => snapshot.private_address.as_deref(),
        }
    }
}

impl fmt::Display for DnsRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag keys that mark an instance tag as a managed DNS name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRoleKeys {
    pub public: String,
    pub private: String,
}

impl DnsRoleKeys {
    pub fn new(public: impl Into<String>, private: impl Into<String>) -> Self {
        Self {
            public: public.into(),
            private: private.into(),
        }
    }

    pub fn role_for(&self, tag_key: &str) -> Option<DnsRole> {
        if tag_key == self.public {
            Some(DnsRole::Public)
        } else if tag_key == self.private {
            Some(DnsRole::Private)
        } else {
            None
        }
    }
}

impl Default for DnsRoleKeys {
    fn default() -> Self {
        Self::new(PUBLIC_DNS_TAG_KEY, PRIVATE_DNS_TAG_KEY)
    }
}
