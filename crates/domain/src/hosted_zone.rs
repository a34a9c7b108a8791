use serde::Serialize;
use std::fmt;

/// Bare hosted zone identifier, e.g. `Z0123456789ABC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HostedZoneId(String);

impl HostedZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds an id from the store's raw form, dropping any path prefix
    /// (`/hostedzone/Z123` becomes `Z123`).
    pub fn from_raw(raw: &str) -> Self {
        let bare = raw
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(raw);
        Self(bare.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostedZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A hosted zone as the store lists it, id still in its raw form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    pub raw_id: String,
    pub name: String,
}

impl HostedZone {
    pub fn new(raw_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            raw_id: raw_id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> HostedZoneId {
        HostedZoneId::from_raw(&self.raw_id)
    }

    /// Zone names are compared without the root dot and without case.
    pub fn has_name(&self, suffix: &str) -> bool {
        normalize(&self.name) == normalize(suffix)
    }
}

/// Every label of `dns_name` except the leftmost one
/// (`server.example.com` gives `example.com`).
///
/// Returns `None` when nothing remains after dropping that label.
pub fn zone_suffix_of(dns_name: &str) -> Option<String> {
    let name = dns_name.trim().trim_end_matches('.');
    let (_, suffix) = name.split_once('.')?;
    if suffix.is_empty() {
        return None;
    }
    Some(suffix.to_string())
}

fn normalize(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}
