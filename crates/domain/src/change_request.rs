use crate::decision::Decision;
use crate::hosted_zone::HostedZoneId;
use crate::record_set::RecordType;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_RECORD_TTL: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Upsert,
    Delete,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Upsert => "UPSERT",
            ChangeAction::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record-set change against a hosted zone.
///
/// Deletes carry the full record (value and TTL included) because the store
/// only removes a record set that matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRequest {
    pub zone_id: HostedZoneId,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub ttl: i64,
    pub value: String,
    pub action: ChangeAction,
}

impl ChangeRequest {
    /// Returns `None` for [`Decision::Ignore`] and when there is no address
    /// to publish or match against.
    pub fn build(
        zone_id: &HostedZoneId,
        dns_name: &str,
        address: Option<&str>,
        decision: Decision,
    ) -> Option<Self> {
        let action = match decision {
            Decision::Ignore => return None,
            Decision::Delete => ChangeAction::Delete,
            Decision::Update => ChangeAction::Upsert,
        };
        let value = address.map(str::trim).filter(|a| !a.is_empty())?;

        Some(Self {
            zone_id: zone_id.clone(),
            name: dns_name.to_string(),
            record_type: RecordType::A,
            ttl: DEFAULT_RECORD_TTL,
            value: value.to_string(),
            action,
        })
    }
}

/// Status the store reported for an accepted change, e.g. `PENDING`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatus(pub String);

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
