use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reported state of an instance at the time of the notification.
///
/// Anything other than the three states the handler reacts to is kept
/// verbatim in [`LifecycleState::Other`] and treated as "not running".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Running,
    Stopping,
    Terminated,
    Other(String),
}

impl LifecycleState {
    pub fn as_str(&self) -> &str {
        match self {
            LifecycleState::Running => "running",
            LifecycleState::Stopping => "stopping",
            LifecycleState::Terminated => "terminated",
            LifecycleState::Other(s) => s.as_str(),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, LifecycleState::Running)
    }
}

impl From<&str> for LifecycleState {
    fn from(s: &str) -> Self {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "running" => LifecycleState::Running,
            "stopping" => LifecycleState::Stopping,
            "terminated" => LifecycleState::Terminated,
            _ => LifecycleState::Other(normalized),
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    #[serde(rename = "instance-id")]
    pub instance_id: String,
    pub state: String,
}

/// EC2 instance state-change notification.
///
/// Only `detail` drives behaviour; the envelope fields are carried for
/// logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LifecycleEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    pub detail: EventDetail,
}

impl LifecycleEvent {
    pub fn new(instance_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            version: None,
            id: None,
            detail_type: None,
            source: None,
            account: None,
            time: None,
            region: None,
            resources: Vec::new(),
            detail: EventDetail {
                instance_id: instance_id.into(),
                state: state.into(),
            },
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let event: Self =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidEvent(e.to_string()))?;
        if event.detail.instance_id.trim().is_empty() {
            return Err(DomainError::InvalidEvent(
                "detail.instance-id cannot be empty".to_string(),
            ));
        }
        Ok(event)
    }

    pub fn instance_id(&self) -> &str {
        &self.detail.instance_id
    }

    pub fn state(&self) -> LifecycleState {
        LifecycleState::from(self.detail.state.as_str())
    }
}
