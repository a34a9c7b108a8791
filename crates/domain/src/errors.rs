use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Record set change failed: {}", .0.join("; "))]
    Change(Vec<String>),

    #[error("Invalid lifecycle event: {0}")]
    InvalidEvent(String),
}

impl DomainError {
    pub fn change(cause: impl Into<String>) -> Self {
        DomainError::Change(vec![cause.into()])
    }

    /// Every underlying cause, in the order the store reported them.
    pub fn causes(&self) -> Vec<String> {
        match self {
            DomainError::Change(causes) => causes.clone(),
            other => vec![other.to_string()],
        }
    }
}
