use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordType {
    A,
    Other(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::Other(s) => s.as_str(),
        }
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "A" => RecordType::A,
            other => RecordType::Other(other.to_string()),
        }
    }
}

/// A record set as listed by the DNS store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub name: String,
    pub record_type: RecordType,
    pub values: Vec<String>,
}

impl RecordSet {
    pub fn new(name: impl Into<String>, record_type: RecordType, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            values,
        }
    }

    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}
