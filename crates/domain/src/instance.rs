#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceTag {
    pub key: String,
    pub value: String,
}

impl InstanceTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// What the inventory reported about one instance.
///
/// Tags keep the inventory's order and may repeat keys. Addresses are
/// `None` when the inventory reported nothing or an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSnapshot {
    pub instance_id: String,
    pub tags: Vec<InstanceTag>,
    pub public_address: Option<String>,
    pub private_address: Option<String>,
}

impl InstanceSnapshot {
    pub fn new(
        instance_id: impl Into<String>,
        tags: Vec<InstanceTag>,
        public_address: Option<String>,
        private_address: Option<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            tags,
            public_address: non_empty(public_address),
            private_address: non_empty(private_address),
        }
    }

    pub fn tag_keys(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.key.as_str()).collect()
    }
}

fn non_empty(address: Option<String>) -> Option<String> {
    address
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
}
