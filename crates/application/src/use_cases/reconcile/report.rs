use ec2_dns_sync_domain::{ChangeAction, DnsRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Submitted { action: ChangeAction, status: String },
    Ignored,
    /// No address anywhere, so there was nothing left to change.
    AlreadyAbsent,
    Failed { reasons: Vec<String> },
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Submitted { .. } => "submitted",
            Outcome::Ignored => "ignored",
            Outcome::AlreadyAbsent => "already_absent",
            Outcome::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOutcome {
    pub role: DnsRole,
    pub dns_name: String,
    pub outcome: Outcome,
}

/// What happened to every DNS-role tag of one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub instance_id: String,
    pub outcomes: Vec<TagOutcome>,
}

impl ReconcileReport {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, role: DnsRole, dns_name: &str, outcome: Outcome) {
        self.outcomes.push(TagOutcome {
            role,
            dns_name: dns_name.to_string(),
            outcome,
        });
    }

    pub fn submitted(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Submitted { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Ignored | Outcome::AlreadyAbsent))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|t| pred(&t.outcome)).count()
    }
}
