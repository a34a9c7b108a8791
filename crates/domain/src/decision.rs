use crate::dns_role::DnsRole;
use crate::lifecycle_event::LifecycleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Update,
    Delete,
    Ignore,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Update => "update",
            Decision::Delete => "delete",
            Decision::Ignore => "ignore",
        }
    }
}

/// Public names go away as soon as the instance leaves `running`, since a
/// stopped instance gives up its public address. Private names survive a
/// stop and are only reclaimed on termination.
pub fn decide(state: &LifecycleState, role: DnsRole) -> Decision {
    if state.is_running() {
        return Decision::Update;
    }

    match (role, state) {
        (DnsRole::Public, _) => Decision::Delete,
        (DnsRole::Private, LifecycleState::Terminated) => Decision::Delete,
        (DnsRole::Private, _) => Decision::Ignore,
    }
}
