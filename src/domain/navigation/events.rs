//! Events the guard publishes when it acts.

use serde::{Deserialize, Serialize};

use super::{GuardPhase, GuardRule, RouteClass, Section};
use crate::domain::foundation::{DomainEvent, EventId, Timestamp};

/// The guard replaced the current route with a section's entry route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRedirected {
    pub event_id: EventId,
    pub from: RouteClass,
    pub to: Section,
    pub rule: GuardRule,
    pub route: String,
    pub redirected_at: Timestamp,
}

impl NavigationRedirected {
    pub const EVENT_TYPE: &'static str = "navigation.redirected.v1";

    pub fn new(from: RouteClass, to: Section, rule: GuardRule, route: impl Into<String>) -> Self {
        Self {
            event_id: EventId::new(),
            from,
            to,
            rule,
            route: route.into(),
            redirected_at: Timestamp::now(),
        }
    }
}

impl DomainEvent for NavigationRedirected {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn occurred_at(&self) -> Timestamp {
        self.redirected_at
    }

    fn event_id(&self) -> EventId {
        self.event_id.clone()
    }
}

/// The settled inputs moved the guard into a new phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardPhaseChanged {
    pub event_id: EventId,
    pub from: GuardPhase,
    pub to: GuardPhase,
    pub changed_at: Timestamp,
}

impl GuardPhaseChanged {
    pub const EVENT_TYPE: &'static str = "navigation.phase_changed.v1";

    pub fn new(from: GuardPhase, to: GuardPhase) -> Self {
        Self {
            event_id: EventId::new(),
            from,
            to,
            changed_at: Timestamp::now(),
        }
    }
}

impl DomainEvent for GuardPhaseChanged {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn occurred_at(&self) -> Timestamp {
        self.changed_at
    }

    fn event_id(&self) -> EventId {
        self.event_id.clone()
    }
}
