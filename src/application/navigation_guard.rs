//! NavigationGuard - keeps the latest input snapshots and reconciles the
//! current location with the section the user is entitled to.
//!
//! Every `observe_*` call replaces one snapshot and re-evaluates on the
//! caller's thread. A redirect is a single fire-and-forget `replace`; the
//! location change it causes comes back through `observe_location` and
//! evaluates to a stay.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainEvent, EventEnvelope, StateMachine};
use crate::domain::navigation::{
    decide, Decision, GuardInputs, GuardPhase, GuardPhaseChanged, GuardRule, LaunchState,
    Location, NavigationRedirected, RouteClass, RouteTable, Section, SessionState,
};
use crate::ports::{EventPublisher, Navigator};

/// Stateful access guard.
pub struct NavigationGuard {
    routes: RouteTable,
    navigator: Arc<dyn Navigator>,
    events: Option<Arc<dyn EventPublisher>>,
    inputs: GuardInputs,
    location: Option<Location>,
    phase: GuardPhase,
    last_decision: Decision,
    redirects: u64,
}

impl NavigationGuard {
    pub fn new(routes: RouteTable, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            routes,
            navigator,
            events: None,
            inputs: GuardInputs::default(),
            location: None,
            phase: GuardPhase::Hydrating,
            last_decision: Decision::Withheld,
            redirects: 0,
        }
    }

    /// Announce redirects and phase changes on the given bus.
    pub fn with_event_publisher(mut self, events: Arc<dyn EventPublisher>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn observe_launch(&mut self, launch: LaunchState) -> Decision {
        let previous = self.inputs.launch;
        if !previous.loading && previous.completed && !launch.loading && !launch.completed {
            warn!("Launch flag reset while running; onboarding will be shown again");
        }
        self.inputs.launch = launch;
        self.evaluate()
    }

    pub fn observe_session(&mut self, session: SessionState) -> Decision {
        self.inputs.session = session;
        self.evaluate()
    }

    pub fn observe_location(&mut self, location: Location) -> Decision {
        self.location = Some(location);
        self.evaluate()
    }

    /// Decide against the latest snapshots and redirect if needed.
    pub fn evaluate(&mut self) -> Decision {
        let Some(location) = self.location.clone() else {
            debug!("No location observed yet, withholding");
            self.last_decision = Decision::Withheld;
            return Decision::Withheld;
        };

        let current = self.routes.classify(&location);
        let decision = decide(&self.inputs, current);
        self.track_phase();

        match decision {
            Decision::Withheld => {
                debug!(
                    launch_loading = self.inputs.launch.loading,
                    session_loading = self.inputs.session.loading,
                    "Inputs hydrating, withholding"
                );
            }
            Decision::Stay { reason } => {
                debug!(location = %location, reason = ?reason, "Location consistent");
            }
            Decision::Redirect { to, rule } => self.redirect(&location, current, to, rule),
        }

        self.last_decision = decision;
        decision
    }

    fn redirect(&mut self, location: &Location, current: RouteClass, to: Section, rule: GuardRule) {
        let route = self.routes.entry(to).clone();
        info!(
            from = %location,
            to = %route,
            section = %to,
            rule = %rule,
            "Redirecting"
        );
        self.navigator.replace(&route);
        self.redirects += 1;

        self.publish(&NavigationRedirected::new(current, to, rule, route.as_str()));
    }

    fn track_phase(&mut self) {
        let Some(next) = GuardPhase::settled(&self.inputs) else {
            return;
        };
        if next == self.phase {
            return;
        }

        match self.phase.transition_to(next) {
            Ok(_) => debug!(from = %self.phase, to = %next, "Guard phase changed"),
            // Only an external reset of the launch flag gets here.
            Err(e) => warn!(error = %e, "Guard phase left its lifecycle"),
        }

        let event = GuardPhaseChanged::new(self.phase, next);
        self.phase = next;
        self.publish(&event);
    }

    fn publish<E: DomainEvent + Serialize>(&self, event: &E) {
        let Some(events) = &self.events else {
            return;
        };
        let result = EventEnvelope::from_event(event).and_then(|envelope| events.publish(envelope));
        if let Err(e) = result {
            warn!(event_type = event.event_type(), error = %e, "Failed to publish guard event");
        }
    }

    pub fn inputs(&self) -> &GuardInputs {
        &self.inputs
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    pub fn last_decision(&self) -> Decision {
        self.last_decision
    }

    /// Redirects issued over the guard's lifetime.
    pub fn redirect_count(&self) -> u64 {
        self.redirects
    }

    /// True while any input has not resolved yet.
    pub fn is_hydrating(&self) -> bool {
        self.location.is_none() || self.inputs.is_loading()
    }
}
