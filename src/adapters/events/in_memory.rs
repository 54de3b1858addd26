//! In-memory event bus.
//!
//! Delivers synchronously on the publisher's thread and keeps every envelope
//! for later inspection. Each guard and each test gets its own instance.
//!
//! Lock poisoning only happens if a handler panicked mid-delivery, so those
//! locks are `expect`ed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

type Handlers = HashMap<String, Vec<Arc<dyn EventHandler>>>;

/// Capturing, synchronous event bus.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// let guard = NavigationGuard::new(routes, router).with_event_publisher(bus.clone());
///
/// assert!(bus.has_event(NavigationRedirected::EVENT_TYPE));
/// ```
#[derive(Default)]
pub struct InMemoryEventBus {
    handlers: RwLock<Handlers>,
    log: Mutex<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every envelope published so far, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.log().clone()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.log()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.log().len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.log().iter().any(|e| e.event_type == event_type)
    }

    /// Forget captured envelopes. Subscriptions stay.
    pub fn clear(&self) {
        self.log().clear();
    }

    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers
            .read()
            .expect("InMemoryEventBus: handlers lock poisoned")
            .get(event_type)
            .map_or(0, Vec::len)
    }

    fn log(&self) -> std::sync::MutexGuard<'_, Vec<EventEnvelope>> {
        self.log.lock().expect("InMemoryEventBus: log lock poisoned")
    }
}

impl EventPublisher for InMemoryEventBus {
    fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.log().push(event.clone());

        // Snapshot so handlers may subscribe or publish while being called.
        let targets = self
            .handlers
            .read()
            .expect("InMemoryEventBus: handlers lock poisoned")
            .get(&event.event_type)
            .cloned()
            .unwrap_or_default();

        let failed: Vec<String> = targets
            .iter()
            .filter_map(|handler| {
                handler.handle(&event).err().map(|e| {
                    warn!(
                        handler = handler.name(),
                        event_type = %event.event_type,
                        error = %e,
                        "Event handler failed"
                    );
                    handler.name().to_string()
                })
            })
            .collect();

        if failed.is_empty() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::EventDeliveryFailed,
                format!("{} handler(s) failed", failed.len()),
            )
            .with_detail("event_type", event.event_type.clone())
            .with_detail("handlers", failed.join(",")))
        }
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.handlers
            .write()
            .expect("InMemoryEventBus: handlers lock poisoned")
            .entry(event_type.to_string())
            .or_default()
            .push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const REDIRECTED: &str = "navigation.redirected.v1";
    const PHASE: &str = "navigation.phase_changed.v1";

    fn envelope(event_type: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, json!({}))
    }

    struct Counter(Arc<AtomicUsize>);

    impl EventHandler for Counter {
        fn handle(&self, _: &EventEnvelope) -> Result<(), DomainError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "Counter"
        }
    }

    struct Broken;

    impl EventHandler for Broken {
        fn handle(&self, _: &EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::InternalError, "toast queue full"))
        }

        fn name(&self) -> &'static str {
            "Broken"
        }
    }

    #[test]
    fn captures_without_subscribers() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope(REDIRECTED)).unwrap();
        bus.publish(envelope(PHASE)).unwrap();
        bus.publish(envelope(REDIRECTED)).unwrap();

        assert_eq!(bus.event_count(), 3);
        assert_eq!(bus.events_of_type(REDIRECTED).len(), 2);
        assert!(bus.has_event(PHASE));
    }

    #[test]
    fn delivers_only_to_matching_subscriptions() {
        let bus = InMemoryEventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        bus.subscribe_all(&[REDIRECTED, PHASE], Arc::new(Counter(hits.clone())));
        bus.subscribe(REDIRECTED, Arc::new(Counter(hits.clone())));

        bus.publish(envelope(REDIRECTED)).unwrap();
        bus.publish(envelope("unrelated.v1")).unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(bus.handler_count(REDIRECTED), 2);
        assert_eq!(bus.handler_count(PHASE), 1);
    }

    #[test]
    fn failing_handler_is_reported_after_the_rest_ran() {
        let bus = InMemoryEventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        bus.subscribe(REDIRECTED, Arc::new(Broken));
        bus.subscribe(REDIRECTED, Arc::new(Counter(hits.clone())));

        let err = bus.publish(envelope(REDIRECTED)).unwrap_err();

        assert_eq!(err.code, ErrorCode::EventDeliveryFailed);
        assert_eq!(err.detail("handlers"), Some("Broken"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(bus.event_count(), 1);
    }

    #[test]
    fn clear_keeps_subscriptions() {
        let bus = InMemoryEventBus::new();
        bus.subscribe(PHASE, Arc::new(Broken));
        bus.publish(envelope(REDIRECTED)).unwrap();

        bus.clear();
        assert_eq!(bus.event_count(), 0);
        assert_eq!(bus.handler_count(PHASE), 1);
    }
}
