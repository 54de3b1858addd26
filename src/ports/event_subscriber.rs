//! Subscription side of the event bus.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Consumer of guard events, e.g. the toast layer.
///
/// Handlers run inline with the guard's evaluation, so they must return
/// quickly. A failing handler does not stop delivery to the others.
///
/// ```ignore
/// impl EventHandler for RedirectToast {
///     fn handle(&self, event: &EventEnvelope) -> Result<(), DomainError> {
///         let redirect: NavigationRedirected = event.payload_as()?;
///         self.queue.push(format!("Please sign in to continue ({})", redirect.rule));
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "RedirectToast"
///     }
/// }
/// ```
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &EventEnvelope) -> Result<(), DomainError>;

    /// Used in delivery failure logs.
    fn name(&self) -> &'static str;
}

pub trait EventSubscriber: Send + Sync {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Registers the same handler under several event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        for event_type in event_types {
            self.subscribe(event_type, Arc::clone(&handler));
        }
    }
}

/// Anything that can both publish and accept subscriptions.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[allow(dead_code)]
    fn assert_bus_object_safe(_: &dyn EventBus) {}

    struct Named(&'static str);

    impl EventHandler for Named {
        fn handle(&self, _: &EventEnvelope) -> Result<(), DomainError> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            self.0
        }
    }

    #[derive(Default)]
    struct Registry {
        entries: Mutex<Vec<(String, &'static str)>>,
    }

    impl EventSubscriber for Registry {
        fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
            self.entries
                .lock()
                .unwrap()
                .push((event_type.to_string(), handler.name()));
        }
    }

    #[test]
    fn subscribe_all_registers_once_per_type() {
        let registry = Registry::default();
        registry.subscribe_all(&["a.v1", "b.v1"], Arc::new(Named("audit")));

        let entries = registry.entries.lock().unwrap();
        assert_eq!(
            *entries,
            vec![("a.v1".to_string(), "audit"), ("b.v1".to_string(), "audit")]
        );
    }
}
