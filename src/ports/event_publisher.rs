//! EventPublisher port - Interface for publishing domain events.
//!
//! The guard announces redirects and phase changes through this port
//! instead of through a process-wide notice store, so every consumer (toasts,
//! analytics, tests) receives the bus it was handed.

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Publishing is synchronous: the guard runs on a single logical thread and
/// must finish one evaluation before the next input change is processed.
///
/// # Example
///
/// ```ignore
/// let envelope = EventEnvelope::from_event(&NavigationRedirected::new(..))?;
/// publisher.publish(envelope)?;
/// ```
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order, stopping at the first failure.
    fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event)?;
        }
        Ok(())
    }
}
