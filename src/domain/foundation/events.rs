//! Event infrastructure for publishing domain events on an injectable bus.
//!
//! - `EventId` - Unique identifier for events
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::{DomainError, ErrorCode, Timestamp};

/// Trait that all domain events must implement.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "navigation.redirected.v1").
    ///
    /// SHOULD include a version suffix for explicit versioning.
    fn event_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Unique identifier for events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates an EventId from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport envelope for domain events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique ID for this event instance.
    pub event_id: EventId,

    /// Event type for routing (e.g., "navigation.redirected.v1").
    pub event_type: String,

    /// Schema version number (extracted from event_type).
    pub schema_version: u32,

    /// When the event occurred.
    pub occurred_at: Timestamp,

    /// Event-specific payload as JSON.
    pub payload: JsonValue,
}

impl EventEnvelope {
    /// Creates a new envelope with a fresh id and the current time.
    pub fn new(event_type: impl Into<String>, payload: JsonValue) -> Self {
        let event_type = event_type.into();
        let schema_version = Self::extract_version(&event_type);

        Self {
            event_id: EventId::new(),
            event_type,
            schema_version,
            occurred_at: Timestamp::now(),
            payload,
        }
    }

    /// Creates an envelope from a domain event, serializing it as the payload.
    pub fn from_event<T>(event: &T) -> Result<Self, DomainError>
    where
        T: DomainEvent + Serialize,
    {
        let event_type = event.event_type().to_string();
        let schema_version = Self::extract_version(&event_type);
        let payload = serde_json::to_value(event).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize {}: {}", event_type, e),
            )
        })?;

        Ok(Self {
            event_id: event.event_id(),
            event_type,
            schema_version,
            occurred_at: event.occurred_at(),
            payload,
        })
    }

    /// Deserializes the payload into a concrete event type.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, DomainError> {
        serde_json::from_value(self.payload.clone()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to deserialize {}: {}", self.event_type, e),
            )
        })
    }

    /// Extracts version number from event_type string, defaulting to 1.
    pub(crate) fn extract_version(event_type: &str) -> u32 {
        event_type
            .rsplit_once(".v")
            .and_then(|(_, version_str)| version_str.parse::<u32>().ok())
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct NoticeRaised {
        event_id: EventId,
        message: String,
        raised_at: Timestamp,
    }

    impl DomainEvent for NoticeRaised {
        fn event_type(&self) -> &'static str {
            "notice.raised.v2"
        }

        fn occurred_at(&self) -> Timestamp {
            self.raised_at
        }

        fn event_id(&self) -> EventId {
            self.event_id.clone()
        }
    }

    #[test]
    fn extract_version_reads_suffix() {
        assert_eq!(EventEnvelope::extract_version("navigation.redirected.v2"), 2);
        assert_eq!(EventEnvelope::extract_version("navigation.redirected.v10"), 10);
        assert_eq!(EventEnvelope::extract_version("legacy"), 1);
    }

    #[test]
    fn new_envelope_has_fresh_id() {
        let a = EventEnvelope::new("notice.raised.v1", json!({}));
        let b = EventEnvelope::new("notice.raised.v1", json!({}));
        assert_ne!(a.event_id, b.event_id);
        assert_eq!(a.schema_version, 1);
    }

    #[test]
    fn from_event_carries_identity_and_payload() {
        let event = NoticeRaised {
            event_id: EventId::from_string("evt-1"),
            message: "Saved".to_string(),
            raised_at: Timestamp::now(),
        };

        let envelope = EventEnvelope::from_event(&event).unwrap();
        assert_eq!(envelope.event_id.as_str(), "evt-1");
        assert_eq!(envelope.event_type, "notice.raised.v2");
        assert_eq!(envelope.schema_version, 2);

        let back: NoticeRaised = envelope.payload_as().unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn payload_as_reports_mismatched_shape() {
        let envelope = EventEnvelope::new("notice.raised.v1", json!({"unexpected": true}));
        let result: Result<NoticeRaised, _> = envelope.payload_as();
        assert!(result.is_err());
    }
}
