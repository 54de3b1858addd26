//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event plumbing, and error types
//! that the navigation domain is written in.

mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId};
pub use ids::UserId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
