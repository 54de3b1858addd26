//! Authentication session adapters.
//!
//! Implementations of the `SessionProvider` port:
//!
//! - `in_memory_session` - Provider driven directly by tests and previews

mod in_memory_session;

pub use in_memory_session::InMemorySessionProvider;
