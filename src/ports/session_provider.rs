//! Session provider port.
//!
//! Exposes the current signed-in identity and whether it is still being
//! restored. The session may change at any time (sign-in, sign-out, token
//! expiry) independently of navigation.
//!
//! # Example
//!
//! ```ignore
//! let mut sessions = provider.subscribe();
//! while sessions.changed().await.is_ok() {
//!     let session = sessions.borrow().clone();
//!     guard.observe_session(session);
//! }
//! ```

use tokio::sync::watch;

use crate::domain::navigation::SessionState;

/// Source of the current authentication session.
///
/// # Contract
///
/// - Starts out with `loading == true` until the persisted session is restored.
/// - A session that cannot be restored stays loading; it is never reported as
///   signed out on the strength of a failure.
/// - Every change is delivered to subscribers as a fresh snapshot.
pub trait SessionProvider: Send + Sync {
    /// Snapshot of the session right now.
    fn current(&self) -> SessionState;

    /// Receiver that is notified on every session change.
    fn subscribe(&self) -> watch::Receiver<SessionState>;
}
