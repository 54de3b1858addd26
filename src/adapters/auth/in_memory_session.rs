//! In-memory session provider.
//!
//! Stands in for the remote auth session client. Tests and previews drive it
//! directly: restore the persisted session, sign in, sign out, expire.
//!
//! # Example
//!
//! ```ignore
//! let sessions = InMemorySessionProvider::new();
//! let mut rx = sessions.subscribe();
//!
//! sessions.restore(None);                    // hydration finished, nobody signed in
//! sessions.sign_in(UserId::new("user-1")?);  // later
//! ```

use tokio::sync::watch;

use crate::domain::foundation::UserId;
use crate::domain::navigation::{Identity, SessionState};
use crate::ports::SessionProvider;

/// Session provider backed by a watch channel.
#[derive(Debug)]
pub struct InMemorySessionProvider {
    state: watch::Sender<SessionState>,
}

impl InMemorySessionProvider {
    /// Creates a provider that is still restoring its session.
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::hydrating());
        Self { state }
    }

    /// Finishes hydration with whatever session was persisted, if any.
    pub fn restore(&self, identity: Option<Identity>) {
        self.set(SessionState {
            identity,
            loading: false,
        });
    }

    pub fn sign_in(&self, user_id: UserId) {
        tracing::debug!(user_id = %user_id, "Session signed in");
        self.set(SessionState::signed_in(Identity::new(user_id)));
    }

    pub fn sign_out(&self) {
        tracing::debug!("Session signed out");
        self.set(SessionState::signed_out());
    }

    /// Token expiry: the identity disappears without an explicit sign-out.
    pub fn expire(&self) {
        tracing::debug!("Session expired");
        self.set(SessionState::signed_out());
    }

    /// Marks the session as loading again while it is re-validated.
    pub fn begin_refresh(&self) {
        self.state.send_modify(|state| state.loading = true);
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    fn set(&self, next: SessionState) {
        // Unchanged snapshots do not wake subscribers.
        self.state.send_if_modified(|state| {
            if *state == next {
                false
            } else {
                *state = next;
                true
            }
        });
    }
}

impl Default for InMemorySessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for InMemorySessionProvider {
    fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}
