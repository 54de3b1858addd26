//! LaunchStateController - turns the persisted launch flag into an observable
//! `LaunchState`.
//!
//! Starts loading, reads the store once on `hydrate`, and flips to completed
//! when onboarding finishes. A failed read leaves the state loading, so the
//! guard keeps withholding and the shell keeps its loading indicator.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::navigation::LaunchState;
use crate::ports::{LaunchFlagError, LaunchFlagStore};

/// Owner of the observable launch state.
pub struct LaunchStateController {
    store: Arc<dyn LaunchFlagStore>,
    state: watch::Sender<LaunchState>,
}

impl LaunchStateController {
    pub fn new(store: Arc<dyn LaunchFlagStore>) -> Self {
        let (state, _) = watch::channel(LaunchState::hydrating());
        Self { store, state }
    }

    pub fn current(&self) -> LaunchState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LaunchState> {
        self.state.subscribe()
    }

    /// Read the persisted flag and publish it.
    ///
    /// A completed flag already published in this process is kept even if
    /// the store reads back `false`.
    pub async fn hydrate(&self) -> Result<LaunchState, LaunchFlagError> {
        match self.store.load().await {
            Ok(stored) => {
                let current = self.current();
                let completed = stored || (!current.loading && current.completed);
                let next = LaunchState::resolved(completed);
                debug!(completed, "Launch flag hydrated");
                self.set(next);
                Ok(next)
            }
            Err(e) => {
                warn!(error = %e, "Launch flag unreadable; staying in loading state");
                Err(e)
            }
        }
    }

    /// Persist onboarding completion, then publish it. Idempotent.
    ///
    /// The published state only changes once the write succeeded.
    pub async fn complete_onboarding(&self) -> Result<(), LaunchFlagError> {
        if self.current() == LaunchState::resolved(true) {
            return Ok(());
        }
        self.store.mark_completed().await?;
        info!("Onboarding completed");
        self.set(LaunchState::resolved(true));
        Ok(())
    }

    /// Explicit reset: the only way `completed` goes back to false.
    pub async fn reset(&self) -> Result<(), LaunchFlagError> {
        self.store.reset().await?;
        warn!("Launch flag reset");
        self.set(LaunchState::resolved(false));
        Ok(())
    }

    fn set(&self, next: LaunchState) {
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
