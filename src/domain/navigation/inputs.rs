//! Snapshots of the asynchronous state the guard observes.
//!
//! Both stores start out loading. A store that never resolves stays loading,
//! which keeps the guard from deciding anything.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// Opaque signed-in identity. The guard only cares whether one is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
}

impl Identity {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Whether onboarding has been completed on this device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchState {
    /// Only meaningful once `loading` is false.
    pub completed: bool,
    pub loading: bool,
}

impl LaunchState {
    /// Before the persisted flag has been read.
    pub fn hydrating() -> Self {
        Self {
            completed: false,
            loading: true,
        }
    }

    pub fn resolved(completed: bool) -> Self {
        Self {
            completed,
            loading: false,
        }
    }
}

impl Default for LaunchState {
    fn default() -> Self {
        Self::hydrating()
    }
}

/// Current authentication session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    /// Before the session has been restored from local or remote state.
    pub fn hydrating() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            identity: None,
            loading: false,
        }
    }

    pub fn has_identity(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::hydrating()
    }
}

/// The two state inputs evaluated together on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardInputs {
    pub launch: LaunchState,
    pub session: SessionState,
}

impl GuardInputs {
    pub fn new(launch: LaunchState, session: SessionState) -> Self {
        Self { launch, session }
    }

    /// True while either store is still hydrating.
    pub fn is_loading(&self) -> bool {
        self.launch.loading || self.session.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity::new(UserId::new("user-1").unwrap())
    }

    #[test]
    fn defaults_are_hydrating() {
        assert!(LaunchState::default().loading);
        assert!(SessionState::default().loading);
        assert!(GuardInputs::default().is_loading());
    }

    #[test]
    fn either_loading_flag_keeps_inputs_loading() {
        let launch_pending = GuardInputs::new(LaunchState::hydrating(), SessionState::signed_out());
        let session_pending = GuardInputs::new(LaunchState::resolved(true), SessionState::hydrating());
        let settled = GuardInputs::new(LaunchState::resolved(true), SessionState::signed_out());

        assert!(launch_pending.is_loading());
        assert!(session_pending.is_loading());
        assert!(!settled.is_loading());
    }

    #[test]
    fn session_constructors_set_identity() {
        assert!(SessionState::signed_in(identity()).has_identity());
        assert!(!SessionState::signed_out().has_identity());
        assert!(!SessionState::signed_in(identity()).loading);
    }
}
