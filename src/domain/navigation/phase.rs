//! Lifecycle of the guard across the process.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{GuardInputs, Section};
use crate::domain::foundation::StateMachine;

/// Where the guard believes the user should be, derived from settled inputs.
///
/// `Hydrating` is the only initial phase. Leaving onboarding is irreversible
/// within a process; `Auth` and `App` alternate with sign-in and sign-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuardPhase {
    #[default]
    Hydrating,
    Onboarding,
    Auth,
    App,
}

impl GuardPhase {
    /// Phase implied by the inputs, or `None` while they are still loading.
    pub fn settled(inputs: &GuardInputs) -> Option<Self> {
        if inputs.is_loading() {
            return None;
        }
        let phase = if !inputs.launch.completed {
            GuardPhase::Onboarding
        } else if inputs.session.has_identity() {
            GuardPhase::App
        } else {
            GuardPhase::Auth
        };
        Some(phase)
    }

    /// Section the phase entitles the user to, if any.
    pub fn section(&self) -> Option<Section> {
        match self {
            GuardPhase::Hydrating => None,
            GuardPhase::Onboarding => Some(Section::Onboarding),
            GuardPhase::Auth => Some(Section::Auth),
            GuardPhase::App => Some(Section::App),
        }
    }
}

impl StateMachine for GuardPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GuardPhase::*;
        matches!(
            (self, target),
            (Hydrating, Onboarding)
                | (Hydrating, Auth)
                | (Hydrating, App)
                | (Onboarding, Auth)
                | (Onboarding, App)
                | (Auth, App)
                | (App, Auth)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GuardPhase::*;
        match self {
            Hydrating => vec![Onboarding, Auth, App],
            Onboarding => vec![Auth, App],
            Auth => vec![App],
            App => vec![Auth],
        }
    }
}

impl fmt::Display for GuardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GuardPhase::Hydrating => "hydrating",
            GuardPhase::Onboarding => "onboarding",
            GuardPhase::Auth => "auth",
            GuardPhase::App => "app",
        };
        write!(f, "{}", s)
    }
}
