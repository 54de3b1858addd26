//! The access decision: which section may be shown for the current inputs.
//!
//! Rules are tried in priority order and the first match wins:
//!
//! 1. Onboarding unfinished and not on onboarding: go to onboarding.
//! 2. Onboarding finished but still on onboarding: go to app or auth.
//! 3. No identity outside auth and onboarding: go to auth.
//! 4. Identity present on auth or onboarding: go to app.
//!
//! Anything else stays put. Rules 3 and 4 are skipped on the email
//! verification route and while onboarding is unfinished.
//!
//! Applying a redirect and deciding again against the target's entry route
//! always yields `Stay`, so the guard converges after one redirect.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{GuardInputs, RouteClass, Section};

/// Which rule produced a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardRule {
    OnboardingRequired,
    OnboardingFinished,
    SignInRequired,
    AlreadySignedIn,
}

impl GuardRule {
    /// Priority of the rule, 1 is checked first.
    pub fn priority(&self) -> u8 {
        match self {
            GuardRule::OnboardingRequired => 1,
            GuardRule::OnboardingFinished => 2,
            GuardRule::SignInRequired => 3,
            GuardRule::AlreadySignedIn => 4,
        }
    }
}

impl fmt::Display for GuardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GuardRule::OnboardingRequired => "onboarding_required",
            GuardRule::OnboardingFinished => "onboarding_finished",
            GuardRule::SignInRequired => "sign_in_required",
            GuardRule::AlreadySignedIn => "already_signed_in",
        };
        write!(f, "{}", s)
    }
}

/// Why no redirect was needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayReason {
    /// The location already matches the inputs.
    Consistent,
    /// On the email verification route, where session churn is expected.
    VerificationExempt,
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Decision {
    /// Inputs are still hydrating; nothing may be decided yet.
    Withheld,
    Stay { reason: StayReason },
    Redirect { to: Section, rule: GuardRule },
}

impl Decision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Decision::Redirect { .. })
    }

    pub fn is_stay(&self) -> bool {
        matches!(self, Decision::Stay { .. })
    }

    /// Target section when this is a redirect.
    pub fn target(&self) -> Option<Section> {
        match self {
            Decision::Redirect { to, .. } => Some(*to),
            _ => None,
        }
    }

    fn redirect(to: Section, rule: GuardRule) -> Self {
        Decision::Redirect { to, rule }
    }

    fn stay(reason: StayReason) -> Self {
        Decision::Stay { reason }
    }
}

/// Decides where the user belongs given the inputs and current route class.
pub fn decide(inputs: &GuardInputs, current: RouteClass) -> Decision {
    if inputs.is_loading() {
        return Decision::Withheld;
    }

    let completed = inputs.launch.completed;
    let signed_in = inputs.session.has_identity();

    if !completed {
        return if current == RouteClass::Onboarding {
            Decision::stay(StayReason::Consistent)
        } else {
            Decision::redirect(Section::Onboarding, GuardRule::OnboardingRequired)
        };
    }

    if current == RouteClass::Onboarding {
        let to = if signed_in { Section::App } else { Section::Auth };
        return Decision::redirect(to, GuardRule::OnboardingFinished);
    }

    match (signed_in, current) {
        (_, RouteClass::AuthVerification) => Decision::stay(StayReason::VerificationExempt),
        (false, RouteClass::Other) => Decision::redirect(Section::Auth, GuardRule::SignInRequired),
        (true, RouteClass::Auth) => Decision::redirect(Section::App, GuardRule::AlreadySignedIn),
        _ => Decision::stay(StayReason::Consistent),
    }
}
