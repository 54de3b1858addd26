//! Navigation domain - the access decision over onboarding, auth, and app.
//!
//! Pure types and functions only. The stateful guard that holds the latest
//! snapshots and performs redirects lives in the application layer.

mod decision;
mod events;
mod inputs;
mod phase;
mod route;
mod section;

pub use decision::{decide, Decision, GuardRule, StayReason};
pub use events::{GuardPhaseChanged, NavigationRedirected};
pub use inputs::{GuardInputs, Identity, LaunchState, SessionState};
pub use phase::GuardPhase;
pub use route::{Location, RouteClass, RoutePath, RouteTable};
pub use section::Section;
