//! Application layer - the guard and the services that feed it.
//!
//! - `NavigationGuard` reconciles the current location with the user's state
//! - `GuardRuntime` drives the guard from observable inputs
//! - `LaunchStateController` owns the persisted onboarding flag
//! - `RootShell` picks what the root of the client renders

mod guard_runtime;
mod launch_state;
mod navigation_guard;
mod root_shell;

pub use guard_runtime::GuardRuntime;
pub use launch_state::LaunchStateController;
pub use navigation_guard::NavigationGuard;
pub use root_shell::{RootShell, ShellView};
