//! Root shell view selection.
//!
//! Shows a loading indicator while any guard input is unresolved, otherwise
//! the navigation tree for the section currently on screen. All redirect
//! decisions stay with the guard.

use serde::{Deserialize, Serialize};

use super::NavigationGuard;
use crate::domain::navigation::Section;

/// What the root of the client renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ShellView {
    Loading,
    Navigator { section: Section },
}

impl ShellView {
    pub fn is_loading(&self) -> bool {
        matches!(self, ShellView::Loading)
    }
}

pub struct RootShell;

impl RootShell {
    /// A store that never resolves keeps this at `Loading` indefinitely.
    pub fn view(guard: &NavigationGuard) -> ShellView {
        if guard.is_hydrating() {
            return ShellView::Loading;
        }
        match guard.location() {
            Some(location) => ShellView::Navigator {
                section: guard.routes().classify(location).section(),
            },
            None => ShellView::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRouter;
    use crate::domain::navigation::{LaunchState, Location, RouteTable, SessionState};
    use crate::ports::LocationObserver;
    use std::sync::Arc;

    fn guard_at(segments: &[&str]) -> (Arc<InMemoryRouter>, NavigationGuard) {
        let router = Arc::new(InMemoryRouter::new(
            Location::new(segments.iter().copied()).unwrap(),
        ));
        let mut guard = NavigationGuard::new(RouteTable::default(), router.clone());
        guard.observe_location(router.current());
        (router, guard)
    }

    #[test]
    fn loading_while_launch_flag_unresolved() {
        let (_router, mut guard) = guard_at(&["(tabs)"]);
        guard.observe_session(SessionState::signed_out());
        assert_eq!(RootShell::view(&guard), ShellView::Loading);
    }

    #[test]
    fn loading_while_session_unresolved() {
        let (_router, mut guard) = guard_at(&["(tabs)"]);
        guard.observe_launch(LaunchState::resolved(true));
        assert!(RootShell::view(&guard).is_loading());
    }

    #[test]
    fn shows_section_of_current_location_once_settled() {
        let (router, mut guard) = guard_at(&["(tabs)"]);
        guard.observe_launch(LaunchState::resolved(true));
        guard.observe_session(SessionState::signed_out());
        guard.observe_location(router.current());

        assert_eq!(
            RootShell::view(&guard),
            ShellView::Navigator {
                section: Section::Auth
            }
        );
    }

    #[test]
    fn verification_route_renders_auth_section() {
        let (_router, mut guard) = guard_at(&["(auth)", "verify-email"]);
        guard.observe_launch(LaunchState::resolved(true));
        guard.observe_session(SessionState::signed_out());

        assert_eq!(
            RootShell::view(&guard),
            ShellView::Navigator {
                section: Section::Auth
            }
        );
    }
}
