//! GuardRuntime - drives a `NavigationGuard` from watch channels.
//!
//! One task owns the guard. Every input change is applied in arrival order,
//! so evaluations never overlap. A redirect issued by the guard shows up as
//! a location change on the next iteration.
//!
//! # Example
//!
//! ```ignore
//! let runtime = GuardRuntime::new(guard, launch.subscribe(), sessions.subscribe(), router.subscribe())
//!     .with_view_sender(views_tx);
//! let handle = tokio::spawn(runtime.run(shutdown_rx));
//! ```

use tokio::sync::watch;
use tracing::{debug, info};

use super::{NavigationGuard, RootShell, ShellView};
use crate::domain::navigation::{LaunchState, Location, SessionState};

/// Single-task event loop around the guard.
pub struct GuardRuntime {
    guard: NavigationGuard,
    launch: watch::Receiver<LaunchState>,
    session: watch::Receiver<SessionState>,
    location: watch::Receiver<Location>,
    views: Option<watch::Sender<ShellView>>,
}

impl GuardRuntime {
    pub fn new(
        guard: NavigationGuard,
        launch: watch::Receiver<LaunchState>,
        session: watch::Receiver<SessionState>,
        location: watch::Receiver<Location>,
    ) -> Self {
        Self {
            guard,
            launch,
            session,
            location,
            views: None,
        }
    }

    /// Publish the root shell view after every evaluation.
    pub fn with_view_sender(mut self, views: watch::Sender<ShellView>) -> Self {
        self.views = Some(views);
        self
    }

    /// Runs until `shutdown` turns true or every input channel has closed.
    /// Hands the guard back for inspection.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> NavigationGuard {
        let launch = *self.launch.borrow_and_update();
        self.guard.observe_launch(launch);
        let session = self.session.borrow_and_update().clone();
        self.guard.observe_session(session);
        let location = self.location.borrow_and_update().clone();
        self.guard.observe_location(location);
        self.publish_view();

        let mut launch_open = true;
        let mut session_open = true;
        let mut location_open = true;
        let mut shutdown_open = true;

        info!("Navigation guard running");

        loop {
            if *shutdown.borrow() {
                debug!("Shutdown requested");
                break;
            }
            if !(launch_open || session_open || location_open) {
                debug!("All guard inputs closed");
                break;
            }

            tokio::select! {
                changed = shutdown.changed(), if shutdown_open => {
                    if changed.is_err() {
                        shutdown_open = false;
                    }
                    continue;
                }
                changed = self.launch.changed(), if launch_open => match changed {
                    Ok(()) => {
                        let launch = *self.launch.borrow_and_update();
                        self.guard.observe_launch(launch);
                    }
                    Err(_) => {
                        debug!("Launch state channel closed");
                        launch_open = false;
                    }
                },
                changed = self.session.changed(), if session_open => match changed {
                    Ok(()) => {
                        let session = self.session.borrow_and_update().clone();
                        self.guard.observe_session(session);
                    }
                    Err(_) => {
                        debug!("Session channel closed");
                        session_open = false;
                    }
                },
                changed = self.location.changed(), if location_open => match changed {
                    Ok(()) => {
                        let location = self.location.borrow_and_update().clone();
                        self.guard.observe_location(location);
                    }
                    Err(_) => {
                        debug!("Location channel closed");
                        location_open = false;
                    }
                },
            }

            self.publish_view();
        }

        info!(
            redirects = self.guard.redirect_count(),
            phase = %self.guard.phase(),
            "Navigation guard stopped"
        );
        self.guard
    }

    fn publish_view(&self) {
        let Some(views) = &self.views else {
            return;
        };
        let next = RootShell::view(&self.guard);
        views.send_if_modified(|view| {
            if *view == next {
                false
            } else {
                debug!(view = ?next, "Shell view changed");
                *view = next;
                true
            }
        });
    }
}
