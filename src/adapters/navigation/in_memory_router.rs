//! In-memory router standing in for the navigation framework.
//!
//! Keeps a history stack whose top entry is the current location. User
//! navigation pushes; the guard's redirects replace. Observers are woken only
//! when the visible location actually changes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tokio::sync::watch;

use crate::domain::navigation::{Location, RoutePath};
use crate::ports::{LocationObserver, Navigator};

/// History-stack router implementing both navigation ports.
#[derive(Debug)]
pub struct InMemoryRouter {
    location: watch::Sender<Location>,
    history: Mutex<Vec<Location>>,
    replaces: AtomicUsize,
}

impl InMemoryRouter {
    /// Creates a router showing `initial`, the launch route.
    pub fn new(initial: Location) -> Self {
        let (location, _) = watch::channel(initial.clone());
        Self {
            location,
            history: Mutex::new(vec![initial]),
            replaces: AtomicUsize::new(0),
        }
    }

    /// User-driven navigation that grows history.
    pub fn push(&self, location: Location) {
        self.history
            .lock()
            .expect("InMemoryRouter: history lock poisoned")
            .push(location.clone());
        self.show(location);
    }

    /// Pops the top entry. Returns false when already at the root.
    pub fn back(&self) -> bool {
        let previous = {
            let mut history = self
                .history
                .lock()
                .expect("InMemoryRouter: history lock poisoned");
            if history.len() <= 1 {
                return false;
            }
            history.pop();
            history.last().cloned()
        };
        if let Some(location) = previous {
            self.show(location);
        }
        true
    }

    pub fn history_len(&self) -> usize {
        self.history
            .lock()
            .expect("InMemoryRouter: history lock poisoned")
            .len()
    }

    /// Number of `replace` calls received, redundant ones included.
    pub fn replace_count(&self) -> usize {
        self.replaces.load(Ordering::SeqCst)
    }

    fn show(&self, next: Location) {
        self.location.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

impl Navigator for InMemoryRouter {
    fn replace(&self, route: &RoutePath) {
        self.replaces.fetch_add(1, Ordering::SeqCst);
        let location = route.location();
        {
            let mut history = self
                .history
                .lock()
                .expect("InMemoryRouter: history lock poisoned");
            match history.last_mut() {
                Some(top) => *top = location.clone(),
                None => history.push(location.clone()),
            }
        }
        tracing::trace!(route = %route, "Router replaced current entry");
        self.show(location);
    }
}

impl LocationObserver for InMemoryRouter {
    fn current(&self) -> Location {
        self.location.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Location> {
        self.location.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(segments: &[&str]) -> Location {
        Location::new(segments.iter().copied()).unwrap()
    }

    fn route(path: &str) -> RoutePath {
        RoutePath::new(path).unwrap()
    }

    #[test]
    fn replace_swaps_top_entry_without_growing_history() {
        let router = InMemoryRouter::new(loc(&["(tabs)"]));
        router.replace(&route("/(auth)"));
        router.replace(&route("/(onboarding)"));

        assert_eq!(router.history_len(), 1);
        assert_eq!(router.current(), loc(&["(onboarding)"]));
        assert_eq!(router.replace_count(), 2);
    }

    #[test]
    fn push_grows_history_and_back_restores() {
        let router = InMemoryRouter::new(loc(&["(tabs)"]));
        router.push(loc(&["(tabs)", "wishlists", "7"]));
        assert_eq!(router.history_len(), 2);

        assert!(router.back());
        assert_eq!(router.current(), loc(&["(tabs)"]));
        assert!(!router.back());
    }

    #[test]
    fn redundant_replace_is_harmless_and_silent() {
        let router = InMemoryRouter::new(loc(&["(auth)"]));
        let rx = router.subscribe();

        router.replace(&route("/(auth)"));

        assert!(!rx.has_changed().unwrap());
        assert_eq!(router.current(), loc(&["(auth)"]));
        assert_eq!(router.history_len(), 1);
    }

    #[tokio::test]
    async fn observers_see_replacements() {
        let router = InMemoryRouter::new(loc(&["(tabs)"]));
        let mut rx = router.subscribe();

        router.replace(&route("/(auth)"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), loc(&["(auth)"]));
    }
}
