//! Navigation ports: observing the current location and replacing it.
//!
//! Both are provided by the navigation framework. The guard reads the
//! location and, when it must correct it, issues a replace. It never pushes.

use tokio::sync::watch;

use crate::domain::navigation::{Location, RoutePath};

/// Source of the current location.
pub trait LocationObserver: Send + Sync {
    /// Location shown right now.
    fn current(&self) -> Location;

    /// Receiver that is notified on every navigation, including the
    /// guard's own redirects.
    fn subscribe(&self) -> watch::Receiver<Location>;
}

/// Replace-style navigation.
///
/// # Contract
///
/// - `replace` swaps the current history entry; history never grows.
/// - Fire-and-forget: the resulting location change arrives later through
///   the `LocationObserver`.
/// - Calling it again for the route already shown is harmless.
pub trait Navigator: Send + Sync {
    fn replace(&self, route: &RoutePath);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Compile-time check that traits are object-safe
    #[allow(dead_code)]
    fn assert_navigator_object_safe(_: &dyn Navigator) {}

    #[allow(dead_code)]
    fn assert_observer_object_safe(_: &dyn LocationObserver) {}

    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    impl Navigator for Recorder {
        fn replace(&self, route: &RoutePath) {
            self.calls.lock().unwrap().push(route.to_string());
        }
    }

    #[test]
    fn navigator_is_usable_through_trait_object() {
        let recorder = Recorder {
            calls: Mutex::new(Vec::new()),
        };
        let navigator: &dyn Navigator = &recorder;
        navigator.replace(&RoutePath::new("/(auth)").unwrap());
        assert_eq!(*recorder.calls.lock().unwrap(), vec!["/(auth)".to_string()]);
    }
}
