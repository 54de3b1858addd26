//! Navigation adapters.
//!
//! - `InMemoryRouter` - History-stack router implementing `Navigator` and `LocationObserver`

mod in_memory_router;

pub use in_memory_router::InMemoryRouter;
