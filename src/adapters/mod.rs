//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the guard to its collaborators:
//! - `auth` - Session providers
//! - `events` - Event bus implementations
//! - `navigation` - Routers (location observer + navigator)
//! - `storage` - Launch flag stores (file, in-memory)

pub mod auth;
pub mod events;
pub mod navigation;
pub mod storage;

pub use auth::InMemorySessionProvider;
pub use events::InMemoryEventBus;
pub use navigation::InMemoryRouter;
pub use storage::{FileLaunchFlagStore, InMemoryLaunchFlagStore};
