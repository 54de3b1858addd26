//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the navigation guard and the outside world. Adapters implement these ports.
//!
//! ## Observed Inputs
//!
//! - `LaunchFlagStore` - Durable onboarding-completed flag
//! - `SessionProvider` - Current signed-in identity and its loading state
//! - `LocationObserver` - Current position in the navigation hierarchy
//!
//! ## Actions
//!
//! - `Navigator` - Replace-style navigation to a section's entry route
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events

mod event_publisher;
mod event_subscriber;
mod launch_flag_store;
mod navigator;
mod session_provider;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use launch_flag_store::{LaunchFlagError, LaunchFlagStore};
pub use navigator::{LocationObserver, Navigator};
pub use session_provider::SessionProvider;
