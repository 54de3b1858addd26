//! Storage Adapters
//!
//! Implementations of the LaunchFlagStore port.
//!
//! ## Available Adapters
//!
//! - **FileLaunchFlagStore** - Stores the flag as a YAML file on disk
//! - **InMemoryLaunchFlagStore** - Stores the flag in memory (testing/previews)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileLaunchFlagStore, InMemoryLaunchFlagStore};
//!
//! let store = FileLaunchFlagStore::new("./data/launch.yaml");
//! let store = InMemoryLaunchFlagStore::new();
//! ```

mod file_launch_flag;
mod in_memory_launch_flag;

pub use file_launch_flag::FileLaunchFlagStore;
pub use in_memory_launch_flag::InMemoryLaunchFlagStore;
