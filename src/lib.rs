//! Wishlist Navigation - access guard for the gift wishlist client
//!
//! Decides, from the onboarding flag, the auth session and the current
//! route, whether the user may stay where they are or must be sent to the
//! onboarding, auth or main app section.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
