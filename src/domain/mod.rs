//! Domain layer containing the access decision and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, events, state machine trait)
//! - `navigation` - Sections, routes, observed inputs, and the guard's decision rules

pub mod foundation;
pub mod navigation;
