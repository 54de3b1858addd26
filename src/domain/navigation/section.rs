//! Top-level sections of the client.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RouteClass;

/// One of the three top-level navigable areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Onboarding,
    Auth,
    App,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Onboarding, Section::Auth, Section::App];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Onboarding => "onboarding",
            Section::Auth => "auth",
            Section::App => "app",
        }
    }

    /// How the section's canonical entry route classifies.
    pub fn entry_class(&self) -> RouteClass {
        match self {
            Section::Onboarding => RouteClass::Onboarding,
            Section::Auth => RouteClass::Auth,
            Section::App => RouteClass::Other,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
