//! Route table configuration
//!
//! Group names and canonical entry routes of the three sections. Defaults
//! match the client's file-based routes.

use serde::Deserialize;

use super::ValidationError;
use crate::domain::navigation::{RoutePath, RouteTable};

#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_onboarding_group")]
    pub onboarding_group: String,

    #[serde(default = "default_auth_group")]
    pub auth_group: String,

    /// Leaf under the auth group that stays reachable whatever the session
    #[serde(default = "default_verification_leaf")]
    pub verification_leaf: String,

    #[serde(default = "default_onboarding_entry")]
    pub onboarding_entry: String,

    #[serde(default = "default_auth_entry")]
    pub auth_entry: String,

    #[serde(default = "default_app_entry")]
    pub app_entry: String,
}

fn default_onboarding_group() -> String {
    "(onboarding)".to_string()
}

fn default_auth_group() -> String {
    "(auth)".to_string()
}

fn default_verification_leaf() -> String {
    "verify-email".to_string()
}

fn default_onboarding_entry() -> String {
    "/(onboarding)".to_string()
}

fn default_auth_entry() -> String {
    "/(auth)".to_string()
}

fn default_app_entry() -> String {
    "/(tabs)".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            onboarding_group: default_onboarding_group(),
            auth_group: default_auth_group(),
            verification_leaf: default_verification_leaf(),
            onboarding_entry: default_onboarding_entry(),
            auth_entry: default_auth_entry(),
            app_entry: default_app_entry(),
        }
    }
}

impl RoutesConfig {
    /// Builds the validated route table the guard works with.
    pub fn route_table(&self) -> Result<RouteTable, ValidationError> {
        let entry = |path: &str| {
            RoutePath::new(path).map_err(|e| ValidationError::InvalidRoutes(e.to_string()))
        };
        RouteTable::new(
            self.onboarding_group.trim(),
            self.auth_group.trim(),
            self.verification_leaf.trim(),
            entry(&self.onboarding_entry)?,
            entry(&self.auth_entry)?,
            entry(&self.app_entry)?,
        )
        .map_err(|e| ValidationError::InvalidRoutes(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.route_table().map(|_| ())
    }
}
