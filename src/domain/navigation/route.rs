//! Route model: paths, observed locations, and their classification.
//!
//! The navigation framework reports the current position as an ordered list
//! of segments such as `["(auth)", "verify-email"]`. Only the first segment
//! (the route group) decides the section, except for the email verification
//! leaf under the auth group, which is matched on group and leaf together.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Section;
use crate::domain::foundation::ValidationError;

/// A concrete route the navigator can be asked to show, e.g. `/(auth)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// Parses a route path. Must start with `/` and name at least one segment.
    pub fn new(path: impl Into<String>) -> Result<Self, ValidationError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(ValidationError::empty_field("route"));
        }
        if !path.starts_with('/') {
            return Err(ValidationError::invalid_format("route", "must start with '/'"));
        }
        if path.split('/').all(str::is_empty) {
            return Err(ValidationError::invalid_format(
                "route",
                "must name at least one segment",
            ));
        }
        Ok(Self(path))
    }

    /// Returns the path as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The location the navigator reports once this path is shown.
    pub fn location(&self) -> Location {
        Location {
            segments: self
                .0
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl TryFrom<String> for RoutePath {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoutePath> for String {
    fn from(value: RoutePath) -> Self {
        value.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current position in the navigation hierarchy. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Location {
    segments: Vec<String>,
}

impl Location {
    /// Creates a location from route segments.
    pub fn new<I, S>(segments: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(ValidationError::empty_field("segments"));
        }
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ValidationError::invalid_format(
                "segments",
                "segments must not be blank",
            ));
        }
        Ok(Self { segments })
    }

    /// The top-level route group.
    pub fn group(&self) -> &str {
        &self.segments[0]
    }

    /// The segment directly below the group, if any.
    pub fn leaf(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl TryFrom<Vec<String>> for Location {
    type Error = ValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Location> for Vec<String> {
    fn from(value: Location) -> Self {
        value.segments
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

/// What the guard sees when it looks at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
    Onboarding,
    Auth,
    /// The email verification flow nested under the auth group.
    AuthVerification,
    /// Inside the main app, or any group not otherwise classified.
    Other,
}

impl RouteClass {
    /// The section a user standing on this class of route is viewing.
    pub fn section(&self) -> Section {
        match self {
            RouteClass::Onboarding => Section::Onboarding,
            RouteClass::Auth | RouteClass::AuthVerification => Section::Auth,
            RouteClass::Other => Section::App,
        }
    }
}

/// Route group names and canonical entry routes of the three sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    onboarding_group: String,
    auth_group: String,
    verification_leaf: String,
    onboarding_entry: RoutePath,
    auth_entry: RoutePath,
    app_entry: RoutePath,
}

impl RouteTable {
    /// Builds a route table, checking that every entry lives in its own group.
    pub fn new(
        onboarding_group: impl Into<String>,
        auth_group: impl Into<String>,
        verification_leaf: impl Into<String>,
        onboarding_entry: RoutePath,
        auth_entry: RoutePath,
        app_entry: RoutePath,
    ) -> Result<Self, ValidationError> {
        let table = Self {
            onboarding_group: onboarding_group.into(),
            auth_group: auth_group.into(),
            verification_leaf: verification_leaf.into(),
            onboarding_entry,
            auth_entry,
            app_entry,
        };
        table.check()?;
        Ok(table)
    }

    fn check(&self) -> Result<(), ValidationError> {
        if self.onboarding_group.is_empty() {
            return Err(ValidationError::empty_field("onboarding_group"));
        }
        if self.auth_group.is_empty() {
            return Err(ValidationError::empty_field("auth_group"));
        }
        if self.verification_leaf.is_empty() {
            return Err(ValidationError::empty_field("verification_leaf"));
        }
        if self.onboarding_group == self.auth_group {
            return Err(ValidationError::invalid_format(
                "auth_group",
                "must differ from onboarding_group",
            ));
        }

        // Each entry must classify back into its own section, otherwise the
        // guard would redirect away from its own target.
        for section in Section::ALL {
            let entry = self.entry(section);
            if self.classify(&entry.location()) != section.entry_class() {
                return Err(ValidationError::invalid_format(
                    format!("{}_entry", section.as_str()),
                    format!("'{}' does not land in the {} section", entry, section),
                ));
            }
        }
        Ok(())
    }

    /// Canonical entry route of a section.
    pub fn entry(&self, section: Section) -> &RoutePath {
        match section {
            Section::Onboarding => &self.onboarding_entry,
            Section::Auth => &self.auth_entry,
            Section::App => &self.app_entry,
        }
    }

    pub fn classify(&self, location: &Location) -> RouteClass {
        let group = location.group();
        if group == self.onboarding_group {
            RouteClass::Onboarding
        } else if group == self.auth_group {
            if location.leaf() == Some(self.verification_leaf.as_str()) {
                RouteClass::AuthVerification
            } else {
                RouteClass::Auth
            }
        } else {
            RouteClass::Other
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            onboarding_group: "(onboarding)".to_string(),
            auth_group: "(auth)".to_string(),
            verification_leaf: "verify-email".to_string(),
            onboarding_entry: RoutePath("/(onboarding)".to_string()),
            auth_entry: RoutePath("/(auth)".to_string()),
            app_entry: RoutePath("/(tabs)".to_string()),
        }
    }
}
