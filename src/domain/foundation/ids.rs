//! Identifiers handed to us by collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Account id issued by the remote auth service. Opaque, never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format("user_id", "must not contain whitespace"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_and_padded_ids() {
        assert!(matches!(UserId::new(""), Err(ValidationError::EmptyField { .. })));
        assert!(UserId::new("   ").is_err());
        assert!(matches!(
            UserId::new("user 42"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn round_trips_through_json_as_plain_string() {
        let id = UserId::new("user-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"user-42\"");
        assert_eq!(serde_json::from_str::<UserId>(&json).unwrap(), id);
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
    }
}
