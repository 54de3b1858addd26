//! Launch Flag Store Port - durable "has onboarding been completed" flag.
//!
//! Backed by per-device storage. Read once at startup, written once when the
//! onboarding flow finishes. The guard never writes it.

use async_trait::async_trait;

/// Errors that can occur while reading or writing the launch flag
#[derive(Debug, thiserror::Error)]
pub enum LaunchFlagError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize launch flag: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize launch flag: {0}")]
    DeserializationFailed(String),
}

/// Port for the persisted onboarding flag
#[async_trait]
pub trait LaunchFlagStore: Send + Sync {
    /// Read the flag. A device that has never stored it reports `false`.
    ///
    /// # Errors
    /// Returns `LaunchFlagError` if the backing storage cannot be read
    async fn load(&self) -> Result<bool, LaunchFlagError>;

    /// Record that onboarding has been completed.
    ///
    /// # Errors
    /// Returns `LaunchFlagError` if the write fails
    async fn mark_completed(&self) -> Result<(), LaunchFlagError>;

    /// Clear the flag so the next launch shows onboarding again.
    ///
    /// # Errors
    /// Returns `LaunchFlagError` if the write fails
    async fn reset(&self) -> Result<(), LaunchFlagError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn LaunchFlagStore) {}

    #[test]
    fn launch_flag_error_io_displays_cause() {
        let err = LaunchFlagError::IoError("permission denied".to_string());
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn launch_flag_error_deserialization_mentions_flag() {
        let err = LaunchFlagError::DeserializationFailed("bad yaml".to_string());
        assert!(err.to_string().contains("deserialize launch flag"));
    }
}
