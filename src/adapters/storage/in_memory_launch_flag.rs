//! In-Memory Launch Flag Adapter
//!
//! Keeps the onboarding flag in memory. Useful for tests and previews.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{LaunchFlagError, LaunchFlagStore};

/// In-memory launch flag
#[derive(Debug, Clone, Default)]
pub struct InMemoryLaunchFlagStore {
    completed: Arc<RwLock<bool>>,
    fail_reads: Arc<RwLock<Option<String>>>,
}

impl InMemoryLaunchFlagStore {
    /// Create a store that has never seen onboarding completed
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already records a completed onboarding
    pub fn completed() -> Self {
        Self {
            completed: Arc::new(RwLock::new(true)),
            fail_reads: Arc::new(RwLock::new(None)),
        }
    }

    /// Make every `load` fail with the given message
    pub async fn fail_reads_with(&self, message: impl Into<String>) {
        *self.fail_reads.write().await = Some(message.into());
    }

    /// Current value, bypassing any forced failure
    pub async fn peek(&self) -> bool {
        *self.completed.read().await
    }
}

#[async_trait]
impl LaunchFlagStore for InMemoryLaunchFlagStore {
    async fn load(&self) -> Result<bool, LaunchFlagError> {
        if let Some(message) = self.fail_reads.read().await.clone() {
            return Err(LaunchFlagError::IoError(message));
        }
        Ok(*self.completed.read().await)
    }

    async fn mark_completed(&self) -> Result<(), LaunchFlagError> {
        *self.completed.write().await = true;
        Ok(())
    }

    async fn reset(&self) -> Result<(), LaunchFlagError> {
        *self.completed.write().await = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_store_reports_not_completed() {
        let store = InMemoryLaunchFlagStore::new();
        assert!(!store.load().await.unwrap());
    }

    #[tokio::test]
    async fn mark_completed_then_reset() {
        let store = InMemoryLaunchFlagStore::new();
        store.mark_completed().await.unwrap();
        assert!(store.load().await.unwrap());

        store.reset().await.unwrap();
        assert!(!store.load().await.unwrap());
    }

    #[tokio::test]
    async fn clones_share_the_flag() {
        let store = InMemoryLaunchFlagStore::new();
        let other = store.clone();
        other.mark_completed().await.unwrap();
        assert!(store.peek().await);
    }

    #[tokio::test]
    async fn forced_read_failure_surfaces_as_io_error() {
        let store = InMemoryLaunchFlagStore::completed();
        store.fail_reads_with("disk unavailable").await;

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, LaunchFlagError::IoError(ref m) if m == "disk unavailable"));
        assert!(store.peek().await);
    }
}
