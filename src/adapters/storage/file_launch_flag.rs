//! File-based Launch Flag Adapter
//!
//! Stores the onboarding flag as a small YAML document on disk:
//!
//! ```yaml
//! onboarding_completed: true
//! ```
//!
//! A missing file means onboarding has never been completed on this device.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{LaunchFlagError, LaunchFlagStore};

#[derive(Debug, Serialize, Deserialize)]
struct LaunchFlagDocument {
    onboarding_completed: bool,
}

/// File-based storage for the onboarding flag
#[derive(Debug, Clone)]
pub struct FileLaunchFlagStore {
    path: PathBuf,
}

impl FileLaunchFlagStore {
    /// Create a store backed by the given file
    ///
    /// # Example
    /// ```ignore
    /// let store = FileLaunchFlagStore::new("./data/launch.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, completed: bool) -> Result<(), LaunchFlagError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| LaunchFlagError::IoError(e.to_string()))?;
            }
        }

        let yaml = serde_yaml::to_string(&LaunchFlagDocument {
            onboarding_completed: completed,
        })
        .map_err(|e| LaunchFlagError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, yaml)
            .await
            .map_err(|e| LaunchFlagError::IoError(e.to_string()))
    }
}

#[async_trait]
impl LaunchFlagStore for FileLaunchFlagStore {
    async fn load(&self) -> Result<bool, LaunchFlagError> {
        let yaml = match fs::read_to_string(&self.path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(LaunchFlagError::IoError(e.to_string())),
        };

        let document: LaunchFlagDocument = serde_yaml::from_str(&yaml)
            .map_err(|e| LaunchFlagError::DeserializationFailed(e.to_string()))?;

        Ok(document.onboarding_completed)
    }

    async fn mark_completed(&self) -> Result<(), LaunchFlagError> {
        self.write(true).await
    }

    async fn reset(&self) -> Result<(), LaunchFlagError> {
        self.write(false).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileLaunchFlagStore {
        FileLaunchFlagStore::new(dir.path().join("device").join("launch.yaml"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_not_completed() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.load().await.unwrap());
    }

    #[tokio::test]
    async fn mark_completed_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).mark_completed().await.unwrap();

        let reopened = store_in(&dir);
        assert!(reopened.load().await.unwrap());
    }

    #[tokio::test]
    async fn written_file_is_readable_yaml() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.mark_completed().await.unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("onboarding_completed: true"));
    }

    #[tokio::test]
    async fn reset_clears_flag() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.mark_completed().await.unwrap();
        store.reset().await.unwrap();
        assert!(!store.load().await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_deserialization_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "onboarding_completed: [not, a, bool]").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, LaunchFlagError::DeserializationFailed(_)));
    }
}
