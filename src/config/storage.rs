//! Launch flag storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// YAML file holding the onboarding flag
    #[serde(default = "default_launch_flag_path")]
    pub launch_flag_path: PathBuf,
}

fn default_launch_flag_path() -> PathBuf {
    PathBuf::from("./data/launch.yaml")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            launch_flag_path: default_launch_flag_path(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.launch_flag_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.launch_flag_path"));
        }
        Ok(())
    }
}
