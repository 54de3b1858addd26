//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `WISHLIST` prefix and
//! double underscores between nested keys. Every section has defaults, so an
//! empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use wishlist_navigation::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let routes = config.routes.route_table().expect("Invalid routes");
//! ```

mod error;
mod logging;
mod routes;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use routes::RoutesConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Route groups and section entry routes
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Where the launch flag is persisted
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WISHLIST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `WISHLIST__ROUTES__APP_ENTRY=/(tabs)` -> `routes.app_entry = "/(tabs)"`
    /// - `WISHLIST__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WISHLIST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.routes.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "WISHLIST__ROUTES__AUTH_GROUP",
        "WISHLIST__ROUTES__AUTH_ENTRY",
        "WISHLIST__STORAGE__LAUNCH_FLAG_PATH",
        "WISHLIST__LOGGING__FILTER",
        "WISHLIST__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.routes.app_entry, "/(tabs)");
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WISHLIST__STORAGE__LAUNCH_FLAG_PATH", "/tmp/wishlist/launch.yaml");
        env::set_var("WISHLIST__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.storage.launch_flag_path,
            PathBuf::from("/tmp/wishlist/launch.yaml")
        );
        assert!(config.logging.json);
    }

    #[test]
    fn test_inconsistent_routes_fail_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WISHLIST__ROUTES__AUTH_GROUP", "(login)");
        let result = AppConfig::load();
        clear_env();

        // auth_entry still points into "(auth)"
        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidRoutes(_))
        ));
    }

    #[test]
    fn test_consistent_route_overrides_validate() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WISHLIST__ROUTES__AUTH_GROUP", "(login)");
        env::set_var("WISHLIST__ROUTES__AUTH_ENTRY", "/(login)/sign-in");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
        let table = config.routes.route_table().unwrap();
        assert_eq!(table.entry(crate::domain::navigation::Section::Auth).as_str(), "/(login)/sign-in");
    }
}
