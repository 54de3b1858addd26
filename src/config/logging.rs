//! Logging configuration

use serde::Deserialize;

use super::ValidationError;

/// Log output settings, applied once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `wishlist_navigation=debug`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.filter"));
        }
        tracing_subscriber::EnvFilter::try_new(&self.filter)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_text_output() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.filter, "info");
        assert!(!logging.json);
        assert!(logging.validate().is_ok());
    }

    #[test]
    fn accepts_per_target_directives() {
        let logging = LoggingConfig {
            filter: "warn,wishlist_navigation=debug".to_string(),
            json: true,
        };
        assert!(logging.validate().is_ok());
    }

    #[test]
    fn rejects_blank_filter() {
        let logging = LoggingConfig {
            filter: "  ".to_string(),
            json: false,
        };
        assert!(matches!(
            logging.validate(),
            Err(ValidationError::MissingRequired("logging.filter"))
        ));
    }
}
