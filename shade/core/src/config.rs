//! Shade Configuration
//!
//! Timing configuration for the header slide animations, loadable from a
//! TOML file with environment-variable overrides.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Built-in defaults
//!
//! # Example Configuration
//!
//! ```toml
//! [timings]
//! slide_in_ms = 448
//! slide_out_ms = 360
//! easing = "FastOutSlowIn"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::AnimationTimings;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Shade coordination configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeConfig {
    /// Header slide timings
    #[serde(default)]
    pub timings: AnimationTimings,
}

impl ShadeConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment
    /// overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from defaults plus environment overrides
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply `SHADE_SLIDE_IN_MS` / `SHADE_SLIDE_OUT_MS` overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(env_ms("SHADE_SLIDE_IN_MS"), env_ms("SHADE_SLIDE_OUT_MS"));
    }

    /// Apply explicit override values; `None` leaves a field untouched
    fn apply_overrides(&mut self, slide_in_ms: Option<u64>, slide_out_ms: Option<u64>) {
        if let Some(ms) = slide_in_ms {
            self.timings.slide_in_ms = ms;
        }
        if let Some(ms) = slide_out_ms {
            self.timings.slide_out_ms = ms;
        }
    }

    /// Check configuration invariants
    fn validate(&self) -> Result<(), ConfigError> {
        if self.timings.slide_in_ms == 0 {
            return Err(ConfigError::ValidationError(
                "slide_in_ms must be greater than 0".to_string(),
            ));
        }
        if self.timings.slide_out_ms == 0 {
            return Err(ConfigError::ValidationError(
                "slide_out_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_ms(var: &str) -> Option<u64> {
    std::env::var(var).ok().and_then(|v| v.parse().ok())
}
