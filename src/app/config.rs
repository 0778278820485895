//! Configuration Management

use crate::filter::motion::{
    DEFAULT_DIRECTION_ANGLE_THRESHOLD_DEG, DEFAULT_IDLE_MAGNITUDE_THRESHOLD,
};
use crate::recognizer::database::DEFAULT_REJECTION_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Trace filtering settings
    pub filter: FilterConfig,
    /// Matching settings
    pub matching: MatchingConfig,
}

/// Trace filtering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Movements with magnitude at or below this are idle noise
    pub idle_magnitude_threshold: f64,
    /// Direction-collapse angle threshold (degrees)
    pub direction_angle_threshold_deg: f64,
}

/// Matching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Maximum acceptable best-match distance
    pub rejection_threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            idle_magnitude_threshold: DEFAULT_IDLE_MAGNITUDE_THRESHOLD,
            direction_angle_threshold_deg: DEFAULT_DIRECTION_ANGLE_THRESHOLD_DEG,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            rejection_threshold: DEFAULT_REJECTION_THRESHOLD,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.filter.idle_magnitude_threshold < 0.0 {
            return Err(crate::Error::Config(format!(
                "idle_magnitude_threshold must be >= 0, got {}",
                self.filter.idle_magnitude_threshold
            )));
        }
        if !(0.0..=180.0).contains(&self.filter.direction_angle_threshold_deg) {
            return Err(crate::Error::Config(format!(
                "direction_angle_threshold_deg must be in [0, 180], got {}",
                self.filter.direction_angle_threshold_deg
            )));
        }
        if self.matching.rejection_threshold <= 0.0 {
            return Err(crate::Error::Config(format!(
                "rejection_threshold must be > 0, got {}",
                self.matching.rejection_threshold
            )));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".gesture_recognizer").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
