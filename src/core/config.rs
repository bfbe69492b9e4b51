//! Effect subsystem configuration
//!
//! Defaults applied while loading effect data, and where that data lives.
//! Can be read from a TOML file; every field is optional there.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::duration::TimeDuration;
use crate::core::error::{EffectError, Result};

/// Configuration for loading and applying effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Directory holding `effects.toml`, `species.toml`, `materials.toml`
    /// and `monsters.toml`
    pub data_dir: PathBuf,

    /// Duration cap for effect types that don't declare `max_duration`
    ///
    /// A year of game time, which is effectively "no cap" for anything
    /// a running game applies.
    pub default_max_duration: TimeDuration,

    /// Intensity cap for effect types that don't declare `max_intensity`
    ///
    /// Most effects are on/off, so the default is a single level.
    pub default_max_intensity: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            default_max_duration: TimeDuration::from_days(365),
            default_max_intensity: 1,
        }
    }
}

impl EffectsConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a config file; missing keys fall back to defaults
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content, &path.display().to_string())
    }

    pub fn parse_toml(content: &str, source: &str) -> Result<Self> {
        let config: EffectsConfig =
            toml::from_str(content).map_err(|e| EffectError::toml(source, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.default_max_intensity == 0 {
            return Err(EffectError::InvalidConfig(
                "default_max_intensity must be at least 1".into(),
            ));
        }

        if self.default_max_duration.is_zero() {
            return Err(EffectError::InvalidConfig(
                "default_max_duration must be positive".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<EffectsConfig> = OnceLock::new();

/// Get the global effects config (initializes with defaults if not set)
pub fn config() -> &'static EffectsConfig {
    CONFIG.get_or_init(EffectsConfig::default)
}

/// Set the global effects config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: EffectsConfig) -> std::result::Result<(), EffectsConfig> {
    CONFIG.set(config)
}
