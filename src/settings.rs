//! Engine settings
//!
//! Everything here has a sensible default, so a partial JSON document (or
//! none at all) is enough to configure a session.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play surface ===
    /// Width of the play area (pixels)
    pub surface_width: f32,
    /// Height of the play area; drops below this are gone
    pub surface_height: f32,
    /// Width of a drop sprite
    pub drop_width: f32,
    /// Vertical spawn position (negative = above the top edge)
    pub spawn_offset: f32,

    // === Cadence ===
    /// Physics tick period (ms)
    pub tick_ms: u64,
    /// Countdown period (ms)
    pub countdown_ms: u64,
    /// Grace period before a collected drop is removed (ms)
    pub collect_grace_ms: u64,

    // === Determinism ===
    /// Seed for drop placement and kind rolls
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            drop_width: DROP_WIDTH,
            spawn_offset: SPAWN_OFFSET,

            tick_ms: TICK_MS,
            countdown_ms: COUNTDOWN_MS,
            collect_grace_ms: COLLECT_GRACE_MS,

            seed: 0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_positive = |v: f32| v.is_finite() && v > 0.0;
        if !finite_positive(self.surface_width) || !finite_positive(self.surface_height) {
            return Err(ConfigError::InvalidSetting(format!(
                "surface must be finite and positive, got {}x{}",
                self.surface_width, self.surface_height
            )));
        }
        if !(self.drop_width.is_finite() && self.drop_width >= 0.0) {
            return Err(ConfigError::InvalidSetting(format!(
                "drop_width must be finite and not negative, got {}",
                self.drop_width
            )));
        }
        if !self.spawn_offset.is_finite() {
            return Err(ConfigError::InvalidSetting("spawn_offset must be finite".into()));
        }
        if self.tick_ms == 0 || self.countdown_ms == 0 {
            return Err(ConfigError::InvalidSetting(
                "tick_ms and countdown_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Largest x a drop may spawn at
    pub fn max_spawn_x(&self) -> f32 {
        (self.surface_width - self.drop_width).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "surface_width": 400 }"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.surface_width, 400.0);
        assert_eq!(settings.surface_height, SURFACE_HEIGHT);
        assert_eq!(settings.tick_ms, TICK_MS);
    }

    #[test]
    fn test_rejects_zero_cadence() {
        let err = Settings::from_json(r#"{ "tick_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting(_)));
    }

    #[test]
    fn test_rejects_bad_surface() {
        let err = Settings::from_json(r#"{ "surface_height": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting(_)));
    }

    #[test]
    fn test_rejects_infinite_surface() {
        let settings = Settings {
            surface_width: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidSetting(_))));

        let settings = Settings {
            surface_height: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidSetting(_))));
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_narrow_surface_clamps_spawn_range() {
        let settings = Settings {
            surface_width: 30.0,
            ..Default::default()
        };
        assert_eq!(settings.max_spawn_x(), 0.0);
        assert_eq!(Settings::default().max_spawn_x(), SURFACE_WIDTH - DROP_WIDTH);
    }
}
