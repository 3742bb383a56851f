//! Animation settings
//!
//! Loaded from a JSON file. Every field has a default, so a partial file
//! (or none at all) works.

use std::fs;
use std::path::Path;
use std::time::Duration;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Orientation, OrientationError};
use crate::view::Palette;

/// Errors loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Orientation(#[from] OrientationError),

    #[error("Setting {field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Animation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for figure placement (random when absent)
    pub seed: Option<u64>,
    /// Number of figures in the collection
    pub figure_count: usize,

    // === Viewport ===
    pub viewport_width: i32,
    pub viewport_height: i32,

    // === Timing ===
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Speed slider value (5 - 125, 25 = initial velocities)
    pub speed: u32,
    /// How long the headless runner animates before dumping a frame
    pub run_seconds: f32,

    // === Look ===
    pub palette: Palette,
    /// Orientation of each triangle's unmirrored copy
    pub triangle_orientation: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            figure_count: FIGURE_COUNT,

            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            tick_interval_ms: TICK_INTERVAL_MS,
            speed: SPEED_DEFAULT,
            run_seconds: 2.0,

            palette: Palette::default(),
            triangle_orientation: Orientation::Up.as_str().to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the orientation tag and numeric ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.base_orientation()?;

        for (field, value) in [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ] {
            if !(1..=MAX_VIEWPORT).contains(&value) {
                return Err(SettingsError::OutOfRange {
                    field,
                    value: value.to_string(),
                    expected: "1 to 16384",
                });
            }
        }
        if !(1..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(SettingsError::OutOfRange {
                field: "tick_interval_ms",
                value: self.tick_interval_ms.to_string(),
                expected: "1 to 60000",
            });
        }
        if !(0.0..=MAX_RUN_SECONDS).contains(&self.run_seconds) {
            return Err(SettingsError::OutOfRange {
                field: "run_seconds",
                value: self.run_seconds.to_string(),
                expected: "0 to 86400",
            });
        }
        Ok(())
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn base_orientation(&self) -> Result<Orientation, OrientationError> {
        self.triangle_orientation.parse()
    }

    pub fn viewport(&self) -> IVec2 {
        IVec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.clamp(1, MAX_TICK_INTERVAL_MS))
    }

    /// Headless run time, capped at `MAX_RUN_SECONDS` (NaN runs for zero)
    pub fn run_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.run_seconds.clamp(0.0, MAX_RUN_SECONDS)).unwrap_or(Duration::ZERO)
    }

    /// The configured seed, or a fresh random one
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Color;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.viewport(), IVec2::new(600, 700));
        assert_eq!(settings.tick_interval(), Duration::from_millis(40));
        assert_eq!(settings.speed, 25);
        assert_eq!(settings.base_orientation(), Ok(Orientation::Up));
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(
            r#"{"seed": 7, "figure_count": 2, "palette": {"background": "gray"}}"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.effective_seed(), 7);
        assert_eq!(settings.figure_count, 2);
        assert_eq!(settings.palette.background, Color::Gray);
        assert_eq!(settings.palette.ball, Color::Green);
        assert_eq!(settings.viewport_width, VIEWPORT_WIDTH);
    }

    #[test]
    fn test_invalid_orientation_rejected() {
        let err = Settings::from_json(r#"{"triangle_orientation": "diagonal"}"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Orientation(OrientationError::Invalid(ref tag)) if tag == "diagonal"
        ));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let err = Settings::from_json(r#"{"run_seconds": 1e20}"#).unwrap_err();
        assert!(matches!(err, SettingsError::OutOfRange { field: "run_seconds", .. }));

        let err = Settings::from_json(r#"{"run_seconds": -1.0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::OutOfRange { field: "run_seconds", .. }));

        let err = Settings::from_json(r#"{"viewport_width": -2147483648}"#).unwrap_err();
        assert!(matches!(err, SettingsError::OutOfRange { field: "viewport_width", .. }));

        let err = Settings::from_json(r#"{"viewport_height": 0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::OutOfRange { field: "viewport_height", .. }));

        let err = Settings::from_json(r#"{"tick_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::OutOfRange { field: "tick_interval_ms", .. }));

        assert!(Settings::from_json(r#"{"run_seconds": 86400.0, "viewport_width": 16384}"#).is_ok());
    }

    #[test]
    fn test_run_duration_is_capped() {
        // Settings built in code skip validation
        let settings = Settings {
            run_seconds: 1e20,
            ..Default::default()
        };
        assert_eq!(settings.run_duration(), Duration::from_secs(86400));
        assert!(std::time::Instant::now().checked_add(settings.run_duration()).is_some());

        let settings = Settings {
            run_seconds: f32::NAN,
            ..Default::default()
        };
        assert_eq!(settings.run_duration(), Duration::ZERO);
        assert_eq!(Settings::default().run_duration(), Duration::from_secs(2));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("kaleidoscope-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(99),
            triangle_orientation: "left".to_string(),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Settings::load("/nonexistent/kaleidoscope.json"),
            Err(SettingsError::Io(_))
        ));
    }
}
