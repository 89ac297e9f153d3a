//! Game settings and court validation
//!
//! Settings are plain serde data. Turning them into a [`Court`] is where bad
//! dimensions get rejected, before any engine exists.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Court;

/// Why settings could not be loaded or turned into a court
#[derive(Debug)]
pub enum SettingsError {
    /// Settings document is not valid JSON for [`Settings`]
    Parse(serde_json::Error),
    /// Settings file could not be read
    Io(std::io::Error),
    /// A dimension is NaN, infinite, or not positive
    InvalidDimension { name: &'static str, value: f32 },
    /// Paddle does not fit inside the court
    PaddleTooWide { paddle_width: f32, court_width: f32 },
    /// Ball does not fit inside the court
    BallTooLarge { ball_radius: f32 },
    /// Starting position lies outside the court
    StartOutOfCourt { offset: f32 },
    /// Timer period of zero
    ZeroTickPeriod,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "invalid settings: {}", e),
            SettingsError::Io(e) => write!(f, "cannot read settings: {}", e),
            SettingsError::InvalidDimension { name, value } => {
                write!(f, "{} must be finite and positive, got {}", name, value)
            }
            SettingsError::PaddleTooWide {
                paddle_width,
                court_width,
            } => write!(
                f,
                "paddle width {} exceeds court width {}",
                paddle_width, court_width
            ),
            SettingsError::BallTooLarge { ball_radius } => {
                write!(f, "ball radius {} does not fit in the court", ball_radius)
            }
            SettingsError::StartOutOfCourt { offset } => {
                write!(f, "ball start offset {} is outside the court", offset)
            }
            SettingsError::ZeroTickPeriod => write!(f, "tick period must be at least 1 ms"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Ball ===
    pub ball_radius: f32,
    /// Initial displacement per tick
    pub ball_velocity: Vec2,
    /// Initial distance above the bottom edge
    pub ball_start_offset: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Displacement per tick while a direction is held
    pub paddle_step: f32,

    // === Timing ===
    pub tick_period_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            ball_velocity: Vec2::new(BALL_START_VX, BALL_START_VY),
            ball_start_offset: BALL_START_OFFSET,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,

            tick_period_ms: TICK_PERIOD_MS,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<f32, SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SettingsError::InvalidDimension { name, value })
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Timer period between ticks
    pub fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_period_ms)
    }

    /// Build the court for a drawing surface of `width` x `height`
    pub fn court(&self, width: f32, height: f32) -> Result<Court, SettingsError> {
        let width = positive("court width", width)?;
        let height = positive("court height", height)?;
        let ball_radius = positive("ball radius", self.ball_radius)?;
        let paddle_width = positive("paddle width", self.paddle_width)?;
        let paddle_height = positive("paddle height", self.paddle_height)?;
        let paddle_step = positive("paddle step", self.paddle_step)?;

        if !self.ball_velocity.is_finite() {
            return Err(SettingsError::InvalidDimension {
                name: "ball velocity",
                value: if self.ball_velocity.x.is_finite() {
                    self.ball_velocity.y
                } else {
                    self.ball_velocity.x
                },
            });
        }
        if paddle_width > width {
            return Err(SettingsError::PaddleTooWide {
                paddle_width,
                court_width: width,
            });
        }
        if 2.0 * ball_radius >= width || 2.0 * ball_radius >= height {
            return Err(SettingsError::BallTooLarge { ball_radius });
        }
        let offset = self.ball_start_offset;
        if !offset.is_finite() || offset < ball_radius || offset > height - ball_radius {
            return Err(SettingsError::StartOutOfCourt { offset });
        }
        if self.tick_period_ms == 0 {
            return Err(SettingsError::ZeroTickPeriod);
        }

        Ok(Court {
            width,
            height,
            ball_radius,
            paddle_width,
            paddle_height,
            paddle_step,
            ball_velocity: self.ball_velocity,
            ball_start_offset: offset,
        })
    }

    /// Environment variable naming a JSON settings file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub const ENV_VAR: &'static str = "COURT_BALL_SETTINGS";

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from the file named by `COURT_BALL_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "court_ball_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_court() {
        let court = Settings::default().court(480.0, 320.0).unwrap();
        assert_eq!(court.width(), 480.0);
        assert_eq!(court.height(), 320.0);
        assert_eq!(court.ball_radius(), 10.0);
        assert_eq!(court.paddle_width(), 75.0);
        assert_eq!(court.paddle_height(), 10.0);
        assert_eq!(court.paddle_step(), 7.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "paddle_width": 120.0 }"#).unwrap();
        assert_eq!(settings.paddle_width, 120.0);
        assert_eq!(settings.ball_radius, BALL_RADIUS);
        assert_eq!(settings.tick_period_ms, TICK_PERIOD_MS);
    }

    #[test]
    fn test_json_roundtrip_preserves_settings() {
        let settings = Settings {
            paddle_step: 4.5,
            ball_velocity: Vec2::new(3.0, -1.0),
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Settings::from_json("{ paddle_width: }").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_court_dimensions() {
        let settings = Settings::default();
        assert!(matches!(
            settings.court(-1.0, 320.0),
            Err(SettingsError::InvalidDimension {
                name: "court width",
                ..
            })
        ));
        assert!(matches!(
            settings.court(480.0, f32::NAN),
            Err(SettingsError::InvalidDimension {
                name: "court height",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_paddle_wider_than_court() {
        let err = Settings::default().court(60.0, 320.0).unwrap_err();
        assert!(matches!(err, SettingsError::PaddleTooWide { .. }));
    }

    #[test]
    fn test_rejects_oversized_ball() {
        let settings = Settings {
            ball_radius: 200.0,
            ..Settings::default()
        };
        let err = settings.court(480.0, 320.0).unwrap_err();
        assert!(matches!(err, SettingsError::BallTooLarge { .. }));
    }

    #[test]
    fn test_rejects_start_outside_court() {
        let settings = Settings {
            ball_start_offset: 400.0,
            ..Settings::default()
        };
        let err = settings.court(480.0, 320.0).unwrap_err();
        assert!(matches!(err, SettingsError::StartOutOfCourt { .. }));
    }

    #[test]
    fn test_rejects_zero_tick_period() {
        let settings = Settings {
            tick_period_ms: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.court(480.0, 320.0),
            Err(SettingsError::ZeroTickPeriod)
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = Settings::default().court(60.0, 320.0).unwrap_err();
        assert_eq!(err.to_string(), "paddle width 75 exceeds court width 60");
    }
}
