//! Configuration persistence for screenreview settings

use std::path::PathBuf;

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::iced::Color;
use serde::{Deserialize, Serialize};

use crate::domain::FrameLayout;
use crate::session::state::DEFAULT_MARKER_RADIUS;

/// Environment variable that overrides the configured screen directory
pub const ASSETS_ENV: &str = "SCREENREVIEW_ASSETS";

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for MarkerColor {
    fn default() -> Self {
        // Orange-red (#ff4500)
        Self {
            r: 1.0,
            g: 0.271,
            b: 0.0,
        }
    }
}

impl From<MarkerColor> for Color {
    fn from(c: MarkerColor) -> Self {
        Color::from_rgb(c.r, c.g, c.b)
    }
}

impl From<Color> for MarkerColor {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct ReviewConfig {
    /// Directory holding the screen images (None = per-user data directory)
    pub assets_dir: Option<PathBuf>,
    /// File name prefix of the numbered screen images
    pub asset_prefix: String,
    /// File extension of the screen images
    pub asset_extension: String,
    /// Decorative device frame drawn behind the screen (None = no frame)
    pub bezel_path: Option<PathBuf>,
    /// Color of feedback markers
    pub marker_color: MarkerColor,
    /// Distance in logical pixels within which a marker counts as hit
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f32,
    /// Device frame width in logical pixels
    pub frame_width: f32,
    /// Device frame height in logical pixels
    pub frame_height: f32,
    /// Review brief describing the product under review
    #[serde(default)]
    pub brief_path: Option<PathBuf>,
    /// Where to write the feedback report when the session ends
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

fn default_marker_radius() -> f32 {
    DEFAULT_MARKER_RADIUS
}

impl ReviewConfig {
    /// Configuration ID for cosmic-config
    pub const ID: &'static str = "io.github.screenreview";

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => match Self::get_entry(&config) {
                Ok(entry) => entry,
                Err((errs, entry)) => {
                    log::warn!("Error loading config, using defaults: {:?}", errs);
                    entry
                }
            },
            Err(err) => {
                log::warn!("Could not create config handler: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => {
                if let Err(err) = self.write_entry(&config) {
                    log::error!("Failed to save config: {:?}", err);
                }
            }
            Err(err) => {
                log::error!("Could not create config handler for saving: {:?}", err);
            }
        }
    }

    /// Screen directory, honoring the environment override
    pub fn assets_dir(&self) -> PathBuf {
        self.assets_dir_with(std::env::var_os(ASSETS_ENV).map(PathBuf::from))
    }

    fn assets_dir_with(&self, env_override: Option<PathBuf>) -> PathBuf {
        env_override
            .or_else(|| self.assets_dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join("screenreview").join("screens")))
            .unwrap_or_else(|| PathBuf::from("screens"))
    }

    pub fn frame_layout(&self) -> FrameLayout {
        FrameLayout::new(self.frame_width, self.frame_height)
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        let frame = FrameLayout::default();
        Self {
            assets_dir: None,
            asset_prefix: "app-image".to_string(),
            asset_extension: "png".to_string(),
            bezel_path: None,
            marker_color: MarkerColor::default(),
            marker_radius: default_marker_radius(),
            frame_width: frame.frame_width,
            frame_height: frame.frame_height,
            brief_path: None,
            report_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let config = ReviewConfig {
            assets_dir: Some(PathBuf::from("/configured")),
            ..Default::default()
        };
        assert_eq!(
            config.assets_dir_with(Some(PathBuf::from("/from-env"))),
            PathBuf::from("/from-env")
        );
        assert_eq!(config.assets_dir_with(None), PathBuf::from("/configured"));
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let json = r#"{
            "assets_dir": null,
            "asset_prefix": "shot-",
            "asset_extension": "jpg",
            "bezel_path": null,
            "marker_color": { "r": 0.0, "g": 0.0, "b": 1.0 },
            "frame_width": 400.0,
            "frame_height": 800.0
        }"#;
        let config: ReviewConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.marker_radius, DEFAULT_MARKER_RADIUS);
        assert!(config.report_path.is_none());
        assert_eq!(config.asset_prefix, "shot-");
    }

    #[test]
    fn test_marker_color_round_trips_through_iced() {
        let color: Color = MarkerColor::default().into();
        assert_eq!(MarkerColor::from(color), MarkerColor::default());
    }
}
