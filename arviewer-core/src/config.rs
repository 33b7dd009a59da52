//! Viewer configuration
//!
//! Every field has a default matching the stock viewer, so an empty JSON
//! object (or no config at all) yields the standard behaviour.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Press duration separating a tap from a long press, in milliseconds
    pub long_press_ms: u64,
    /// Model asset naming and paths
    pub assets: AssetConfig,
    /// User-agent markers that select touch input
    pub mobile_markers: Vec<String>,
    /// Presentational attributes of the model element
    pub presentation: ModelPresentation,
    /// DOM id given to the model element
    pub model_element_id: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            long_press_ms: 500,
            assets: AssetConfig::default(),
            mobile_markers: ["iPhone", "iPad", "iPod", "Android"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            presentation: ModelPresentation::default(),
            model_element_id: "arModel".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Parse a config from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an optional JSON config; blank or absent input gives the default
    pub fn from_optional_json(json: Option<&str>) -> Result<Self> {
        match json.map(str::trim) {
            Some(s) if !s.is_empty() => Self::from_json(s),
            _ => Ok(Self::default()),
        }
    }

    /// Long-press threshold as a duration
    pub fn long_press_threshold(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    /// Resolved log level, falling back to `Info` for unknown names
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Asset names and path template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Prefix prepended to every asset name
    pub root: String,
    /// Extension for the `src` model format
    pub model_extension: String,
    /// Extension for the `ios-src` model format
    pub ios_extension: String,
    /// Asset shown after a tap
    pub idle: String,
    /// Asset shown while a long press is held
    pub long_press_active: String,
    /// Asset shown after a long press is released, and initially
    pub long_press_result: String,
    /// Asset used for the iOS quick-look pipeline
    pub ios: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: "/".to_string(),
            model_extension: "glb".to_string(),
            ios_extension: "usdz".to_string(),
            idle: "base_basic_shaded_idle".to_string(),
            long_press_active: "base_basic_shaded_run".to_string(),
            long_press_result: "base_basic_shaded".to_string(),
            ios: "base_basic_shaded_idle".to_string(),
        }
    }
}

/// Static attributes of the `<model-viewer>` element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPresentation {
    pub camera_controls: bool,
    pub autoplay: bool,
    pub shadow_intensity: f32,
    pub interaction_prompt: String,
    pub background_color: String,
}

impl Default for ModelPresentation {
    fn default() -> Self {
        Self {
            camera_controls: true,
            autoplay: true,
            shadow_intensity: 1.0,
            interaction_prompt: "none".to_string(),
            background_color: "transparent".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_stock_viewer() {
        let config = ViewerConfig::default();
        assert_eq!(config.long_press_ms, 500);
        assert_eq!(config.long_press_threshold(), Duration::from_millis(500));
        assert_eq!(config.model_element_id, "arModel");
        assert_eq!(config.mobile_markers, vec!["iPhone", "iPad", "iPod", "Android"]);
        assert_eq!(config.assets.long_press_active, "base_basic_shaded_run");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            ViewerConfig::from_json(r#"{ "long_press_ms": 800, "assets": { "root": "/models/" } }"#)
                .unwrap();
        assert_eq!(config.long_press_ms, 800);
        assert_eq!(config.assets.root, "/models/");
        assert_eq!(config.assets.idle, "base_basic_shaded_idle");
        assert!(config.presentation.camera_controls);
    }

    #[test]
    fn blank_optional_json_is_default() {
        assert_eq!(ViewerConfig::from_optional_json(None).unwrap(), ViewerConfig::default());
        assert_eq!(
            ViewerConfig::from_optional_json(Some("   ")).unwrap(),
            ViewerConfig::default()
        );
    }

    #[test]
    fn invalid_json_is_config_error() {
        let err = ViewerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::ViewerError::Config(_)));
    }

    #[test]
    fn log_level_parsing() {
        let mut config = ViewerConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
