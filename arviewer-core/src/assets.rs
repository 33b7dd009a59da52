//! Model asset variants and their resource paths

use crate::config::AssetConfig;
use std::fmt;

/// Visual state a model asset corresponds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetVariant {
    /// Shown after a short tap
    Idle,
    /// Shown while a long press is held
    LongPressActive,
    /// Shown after a long press is released; also the initial model
    LongPressResult,
}

/// Logical asset name, interpolated unchecked into a resource path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelAssetName(String);

impl ModelAssetName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelAssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps variants to names and names to paths
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    root: String,
    model_extension: String,
    ios_extension: String,
    idle: ModelAssetName,
    long_press_active: ModelAssetName,
    long_press_result: ModelAssetName,
    ios: ModelAssetName,
}

impl AssetCatalog {
    pub fn from_config(config: &AssetConfig) -> Self {
        Self {
            root: config.root.clone(),
            model_extension: config.model_extension.clone(),
            ios_extension: config.ios_extension.clone(),
            idle: ModelAssetName::new(config.idle.as_str()),
            long_press_active: ModelAssetName::new(config.long_press_active.as_str()),
            long_press_result: ModelAssetName::new(config.long_press_result.as_str()),
            ios: ModelAssetName::new(config.ios.as_str()),
        }
    }

    pub fn name(&self, variant: AssetVariant) -> &ModelAssetName {
        match variant {
            AssetVariant::Idle => &self.idle,
            AssetVariant::LongPressActive => &self.long_press_active,
            AssetVariant::LongPressResult => &self.long_press_result,
        }
    }

    /// `src` path for a variant, e.g. `/base_basic_shaded_idle.glb`
    pub fn src(&self, variant: AssetVariant) -> String {
        self.model_path(self.name(variant))
    }

    /// Build a model path for an arbitrary name
    pub fn model_path(&self, name: &ModelAssetName) -> String {
        format!("{}{}.{}", self.root, name, self.model_extension)
    }

    /// `src` of a freshly mounted viewer
    pub fn initial_src(&self) -> String {
        self.src(AssetVariant::LongPressResult)
    }

    /// `ios-src` path
    pub fn ios_src(&self) -> String {
        format!("{}{}.{}", self.root, self.ios, self.ios_extension)
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::from_config(&AssetConfig::default())
    }
}
