//! Declarative description of the viewer's DOM
//!
//! The camera video sits under the model element, both covering the full
//! viewport inside a relatively positioned container.

use crate::assets::AssetCatalog;
use crate::config::ViewerConfig;

/// One element to create
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    pub tag: &'static str,
    pub id: Option<String>,
    /// Attributes in insertion order; boolean attributes carry an empty value
    pub attributes: Vec<(String, String)>,
    pub style: Vec<(&'static str, String)>,
}

impl ElementSpec {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            attributes: Vec::new(),
            style: Vec::new(),
        }
    }

    fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    fn flag(self, name: &str, enabled: bool) -> Self {
        if enabled {
            self.attr(name, "")
        } else {
            self
        }
    }

    fn css(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    /// Inline `style` attribute value
    pub fn style_attribute(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Container, camera background and model layer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerLayout {
    pub container: ElementSpec,
    pub video: ElementSpec,
    pub model: ElementSpec,
}

impl ViewerLayout {
    pub fn from_config(config: &ViewerConfig) -> Self {
        let catalog = AssetCatalog::from_config(&config.assets);
        let presentation = &config.presentation;

        let container = ElementSpec::new("div")
            .css("position", "relative")
            .css("width", "100vw")
            .css("height", "100vh")
            .css("overflow", "hidden");

        let video = ElementSpec::new("video")
            .flag("autoplay", true)
            .flag("playsinline", true)
            .flag("muted", true)
            .css("position", "absolute")
            .css("width", "100vw")
            .css("height", "100vh")
            .css("object-fit", "cover")
            .css("z-index", "1");

        let mut model = ElementSpec::new("model-viewer")
            .attr("src", catalog.initial_src())
            .attr("ios-src", catalog.ios_src())
            .flag("camera-controls", presentation.camera_controls)
            .flag("autoplay", presentation.autoplay)
            .attr("shadow-intensity", presentation.shadow_intensity.to_string())
            .attr("interaction-prompt", presentation.interaction_prompt.as_str())
            .attr("background-color", presentation.background_color.as_str())
            .css("position", "absolute")
            .css("top", "0")
            .css("left", "0")
            .css("width", "100vw")
            .css("height", "100vh")
            .css("z-index", "2")
            .css("background", "transparent");
        model.id = Some(config.model_element_id.clone());

        Self {
            container,
            video,
            model,
        }
    }
}

impl Default for ViewerLayout {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}
