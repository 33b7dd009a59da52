//! The `ArViewer` component exposed to JavaScript

use crate::camera::{BrowserMediaSource, VideoElementSurface};
use crate::dom::{host_element, MountedLayout};
use crate::gesture::GestureBinding;
use crate::{describe_js_error, init_logging};
use arviewer_core::{
    CameraFeed, FeedStatus, InputFamily, SurfaceSlot, ViewerConfig, ViewerError, ViewerLayout,
};
use log::info;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

struct Mounted {
    layout: MountedLayout,
    feed: Rc<CameraFeed<BrowserMediaSource>>,
    gestures: GestureBinding,
}

/// Camera background with a press-switchable 3D model on top
#[wasm_bindgen]
pub struct ArViewer {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ArViewer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ArViewer {
        ArViewer { mounted: None }
    }

    /// Mount into the element with id `host_id`, replacing any previous mount.
    ///
    /// `config_json` may be omitted; missing fields take their defaults.
    pub fn mount(&mut self, host_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
        let config = ViewerConfig::from_optional_json(config_json.as_deref()).map_err(to_js)?;
        init_logging(config.log_level());

        let window = web_sys::window()
            .ok_or_else(|| to_js(ViewerError::MissingElement("window".to_string())))?;
        let document = window
            .document()
            .ok_or_else(|| to_js(ViewerError::MissingElement("document".to_string())))?;
        let host = host_element(&document, host_id).map_err(to_js)?;
        let user_agent = window.navigator().user_agent().unwrap_or_default();

        self.mount_in(&host, config, &user_agent).map_err(to_js)
    }

    /// Remove listeners, stop the camera and take the viewer out of the page
    pub fn unmount(&mut self) {
        if let Some(mut mounted) = self.mounted.take() {
            mounted.gestures.detach();
            mounted.feed.release();
            mounted.layout.remove();
            info!("AR viewer unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// `pending`, `rear`, `front`, `unavailable`, `discarded`, `released` or `unmounted`
    pub fn camera_status(&self) -> String {
        match &self.mounted {
            Some(mounted) => mounted.feed.status().as_str().to_string(),
            None => "unmounted".to_string(),
        }
    }

    /// `touch` or `pointer` while mounted
    pub fn input_family(&self) -> Option<String> {
        self.mounted
            .as_ref()
            .map(|m| m.gestures.family().name().to_string())
    }
}

impl ArViewer {
    /// Mount into `host` with an explicit config and platform string
    pub fn mount_in(
        &mut self,
        host: &Element,
        config: ViewerConfig,
        user_agent: &str,
    ) -> Result<(), ViewerError> {
        self.unmount();

        let window =
            web_sys::window().ok_or_else(|| ViewerError::MissingElement("window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ViewerError::MissingElement("document".to_string()))?;

        let layout = MountedLayout::mount(&document, host, &ViewerLayout::from_config(&config))?;

        let family = InputFamily::detect(user_agent, &config.mobile_markers);
        let gestures = match GestureBinding::attach(&window, layout.model.clone(), family, &config)
        {
            Ok(gestures) => gestures,
            Err(err) => {
                layout.remove();
                return Err(ViewerError::Dom(describe_js_error(&err)));
            }
        };

        let surface = SurfaceSlot::new(Box::new(VideoElementSurface::new(layout.video.clone())));
        let feed = Rc::new(CameraFeed::new(
            BrowserMediaSource::new(window.navigator()),
            surface,
        ));
        {
            let feed = feed.clone();
            wasm_bindgen_futures::spawn_local(async move {
                feed.start().await;
            });
        }

        info!("AR viewer mounted with {} input", family.name());
        self.mounted = Some(Mounted {
            layout,
            feed,
            gestures,
        });
        Ok(())
    }

    /// Current model `src`, if mounted
    pub fn model_src(&self) -> Option<String> {
        self.mounted
            .as_ref()
            .and_then(|m| m.layout.model.get_attribute("src"))
    }

    pub fn camera_feed_status(&self) -> Option<FeedStatus> {
        self.mounted.as_ref().map(|m| m.feed.status())
    }
}

impl Default for ArViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ArViewer {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn to_js(err: ViewerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
