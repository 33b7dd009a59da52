//! ARViewer web - browser bindings for the AR model viewer
//!
//! Mounts a camera background and a `<model-viewer>` element into a host
//! element, then drives the model from press gestures. All browser access
//! lives here; the logic itself is in `arviewer-core`.
//!
//! ```js
//! import init, { ArViewer } from "./arviewer_web.js";
//! await init();
//! const viewer = new ArViewer();
//! viewer.mount("app", null);
//! ```

#[cfg(target_arch = "wasm32")]
pub mod camera;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub mod gesture;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

#[cfg(target_arch = "wasm32")]
pub use viewer::ArViewer;

pub use arviewer_core::{FeedStatus, InputFamily, ViewerConfig};

/// Install the panic hook and console logger. Later calls are no-ops.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level).ok();
}

/// Best-effort human-readable text for a thrown JS value
#[cfg(target_arch = "wasm32")]
pub fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(error.name());
        let message = String::from(error.message());
        return if message.is_empty() {
            name
        } else {
            format!("{}: {}", name, message)
        };
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
