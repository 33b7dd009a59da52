//! ARViewer core - camera feed and gesture logic for the AR model viewer
//!
//! Everything here is independent of the browser. Camera access, the model
//! element and timers are reached through the traits in [`camera`] and
//! [`gesture`], which `arviewer-web` implements on top of `web-sys`.

pub mod assets;
pub mod camera;
pub mod config;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod platform;

pub use assets::{AssetCatalog, AssetVariant, ModelAssetName};
pub use camera::{
    CameraFeed, CameraStream, CaptureConstraints, FacingMode, FeedStatus, MediaCaptureSource,
    SurfaceSlot, VideoSurface,
};
pub use config::{AssetConfig, ModelPresentation, ViewerConfig};
pub use error::{Result, ViewerError};
pub use gesture::{
    GestureState, ModelDisplaySurface, ModelGestureController, PressState, PressTimer, TimerId,
};
pub use layout::{ElementSpec, ViewerLayout};
pub use platform::InputFamily;
