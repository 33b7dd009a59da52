//! `getUserMedia` capture source and `<video>` surface

use crate::describe_js_error;
use arviewer_core::camera::{
    capture_error, CameraStream, CaptureConstraints, MediaCaptureSource, VideoSurface,
};
use arviewer_core::Result;
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack, Navigator};

/// Camera access through `navigator.mediaDevices`
pub struct BrowserMediaSource {
    navigator: Navigator,
}

impl BrowserMediaSource {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

#[async_trait(?Send)]
impl MediaCaptureSource for BrowserMediaSource {
    type Stream = BrowserStream;

    async fn acquire_stream(&self, constraints: &CaptureConstraints) -> Result<BrowserStream> {
        let fail = |err: JsValue| capture_error(constraints, describe_js_error(&err));

        let devices = self.navigator.media_devices().map_err(fail)?;
        let video = js_sys::JSON::parse(&constraints.video_json().to_string()).map_err(fail)?;

        let request = MediaStreamConstraints::new();
        request.set_audio(&JsValue::FALSE);
        request.set_video(&video);

        let promise = devices
            .get_user_media_with_constraints(&request)
            .map_err(fail)?;
        let stream = JsFuture::from(promise).await.map_err(fail)?;
        let stream: MediaStream = stream
            .dyn_into()
            .map_err(|_| capture_error(constraints, "getUserMedia resolved without a MediaStream"))?;

        Ok(BrowserStream(stream))
    }
}

/// A live `MediaStream`
pub struct BrowserStream(pub MediaStream);

impl CameraStream for BrowserStream {
    fn stop(&self) {
        for track in self.0.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

/// The background `<video>` element
pub struct VideoElementSurface {
    video: HtmlVideoElement,
}

impl VideoElementSurface {
    pub fn new(video: HtmlVideoElement) -> Self {
        // The attribute alone does not mute an element created from script
        video.set_muted(true);
        Self { video }
    }
}

impl VideoSurface<BrowserStream> for VideoElementSurface {
    fn bind(&mut self, stream: &BrowserStream) {
        self.video.set_src_object(Some(&stream.0));
    }

    fn unbind(&mut self) {
        self.video.set_src_object(None);
    }
}
