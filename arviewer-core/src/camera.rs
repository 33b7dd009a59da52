//! Camera feed acquisition with rear-to-front fallback
//!
//! The feed asks the capture source for the rear camera first and falls back
//! to the front camera once. A final failure is logged and absorbed: the
//! viewer keeps running without a background.
//!
//! The stream is owned by the feed and stopped on `release` (or drop). A
//! request that resolves after the video surface has been detached is not
//! bound; its stream is stopped straight away.

use crate::error::{Result, ViewerError};
use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Camera orientation requested from the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacingMode {
    /// Rear-facing camera
    Environment,
    /// Front-facing camera
    User,
}

impl FacingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FacingMode::Environment => "environment",
            FacingMode::User => "user",
        }
    }
}

impl fmt::Display for FacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Video-only capture request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub facing: FacingMode,
    /// Whether the facing mode is a hard requirement
    pub exact: bool,
}

impl CaptureConstraints {
    /// `{ facingMode: { exact: "environment" } }`
    pub fn rear() -> Self {
        Self {
            facing: FacingMode::Environment,
            exact: true,
        }
    }

    /// `{ facingMode: "user" }`
    pub fn front() -> Self {
        Self {
            facing: FacingMode::User,
            exact: false,
        }
    }

    /// The `video` member of a `MediaStreamConstraints` dictionary
    pub fn video_json(&self) -> serde_json::Value {
        if self.exact {
            json!({ "facingMode": { "exact": self.facing.as_str() } })
        } else {
            json!({ "facingMode": self.facing.as_str() })
        }
    }
}

/// Live video source handed out by a capture source
pub trait CameraStream {
    /// Stop every track, releasing the camera device
    fn stop(&self);
}

/// Something that can open a camera stream
#[async_trait(?Send)]
pub trait MediaCaptureSource {
    type Stream: CameraStream;

    async fn acquire_stream(&self, constraints: &CaptureConstraints) -> Result<Self::Stream>;
}

/// Display target for a camera stream
pub trait VideoSurface<T> {
    fn bind(&mut self, stream: &T);
    fn unbind(&mut self);
}

/// Shared, detachable reference to the video surface.
///
/// Cloned into whoever needs to check that the surface still exists; once
/// detached every clone sees it gone.
pub struct SurfaceSlot<T> {
    inner: Rc<RefCell<Option<Box<dyn VideoSurface<T>>>>>,
}

impl<T> Clone for SurfaceSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> SurfaceSlot<T> {
    pub fn new(surface: Box<dyn VideoSurface<T>>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Some(surface))),
        }
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Bind the stream if a surface is still attached
    pub fn bind(&self, stream: &T) -> bool {
        match self.inner.borrow_mut().as_mut() {
            Some(surface) => {
                surface.bind(stream);
                true
            }
            None => false,
        }
    }

    pub fn unbind(&self) {
        if let Some(surface) = self.inner.borrow_mut().as_mut() {
            surface.unbind();
        }
    }

    pub fn detach(&self) -> Option<Box<dyn VideoSurface<T>>> {
        self.inner.borrow_mut().take()
    }
}

/// Outcome of camera acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// Not started, or request still in flight
    Pending,
    /// Bound to the rear camera
    Rear,
    /// Bound to the front camera after the rear request failed
    Front,
    /// Both requests failed; no background
    Unavailable,
    /// A stream arrived after teardown and was stopped unbound
    Discarded,
    /// A bound stream was stopped by `release`
    Released,
}

impl FeedStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedStatus::Pending => "pending",
            FeedStatus::Rear => "rear",
            FeedStatus::Front => "front",
            FeedStatus::Unavailable => "unavailable",
            FeedStatus::Discarded => "discarded",
            FeedStatus::Released => "released",
        }
    }
}

/// Background camera feed
pub struct CameraFeed<S: MediaCaptureSource> {
    source: S,
    surface: SurfaceSlot<S::Stream>,
    stream: RefCell<Option<S::Stream>>,
    status: Cell<FeedStatus>,
}

impl<S: MediaCaptureSource> CameraFeed<S> {
    pub fn new(source: S, surface: SurfaceSlot<S::Stream>) -> Self {
        Self {
            source,
            surface,
            stream: RefCell::new(None),
            status: Cell::new(FeedStatus::Pending),
        }
    }

    pub fn status(&self) -> FeedStatus {
        self.status.get()
    }

    pub fn has_stream(&self) -> bool {
        self.stream.borrow().is_some()
    }

    /// Acquire a camera and bind it to the surface.
    ///
    /// Never fails: every camera error ends in `FeedStatus::Unavailable`.
    pub async fn start(&self) -> FeedStatus {
        let rear = CaptureConstraints::rear();
        let (stream, status) = match self.source.acquire_stream(&rear).await {
            Ok(stream) => (stream, FeedStatus::Rear),
            Err(err) => {
                debug!("Rear camera unavailable, falling back to front camera: {}", err);
                let front = CaptureConstraints::front();
                match self.source.acquire_stream(&front).await {
                    Ok(stream) => (stream, FeedStatus::Front),
                    Err(err) => {
                        warn!("Unable to access camera: {}", err);
                        self.status.set(FeedStatus::Unavailable);
                        return FeedStatus::Unavailable;
                    }
                }
            }
        };

        self.attach(stream, status)
    }

    fn attach(&self, stream: S::Stream, status: FeedStatus) -> FeedStatus {
        if !self.surface.bind(&stream) {
            debug!("Video surface gone before camera resolved, stopping stream");
            stream.stop();
            self.status.set(FeedStatus::Discarded);
            return FeedStatus::Discarded;
        }

        if let Some(previous) = self.stream.borrow_mut().replace(stream) {
            previous.stop();
        }
        info!("Camera feed bound ({})", status.as_str());
        self.status.set(status);
        status
    }

    /// Stop the stream and detach the surface. Safe to call repeatedly.
    pub fn release(&self) {
        self.surface.unbind();
        self.surface.detach();

        if let Some(stream) = self.stream.borrow_mut().take() {
            stream.stop();
            self.status.set(FeedStatus::Released);
            debug!("Camera stream released");
        }
    }
}

impl<S: MediaCaptureSource> Drop for CameraFeed<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Convenience for sources that report plain string errors
pub fn capture_error(constraints: &CaptureConstraints, reason: impl Into<String>) -> ViewerError {
    ViewerError::camera(constraints.facing, reason)
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
