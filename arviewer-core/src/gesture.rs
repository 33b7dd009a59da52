//! Press-duration gesture controller for the model element
//!
//! A press that is released before the long-press threshold counts as a tap
//! and shows the idle model. A press held past the threshold shows the
//! long-press-active model while held and the long-press-result model once
//! released.
//!
//! ```text
//!            press_start                timer fires
//!   Idle ──────────────────▶ Pressing ─────────────▶ LongPressConfirmed
//!    ▲                          │                           │
//!    └──────── press_end ───────┴──────── press_end ────────┘
//! ```
//!
//! Press-starts outside `Idle` are rejected and cancel the pending timer of
//! the unfinished cycle. Timer fires that do not belong to the current press
//! are ignored.

use crate::assets::{AssetCatalog, AssetVariant};
use crate::config::ViewerConfig;
use log::{debug, trace};
use std::time::Duration;

/// Handle to a scheduled one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

/// One-shot timer service.
///
/// Implementations call back into [`ModelGestureController::on_timer`] with
/// the returned id once the delay has elapsed.
pub trait PressTimer {
    fn start(&mut self, delay: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

/// The element displaying the 3D model
pub trait ModelDisplaySurface {
    fn set_displayed_asset(&mut self, src: &str);
}

/// Position in the press cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressState {
    Idle,
    Pressing,
    LongPressConfirmed,
}

/// Transient state of the current press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureState {
    pub timer: Option<TimerId>,
    pub is_long_press: bool,
}

/// Switches the displayed model according to press duration
pub struct ModelGestureController<D, T> {
    display: D,
    timer: T,
    catalog: AssetCatalog,
    threshold: Duration,
    state: PressState,
    gesture: GestureState,
    attached: bool,
}

impl<D: ModelDisplaySurface, T: PressTimer> ModelGestureController<D, T> {
    pub fn new(display: D, timer: T, catalog: AssetCatalog, threshold: Duration) -> Self {
        Self {
            display,
            timer,
            catalog,
            threshold,
            state: PressState::Idle,
            gesture: GestureState::default(),
            attached: true,
        }
    }

    pub fn from_config(display: D, timer: T, config: &ViewerConfig) -> Self {
        Self::new(
            display,
            timer,
            AssetCatalog::from_config(&config.assets),
            config.long_press_threshold(),
        )
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Begin a press. Returns `false` if the press was rejected.
    ///
    /// A rejected press still cancels the earlier cycle's pending timer, so a
    /// cycle whose release was lost can never turn into a long press.
    pub fn press_start(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        if self.state != PressState::Idle {
            if let Some(id) = self.gesture.timer.take() {
                self.timer.cancel(id);
            }
            debug!("Ignoring press start while {:?}", self.state);
            return false;
        }

        let id = self.timer.start(self.threshold);
        self.gesture = GestureState {
            timer: Some(id),
            is_long_press: false,
        };
        self.state = PressState::Pressing;
        trace!("Press started, timer {:?}", id);
        true
    }

    /// Timer callback. Returns the variant displayed, if any.
    pub fn on_timer(&mut self, id: TimerId) -> Option<AssetVariant> {
        if !self.attached || self.state != PressState::Pressing || self.gesture.timer != Some(id) {
            trace!("Ignoring stale timer {:?}", id);
            return None;
        }

        self.gesture.timer = None;
        self.gesture.is_long_press = true;
        self.state = PressState::LongPressConfirmed;
        debug!("Long press confirmed");
        self.show(AssetVariant::LongPressActive);
        Some(AssetVariant::LongPressActive)
    }

    /// End a press. Returns the variant displayed, if any.
    pub fn press_end(&mut self) -> Option<AssetVariant> {
        if !self.attached || self.state == PressState::Idle {
            return None;
        }

        if let Some(id) = self.gesture.timer.take() {
            self.timer.cancel(id);
        }
        let variant = if self.gesture.is_long_press {
            AssetVariant::LongPressResult
        } else {
            AssetVariant::Idle
        };

        self.gesture = GestureState::default();
        self.state = PressState::Idle;
        debug!("Press ended as {:?}", variant);
        self.show(variant);
        Some(variant)
    }

    /// Cancel any pending timer and ignore every later event
    pub fn detach(&mut self) {
        if let Some(id) = self.gesture.timer.take() {
            self.timer.cancel(id);
        }
        self.gesture = GestureState::default();
        self.state = PressState::Idle;
        self.attached = false;
    }

    fn show(&mut self, variant: AssetVariant) {
        let src = self.catalog.src(variant);
        self.display.set_displayed_asset(&src);
    }
}

#[cfg(test)]
#[path = "gesture_tests.rs"]
mod tests;
