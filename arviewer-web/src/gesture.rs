//! Browser wiring for the press gesture controller

use crate::describe_js_error;
use arviewer_core::{
    InputFamily, ModelDisplaySurface, ModelGestureController, PressTimer, TimerId, ViewerConfig,
};
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Window};

/// `<model-viewer>` element whose `src` is switched
pub struct ModelViewerElement {
    element: Element,
}

impl ModelViewerElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ModelDisplaySurface for ModelViewerElement {
    fn set_displayed_asset(&mut self, src: &str) {
        if let Err(err) = self.element.set_attribute("src", src) {
            warn!("Failed to set model src {}: {}", src, describe_js_error(&err));
        }
    }
}

struct PendingTimeout {
    id: TimerId,
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

/// `setTimeout`-backed press timer
pub struct BrowserTimer {
    window: Window,
    on_fire: Rc<dyn Fn(TimerId)>,
    next_id: i32,
    pending: Option<PendingTimeout>,
}

impl BrowserTimer {
    pub fn new(window: Window, on_fire: Rc<dyn Fn(TimerId)>) -> Self {
        Self {
            window,
            on_fire,
            next_id: 0,
            pending: None,
        }
    }

    fn clear(&mut self) {
        if let Some(pending) = self.pending.take() {
            if let Some(handle) = pending.handle {
                self.window.clear_timeout_with_handle(handle);
            }
        }
    }
}

impl PressTimer for BrowserTimer {
    fn start(&mut self, delay: Duration) -> TimerId {
        // Anything still pending here has already fired
        self.clear();

        self.next_id = self.next_id.wrapping_add(1);
        let id = TimerId(self.next_id);
        let on_fire = self.on_fire.clone();
        let callback = Closure::wrap(Box::new(move || (*on_fire)(id)) as Box<dyn FnMut()>);

        let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            ) {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("Failed to schedule long-press timer: {}", describe_js_error(&err));
                None
            }
        };

        self.pending = Some(PendingTimeout {
            id,
            handle,
            _callback: callback,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if self.pending.as_ref().map(|p| p.id) == Some(id) {
            self.clear();
        }
    }
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        self.clear();
    }
}

pub type BrowserGestureController = ModelGestureController<ModelViewerElement, BrowserTimer>;

/// Press listeners attached to the model element.
///
/// Exactly one event family is bound. Dropping the binding removes the
/// listeners and detaches the controller.
pub struct GestureBinding {
    target: Element,
    family: InputFamily,
    controller: Rc<RefCell<BrowserGestureController>>,
    on_press_start: Closure<dyn FnMut(Event)>,
    on_press_end: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl GestureBinding {
    pub fn attach(
        window: &Window,
        target: Element,
        family: InputFamily,
        config: &ViewerConfig,
    ) -> Result<Self, JsValue> {
        let controller = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserGestureController>>| {
            let weak = weak.clone();
            let on_fire: Rc<dyn Fn(TimerId)> = Rc::new(move |id: TimerId| {
                if let Some(controller) = weak.upgrade() {
                    controller.borrow_mut().on_timer(id);
                }
            });
            let timer = BrowserTimer::new(window.clone(), on_fire);
            let display = ModelViewerElement::new(target.clone());
            RefCell::new(ModelGestureController::from_config(display, timer, config))
        });

        let on_press_start = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                controller.borrow_mut().press_start();
            }) as Box<dyn FnMut(_)>)
        };
        let on_press_end = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                controller.borrow_mut().press_end();
            }) as Box<dyn FnMut(_)>)
        };

        target.add_event_listener_with_callback(
            family.press_start_event(),
            on_press_start.as_ref().unchecked_ref(),
        )?;
        if let Err(err) = target.add_event_listener_with_callback(
            family.press_end_event(),
            on_press_end.as_ref().unchecked_ref(),
        ) {
            target
                .remove_event_listener_with_callback(
                    family.press_start_event(),
                    on_press_start.as_ref().unchecked_ref(),
                )
                .ok();
            return Err(err);
        }
        debug!("Attached {} gesture listeners", family.name());

        Ok(Self {
            target,
            family,
            controller,
            on_press_start,
            on_press_end,
            attached: true,
        })
    }

    pub fn family(&self) -> InputFamily {
        self.family
    }

    /// Remove both listeners and stop the controller
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;

        for (event, callback) in [
            (self.family.press_start_event(), &self.on_press_start),
            (self.family.press_end_event(), &self.on_press_end),
        ] {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!("Failed to remove {} listener: {}", event, describe_js_error(&err));
            }
        }
        self.controller.borrow_mut().detach();
        debug!("Detached {} gesture listeners", self.family.name());
    }
}

impl Drop for GestureBinding {
    fn drop(&mut self) {
        self.detach();
    }
}
