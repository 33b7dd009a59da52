//! Realizes a [`ViewerLayout`] in the document

use crate::describe_js_error;
use arviewer_core::{ElementSpec, ViewerError, ViewerLayout};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlVideoElement};

fn dom_error(err: JsValue) -> ViewerError {
    ViewerError::Dom(describe_js_error(&err))
}

/// Create an element with the spec's id, attributes and inline style
pub fn create_element(document: &Document, spec: &ElementSpec) -> Result<Element, ViewerError> {
    let element = document.create_element(spec.tag).map_err(dom_error)?;
    if let Some(id) = &spec.id {
        element.set_id(id);
    }
    for (name, value) in &spec.attributes {
        element.set_attribute(name, value).map_err(dom_error)?;
    }
    if !spec.style.is_empty() {
        element
            .set_attribute("style", &spec.style_attribute())
            .map_err(dom_error)?;
    }
    Ok(element)
}

/// Elements owned by a mounted viewer
pub struct MountedLayout {
    pub container: Element,
    pub video: HtmlVideoElement,
    pub model: Element,
}

impl MountedLayout {
    /// Build the layout and append it to `host`
    pub fn mount(
        document: &Document,
        host: &Element,
        layout: &ViewerLayout,
    ) -> Result<Self, ViewerError> {
        let container = create_element(document, &layout.container)?;
        let video = create_element(document, &layout.video)?
            .dyn_into::<HtmlVideoElement>()
            .map_err(|_| ViewerError::Dom("video element has unexpected type".to_string()))?;
        let model = create_element(document, &layout.model)?;

        container.append_child(&video).map_err(dom_error)?;
        container.append_child(&model).map_err(dom_error)?;
        host.append_child(&container).map_err(dom_error)?;

        Ok(Self {
            container,
            video,
            model,
        })
    }

    /// Detach the container from the document
    pub fn remove(&self) {
        self.container.remove();
    }
}

/// Look up the host element by id
pub fn host_element(document: &Document, host_id: &str) -> Result<Element, ViewerError> {
    document
        .get_element_by_id(host_id)
        .ok_or_else(|| ViewerError::MissingElement(format!("#{}", host_id)))
}
