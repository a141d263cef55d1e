//! DOM input overlay for cell editing.
//!
//! Creates an `<input>` element positioned over the editing cell.
//! Keyboard handling (Enter/Escape/Tab) is left to the JS side.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use super::OverlayControl;
use crate::geometry::Rect;

/// Input overlay for cell editing.
pub struct InputOverlay {
    container: Option<HtmlElement>,
    input: Option<HtmlInputElement>,
}

impl InputOverlay {
    /// `container` is the scroll container the input is positioned in;
    /// without one the input goes into the document body.
    pub fn new(container: Option<HtmlElement>) -> Self {
        InputOverlay {
            container,
            input: None,
        }
    }

    /// Replace the text shown in the input and select it.
    pub fn set_value(&mut self, value: &str) {
        if let Some(input) = self.ensure_input() {
            input.set_value(value);
            input.select();
        }
    }

    /// Hide the input overlay.
    pub fn hide(&mut self) {
        if let Some(ref input) = self.input {
            let _ = input.style().set_property("display", "none");
            let _ = input.blur();
        }
    }

    /// Get current input value.
    pub fn value(&self) -> Option<String> {
        self.input.as_ref().map(HtmlInputElement::value)
    }

    fn ensure_input(&mut self) -> Option<&HtmlInputElement> {
        if self.input.is_none() {
            let document = web_sys::window().and_then(|w| w.document())?;
            self.input = create_input(&document, self.container.as_ref());
        }
        self.input.as_ref()
    }
}

fn create_input(document: &Document, container: Option<&HtmlElement>) -> Option<HtmlInputElement> {
    let input = document
        .create_element("input")
        .ok()?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    input.set_type("text");
    let style = input.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("z-index", "1000");
    let _ = style.set_property("box-sizing", "border-box");
    let _ = style.set_property("border", "2px solid #4285f4");
    let _ = style.set_property("outline", "none");
    let _ = style.set_property("padding", "0 4px");
    let _ = style.set_property("font-family", "inherit");
    let _ = style.set_property("font-size", "13px");
    let _ = style.set_property("background", "#fff");
    let _ = style.set_property("display", "none");

    // Append to container or document body
    if let Some(c) = container {
        let _ = c.append_child(&input);
    } else if let Some(body) = document.body() {
        let _ = body.append_child(&input);
    }
    Some(input)
}

impl OverlayControl for InputOverlay {
    fn set_bounds(&mut self, bounds: Rect) {
        let Some(input) = self.ensure_input() else {
            return;
        };
        let style = input.style();
        if bounds.is_empty() {
            let _ = style.set_property("display", "none");
            return;
        }
        let _ = style.set_property("display", "block");
        let _ = style.set_property("left", &format!("{}px", bounds.x));
        let _ = style.set_property("top", &format!("{}px", bounds.y));
        let _ = style.set_property("width", &format!("{}px", bounds.width));
        let _ = style.set_property("height", &format!("{}px", bounds.height));
    }

    fn is_visible(&self) -> bool {
        self.input.as_ref().is_some_and(|input| {
            input
                .style()
                .get_property_value("display")
                .is_ok_and(|display| display != "none")
        })
    }

    fn is_focused(&self) -> bool {
        let Some(input) = self.input.as_ref() else {
            return false;
        };
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
            .is_some_and(|active| AsRef::<web_sys::Element>::as_ref(input) == &active)
    }

    fn set_focus(&mut self) {
        if let Some(ref input) = self.input {
            let _ = input.focus();
        }
    }
}

impl Drop for InputOverlay {
    fn drop(&mut self) {
        if let Some(ref input) = self.input {
            if let Some(parent) = input.parent_node() {
                let _ = parent.remove_child(input);
            }
        }
    }
}
