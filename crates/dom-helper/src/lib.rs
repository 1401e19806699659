//! DOM Helper Utilities
//!
//! Imperative helpers for host-page elements that the reactive layer does not own.
//! Lookups fail fast with a `DomError` instead of returning `None`, and click
//! listeners are tracked so they can be stripped before rebinding.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, ScrollBehavior, ScrollIntoViewOptions};

/// Errors raised by DOM lookups and mutations
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("no element matches `{0}`")]
    MissingSelector(String),
    #[error("`{target}` is not a {expected}")]
    WrongElementType { target: String, expected: &'static str },
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// How a relocated element is brought into view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollMode {
    /// Jump straight to the element
    #[default]
    Instant,
    /// Animated scroll (not supported by every browser)
    Smooth,
}

// ========================
// Lookups
// ========================

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

pub fn query(selector: &str) -> Result<Element, DomError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingSelector(selector.to_string()))
}

/// Ids of every element matching `selector`, in document order
pub fn ids_matching(selector: &str) -> Result<Vec<String>, DomError> {
    let nodes = document()?.query_selector_all(selector)?;
    let mut ids = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            ids.push(element.id());
        }
    }
    Ok(ids)
}

// ========================
// Listeners
// ========================

/// A single tracked event listener.
///
/// The listener stays attached while the binding is alive. Dropping the binding
/// removes it from the target, so a rebind never stacks on top of an old handler.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl EventBinding {
    pub fn bind<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
            // The listener may be the one currently dispatching; free it after this task.
            wasm_bindgen_futures::spawn_local(async move {
                drop(closure);
            });
        }
    }
}

/// Strip the tracked listener and hand back the bare element.
///
/// The old callback is never invoked again, even through a reference to the
/// element taken before the reset.
pub fn reset_handlers(binding: EventBinding) -> EventTarget {
    let target = binding.target.clone();
    drop(binding);
    target
}

// ========================
// Placement
// ========================

/// Move `#element_id` to the end of the first match of `destination_selector`
/// and scroll it into view.
pub fn relocate(element_id: &str, destination_selector: &str, mode: ScrollMode) -> Result<Element, DomError> {
    let element = element_by_id(element_id)?;
    let destination = query(destination_selector)?;
    destination.append_child(&element)?;

    match mode {
        ScrollMode::Instant => element.scroll_into_view(),
        ScrollMode::Smooth => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    Ok(element)
}
