//! Tooltip Overlay
//!
//! A card cloned from the shared `<template>`, positioned just below its anchor.
//! It goes Created -> Attached -> Closed and is never reused; a click anywhere on
//! it closes it and notifies the owner exactly once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{DocumentFragment, Element, HtmlElement, HtmlTemplateElement};

use dom_helper::{DomError, EventBinding};
use crate::component::{resolve_host, Attachable};
use crate::config::TooltipOffset;
use crate::error::Result;

/// Geometry of the anchor the tooltip hangs from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorMetrics {
    pub left: i32,
    pub top: i32,
    pub height: i32,
    /// Vertical scroll of the anchor's parent
    pub parent_scroll: i32,
}

impl AnchorMetrics {
    fn read(anchor: &Element) -> Result<Self> {
        let html = anchor.dyn_ref::<HtmlElement>().ok_or_else(|| DomError::WrongElementType {
            target: anchor.id(),
            expected: "html element",
        })?;
        Ok(Self {
            left: html.offset_left(),
            top: html.offset_top(),
            height: anchor.client_height(),
            parent_scroll: anchor.parent_element().map(|p| p.scroll_top()).unwrap_or(0),
        })
    }
}

/// Absolute (x, y) of the tooltip, compensated for the parent's scroll
pub fn tooltip_position(anchor: &AnchorMetrics, offset: TooltipOffset) -> (i32, i32) {
    let x = anchor.left + offset.x;
    let y = anchor.top + anchor.height - anchor.parent_scroll - offset.y;
    (x, y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    Created,
    Attached,
    Closed,
}

/// State transitions and the one-shot close notice, kept apart from the DOM
struct Lifecycle {
    state: Cell<TooltipState>,
    on_close: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Lifecycle {
    fn new(on_close: Box<dyn FnOnce()>) -> Self {
        Self {
            state: Cell::new(TooltipState::Created),
            on_close: RefCell::new(Some(on_close)),
        }
    }

    fn state(&self) -> TooltipState {
        self.state.get()
    }

    /// Runs `attach` only from `Created`. Returns whether it ran.
    fn open(&self, attach: impl FnOnce() -> Result<()>) -> Result<bool> {
        if self.state.get() != TooltipState::Created {
            return Ok(false);
        }
        attach()?;
        self.state.set(TooltipState::Attached);
        Ok(true)
    }

    /// Runs `teardown` and the close notice once; later calls are no-ops.
    fn close(&self, teardown: impl FnOnce()) -> bool {
        if self.state.replace(TooltipState::Closed) == TooltipState::Closed {
            return false;
        }
        teardown();
        let notify = self.on_close.borrow_mut().take();
        if let Some(notify) = notify {
            notify();
        }
        true
    }
}

/// Where the tooltip is inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement<'a> {
    /// Host container id; `None` means the document body
    pub host_id: Option<&'a str>,
    /// Insert at the start of the host instead of the end
    pub insert_before: bool,
}

struct TooltipInner {
    element: Element,
    host: Element,
    insert_before: bool,
    lifecycle: Lifecycle,
    click: RefCell<Option<EventBinding>>,
}

impl Attachable for TooltipInner {
    fn element(&self) -> &Element {
        &self.element
    }

    fn host(&self) -> &Element {
        &self.host
    }

    fn insert_before(&self) -> bool {
        self.insert_before
    }
}

pub struct Tooltip {
    inner: Rc<TooltipInner>,
}

impl Tooltip {
    pub fn new(
        on_close: Box<dyn FnOnce()>,
        text: &str,
        anchor_id: &str,
        placement: Placement<'_>,
        template_id: &str,
        offset: TooltipOffset,
    ) -> Result<Self> {
        let anchor = dom_helper::element_by_id(anchor_id)?;
        let host = resolve_host(placement.host_id)?;
        let element = build_card(text, template_id)?;

        let (x, y) = tooltip_position(&AnchorMetrics::read(&anchor)?, offset);
        let style = element.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", &format!("{}px", x))?;
        style.set_property("top", &format!("{}px", y))?;

        let inner = Rc::new(TooltipInner {
            element: element.into(),
            host,
            insert_before: placement.insert_before,
            lifecycle: Lifecycle::new(on_close),
            click: RefCell::new(None),
        });

        // Strong ref on purpose: the listener owns the tooltip until close() drops it.
        let owner = Rc::clone(&inner);
        let binding = EventBinding::bind(&inner.element, "click", move |_| close(&owner))?;
        *inner.click.borrow_mut() = Some(binding);

        Ok(Self { inner })
    }

    /// Attach to the host. Only a freshly created tooltip can be opened.
    pub fn open(&self) -> Result<()> {
        let inner = &self.inner;
        if !inner.lifecycle.open(|| inner.attach())? {
            log::warn!("tooltip is {:?}, not opening again", inner.lifecycle.state());
        }
        Ok(())
    }
}

fn close(inner: &TooltipInner) {
    inner.lifecycle.close(|| {
        inner.detach();
        // Dropping the binding breaks the listener -> tooltip cycle.
        inner.click.borrow_mut().take();
    });
}

/// `div.card` wrapping a deep clone of the template, text in its `p` slot
fn build_card(text: &str, template_id: &str) -> Result<HtmlElement> {
    let document = dom_helper::document()?;
    let template = dom_helper::element_by_id(template_id)?
        .dyn_into::<HtmlTemplateElement>()
        .map_err(|_| DomError::WrongElementType {
            target: template_id.to_string(),
            expected: "template",
        })?;

    let body = document
        .import_node_with_deep(&template.content(), true)?
        .dyn_into::<DocumentFragment>()
        .map_err(|_| DomError::WrongElementType {
            target: template_id.to_string(),
            expected: "document fragment",
        })?;
    body.query_selector("p")?
        .ok_or_else(|| DomError::MissingSelector(format!("#{} p", template_id)))?
        .set_text_content(Some(text));

    let card = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongElementType {
            target: "div".to_string(),
            expected: "html element",
        })?;
    card.set_class_name("card");
    card.append_child(&body)?;
    Ok(card)
}
