//! In-memory [`Page`] for tests.
//!
//! Clicks invoke exactly the handlers that are bound at that moment, so a
//! stale binding shows up as an extra invocation.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

use super::{ClickHandler, ItemButton, Page};
use crate::error::{BoardError, Result};
use crate::models::Category;
use dom_helper::DomError;

#[derive(Default)]
struct FakeState {
    containers: HashMap<Category, Vec<String>>,
    extra_info: HashMap<String, String>,
    labels: HashMap<(String, ItemButton), String>,
    handlers: HashMap<u64, (String, ItemButton, ClickHandler)>,
    next_handler: u64,
    tooltips: Vec<FakeTooltip>,
    scrolled: Vec<String>,
    refused: HashSet<Category>,
}

struct FakeTooltip {
    anchor: String,
    text: String,
    on_close: Option<Box<dyn FnOnce()>>,
}

impl FakeState {
    fn has_item(&self, item_id: &str) -> bool {
        self.containers.values().any(|ids| ids.iter().any(|id| id == item_id))
    }
}

pub struct FakeBinding {
    id: u64,
    state: Weak<RefCell<FakeState>>,
}

impl Drop for FakeBinding {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().handlers.remove(&self.id);
        }
    }
}

#[derive(Default)]
pub struct FakePage {
    state: Rc<RefCell<FakeState>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a project card at the end of `category`'s list
    pub fn with_item(self, category: Category, id: &str, extra_info: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.containers.entry(category).or_default().push(id.to_string());
            state.extra_info.insert(id.to_string(), extra_info.to_string());
        }
        self
    }

    /// Click a button; returns how many handlers ran
    pub fn click(&self, item_id: &str, button: ItemButton) -> usize {
        let handlers: Vec<ClickHandler> = self
            .state
            .borrow()
            .handlers
            .values()
            .filter(|(id, b, _)| id == item_id && *b == button)
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect();
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    pub fn binding_count(&self, item_id: &str, button: ItemButton) -> usize {
        self.state
            .borrow()
            .handlers
            .values()
            .filter(|(id, b, _)| id == item_id && *b == button)
            .count()
    }

    pub fn label(&self, item_id: &str, button: ItemButton) -> Option<String> {
        self.state.borrow().labels.get(&(item_id.to_string(), button)).cloned()
    }

    /// Ids rendered in a category's list, in display order
    pub fn rendered(&self, category: Category) -> Vec<String> {
        self.state.borrow().containers.get(&category).cloned().unwrap_or_default()
    }

    /// Make every relocation into `category` fail, as if its list were missing
    pub fn refuse_relocation(&self, category: Category) {
        self.state.borrow_mut().refused.insert(category);
    }

    pub fn scrolled_into_view(&self) -> Vec<String> {
        self.state.borrow().scrolled.clone()
    }

    /// (anchor, text) of every attached tooltip
    pub fn open_tooltips(&self) -> Vec<(String, String)> {
        self.state
            .borrow()
            .tooltips
            .iter()
            .map(|t| (t.anchor.clone(), t.text.clone()))
            .collect()
    }

    /// Click the tooltip anchored at `anchor_id`, detaching it
    pub fn click_tooltip(&self, anchor_id: &str) {
        let on_close = {
            let mut state = self.state.borrow_mut();
            let index = state
                .tooltips
                .iter()
                .position(|t| t.anchor == anchor_id)
                .expect("no tooltip at anchor");
            state.tooltips.remove(index).on_close
        };
        if let Some(on_close) = on_close {
            on_close();
        }
    }
}

impl Page for FakePage {
    type Binding = FakeBinding;

    fn item_ids(&self, category: Category) -> Result<Vec<String>> {
        Ok(self.rendered(category))
    }

    fn extra_info(&self, item_id: &str) -> Result<String> {
        self.state
            .borrow()
            .extra_info
            .get(item_id)
            .cloned()
            .ok_or_else(|| BoardError::MissingExtraInfo(item_id.to_string()))
    }

    fn bind_button(&self, item_id: &str, button: ItemButton, on_click: ClickHandler) -> Result<FakeBinding> {
        let mut state = self.state.borrow_mut();
        if !state.has_item(item_id) {
            return Err(DomError::MissingElement(item_id.to_string()).into());
        }
        let id = state.next_handler;
        state.next_handler += 1;
        state.handlers.insert(id, (item_id.to_string(), button, on_click));
        Ok(FakeBinding { id, state: Rc::downgrade(&self.state) })
    }

    fn reset_button(&self, binding: FakeBinding) {
        drop(binding);
    }

    fn set_button_label(&self, item_id: &str, button: ItemButton, label: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .labels
            .insert((item_id.to_string(), button), label.to_string());
        Ok(())
    }

    fn relocate(&self, item_id: &str, category: Category) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.has_item(item_id) {
            return Err(DomError::MissingElement(item_id.to_string()).into());
        }
        if state.refused.contains(&category) {
            return Err(DomError::MissingSelector(category.list_selector()).into());
        }
        for ids in state.containers.values_mut() {
            ids.retain(|id| id != item_id);
        }
        state.containers.entry(category).or_default().push(item_id.to_string());
        state.scrolled.push(item_id.to_string());
        Ok(())
    }

    fn show_tooltip(&self, anchor_id: &str, text: &str, on_close: Box<dyn FnOnce()>) -> Result<()> {
        self.state.borrow_mut().tooltips.push(FakeTooltip {
            anchor: anchor_id.to_string(),
            text: text.to_string(),
            on_close: Some(on_close),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_button_silences_old_handler() {
        let page = FakePage::new().with_item(Category::Active, "p1", "info");
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let binding = page
            .bind_button("p1", ItemButton::Switch, Rc::new(move || *counter.borrow_mut() += 1))
            .unwrap();

        assert_eq!(page.click("p1", ItemButton::Switch), 1);
        page.reset_button(binding);
        assert_eq!(page.click("p1", ItemButton::Switch), 0);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_bind_to_missing_item_fails() {
        let page = FakePage::new();
        let result = page.bind_button("ghost", ItemButton::Info, Rc::new(|| {}));
        assert!(matches!(result, Err(BoardError::Dom(DomError::MissingElement(_)))));
    }
}
