//! Host Page Access
//!
//! Everything the project lists need from the page, behind one trait so the
//! hand-off logic runs the same against the real DOM and the test fake.

mod dom;
#[cfg(test)]
pub mod fake;

use std::rc::Rc;

use crate::error::Result;
use crate::models::Category;

pub use dom::DomPage;

/// Click handler bound to a project button
pub type ClickHandler = Rc<dyn Fn()>;

/// The two buttons every project card carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemButton {
    /// First button, opens the tooltip
    Info,
    /// Last button, moves the project to the other list
    Switch,
}

impl ItemButton {
    pub fn selector(self) -> &'static str {
        match self {
            ItemButton::Info => "button:first-of-type",
            ItemButton::Switch => "button:last-of-type",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemButton::Info => "info",
            ItemButton::Switch => "switch",
        }
    }
}

pub trait Page: 'static {
    /// Live listener; dropping it unbinds the handler
    type Binding;

    /// Ids of the projects currently rendered in a category, in display order
    fn item_ids(&self, category: Category) -> Result<Vec<String>>;

    /// The project's `data-extra-info` text, verbatim
    fn extra_info(&self, item_id: &str) -> Result<String>;

    fn bind_button(&self, item_id: &str, button: ItemButton, on_click: ClickHandler) -> Result<Self::Binding>;

    /// Strip a previous binding so its handler can never fire again
    fn reset_button(&self, binding: Self::Binding);

    fn set_button_label(&self, item_id: &str, button: ItemButton, label: &str) -> Result<()>;

    /// Append the project to the end of `category`'s list and scroll it into view
    fn relocate(&self, item_id: &str, category: Category) -> Result<()>;

    /// Attach a tooltip anchored at the project. `on_close` runs once when it is dismissed.
    fn show_tooltip(&self, anchor_id: &str, text: &str, on_close: Box<dyn FnOnce()>) -> Result<()>;
}
