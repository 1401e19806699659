//! Project Item
//!
//! One card on the board. It owns the listeners on its two buttons and rebinds
//! the switch button every time it changes lists.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::error::{raise, Result};
use crate::models::Category;
use crate::page::{ItemButton, Page};

/// Asks the owning list to move a project out, by id
pub type TransferRequest = Rc<dyn Fn(&str)>;

pub struct ProjectItem<P: Page> {
    id: String,
    category: Category,
    page: Rc<P>,
    /// Set while this item's tooltip is attached
    has_active_tooltip: Rc<Cell<bool>>,
    transfer: TransferRequest,
    info_binding: Option<P::Binding>,
    switch_binding: Option<P::Binding>,
}

impl<P: Page> ProjectItem<P> {
    pub fn new(id: impl Into<String>, transfer: TransferRequest, category: Category, page: Rc<P>) -> Result<Self> {
        let mut item = Self {
            id: id.into(),
            category,
            page,
            has_active_tooltip: Rc::new(Cell::new(false)),
            transfer,
            info_binding: None,
            switch_binding: None,
        };
        item.bind_info_button()?;
        item.bind_switch_button(category)?;
        Ok(item)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn has_active_tooltip(&self) -> bool {
        self.has_active_tooltip.get()
    }

    pub fn show_info(&self) -> Result<()> {
        show_info(self.page.as_ref(), &self.id, &self.has_active_tooltip)
    }

    /// Point the switch button at a new owner
    pub fn update(&mut self, transfer: TransferRequest, category: Category) -> Result<()> {
        self.transfer = transfer;
        self.bind_switch_button(category)
    }

    fn bind_info_button(&mut self) -> Result<()> {
        let page: Weak<P> = Rc::downgrade(&self.page);
        let id = self.id.clone();
        let guard = Rc::clone(&self.has_active_tooltip);
        let binding = self.page.bind_button(
            &self.id,
            ItemButton::Info,
            Rc::new(move || {
                let Some(page) = page.upgrade() else { return };
                if let Err(err) = show_info(page.as_ref(), &id, &guard) {
                    raise(err);
                }
            }),
        )?;
        self.info_binding = Some(binding);
        Ok(())
    }

    fn bind_switch_button(&mut self, category: Category) -> Result<()> {
        // A stale listener would hand the item to the list it just left.
        if let Some(previous) = self.switch_binding.take() {
            self.page.reset_button(previous);
        }
        self.category = category;
        self.page.set_button_label(&self.id, ItemButton::Switch, category.switch_label())?;

        let transfer = Rc::clone(&self.transfer);
        let id = self.id.clone();
        let binding = self
            .page
            .bind_button(&self.id, ItemButton::Switch, Rc::new(move || transfer(&id)))?;
        self.switch_binding = Some(binding);
        Ok(())
    }
}

fn show_info<P: Page>(page: &P, id: &str, guard: &Rc<Cell<bool>>) -> Result<()> {
    if guard.get() {
        log::debug!("tooltip for {} already open", id);
        return Ok(());
    }
    let text = page.extra_info(id)?;
    let on_close = Rc::clone(guard);
    page.show_tooltip(id, &text, Box::new(move || on_close.set(false)))?;
    guard.set(true);
    Ok(())
}
