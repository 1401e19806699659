//! Browser-backed [`Page`].

use dom_helper::{EventBinding, ScrollMode};

use super::{ClickHandler, ItemButton, Page};
use crate::config::{BoardConfig, TooltipHost, TooltipOffset};
use crate::error::{BoardError, Result};
use crate::models::Category;
use crate::tooltip::{Placement, Tooltip};

const EXTRA_INFO_ATTR: &str = "data-extra-info";

pub struct DomPage {
    template_id: String,
    offset: TooltipOffset,
    host: TooltipHost,
    insert_before: bool,
    scroll: ScrollMode,
}

impl DomPage {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            template_id: config.tooltip_template_id.clone(),
            offset: config.tooltip_offset,
            host: config.tooltip_host,
            insert_before: config.tooltip_insert_before,
            scroll: config.scroll_mode(),
        }
    }

    fn button(&self, item_id: &str, button: ItemButton) -> Result<web_sys::Element> {
        let item = dom_helper::element_by_id(item_id)?;
        item.query_selector(button.selector())?.ok_or_else(|| BoardError::MissingButton {
            item: item_id.to_string(),
            which: button.name(),
        })
    }
}

impl Page for DomPage {
    type Binding = EventBinding;

    fn item_ids(&self, category: Category) -> Result<Vec<String>> {
        Ok(dom_helper::ids_matching(&category.item_selector())?)
    }

    fn extra_info(&self, item_id: &str) -> Result<String> {
        dom_helper::element_by_id(item_id)?
            .get_attribute(EXTRA_INFO_ATTR)
            .ok_or_else(|| BoardError::MissingExtraInfo(item_id.to_string()))
    }

    fn bind_button(&self, item_id: &str, button: ItemButton, on_click: ClickHandler) -> Result<EventBinding> {
        let element = self.button(item_id, button)?;
        Ok(EventBinding::bind(&element, "click", move |_| on_click())?)
    }

    fn reset_button(&self, binding: EventBinding) {
        dom_helper::reset_handlers(binding);
    }

    fn set_button_label(&self, item_id: &str, button: ItemButton, label: &str) -> Result<()> {
        self.button(item_id, button)?.set_text_content(Some(label));
        Ok(())
    }

    fn relocate(&self, item_id: &str, category: Category) -> Result<()> {
        dom_helper::relocate(item_id, &category.list_selector(), self.scroll)?;
        Ok(())
    }

    fn show_tooltip(&self, anchor_id: &str, text: &str, on_close: Box<dyn FnOnce()>) -> Result<()> {
        let placement = Placement {
            host_id: self.host.host_id(anchor_id),
            insert_before: self.insert_before,
        };
        let tooltip = Tooltip::new(on_close, text, anchor_id, placement, &self.template_id, self.offset)?;
        // The tooltip keeps itself alive through its click listener until closed.
        tooltip.open()
    }
}
