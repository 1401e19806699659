//! Analytics Loader
//!
//! Appends the analytics script to `<head>` on demand. Fire and forget: nothing
//! observes whether it loads.

use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use dom_helper::{DomError, EventBinding};
use crate::config::BoardConfig;
use crate::error::{raise, Result};

pub fn start_analytics(script_url: &str) -> Result<()> {
    let document = dom_helper::document()?;
    let script = document
        .create_element("script")?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| DomError::WrongElementType {
            target: "script".to_string(),
            expected: "script element",
        })?;
    script.set_src(script_url);
    // Don't compete with the initial render
    script.set_defer(true);

    let head = document
        .head()
        .ok_or_else(|| DomError::MissingSelector("head".to_string()))?;
    head.append_child(&script)?;
    log::info!("analytics script requested: {}", script_url);
    Ok(())
}

/// Each click on the analytics control requests the script once more
pub fn bind_start_button(config: &BoardConfig) -> Result<EventBinding> {
    let button = dom_helper::element_by_id(&config.analytics_button_id)?;
    let url = config.analytics_script_url.clone();
    Ok(EventBinding::bind(&button, "click", move |_| {
        if let Err(err) = start_analytics(&url) {
            raise(err);
        }
    })?)
}
