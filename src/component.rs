//! Attachable Components
//!
//! Lifecycle shared by overlays that insert themselves into a host container.

use web_sys::Element;

use dom_helper::DomError;
use crate::error::Result;

pub trait Attachable {
    fn element(&self) -> &Element;

    fn host(&self) -> &Element;

    /// Insert at the start of the host instead of the end
    fn insert_before(&self) -> bool {
        false
    }

    fn attach(&self) -> Result<()> {
        let position = insert_position(self.insert_before());
        self.host().insert_adjacent_element(position, self.element())?;
        Ok(())
    }

    /// Remove from the document; no-op if already detached
    fn detach(&self) {
        if self.element().is_connected() {
            self.element().remove();
        }
    }
}

/// `insertAdjacentElement` position inside the host
pub fn insert_position(insert_before: bool) -> &'static str {
    if insert_before {
        "afterbegin"
    } else {
        "beforeend"
    }
}

/// Host container by id, or the document body when no id is given
pub fn resolve_host(host_id: Option<&str>) -> Result<Element> {
    match host_id {
        Some(id) => Ok(dom_helper::element_by_id(id)?),
        None => {
            let body = dom_helper::document()?
                .body()
                .ok_or_else(|| DomError::MissingSelector("body".to_string()))?;
            Ok(body.into())
        }
    }
}
