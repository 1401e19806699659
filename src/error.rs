//! Board Errors
//!
//! Host-page markup is a fixed precondition, so every error here is a bug in
//! the page rather than something to recover from. Event handlers hand errors
//! to [`raise`], which throws.

use thiserror::Error;
use wasm_bindgen::JsValue;

use dom_helper::DomError;
use crate::models::Category;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("project {item} has no {which} button")]
    MissingButton { item: String, which: &'static str },
    #[error("project {0} has no data-extra-info attribute")]
    MissingExtraInfo(String),
    #[error("`{0}` list has no transfer handler configured")]
    NoTransferHandler(Category),
    #[error("project {item} is not in the `{category}` list")]
    UnknownProject { item: String, category: Category },
    #[error("`{0}` list was dropped before the hand-off")]
    ListDropped(Category),
    #[error("invalid board config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for BoardError {
    fn from(value: JsValue) -> Self {
        BoardError::Dom(DomError::from(value))
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

/// Fail fast from inside an event handler.
pub fn raise(err: BoardError) -> ! {
    log::error!("{}", err);
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen::throw_str(&err.to_string());
    #[cfg(not(target_arch = "wasm32"))]
    panic!("{}", err);
}
