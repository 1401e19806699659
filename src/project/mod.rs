//! Projects
//!
//! Items and the category lists that own them.

mod item;
mod list;

pub use item::{ProjectItem, TransferRequest};
pub use list::{ProjectList, Rejected, TransferHandler, WeakProjectList};
