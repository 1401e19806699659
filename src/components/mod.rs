//! UI Components
//!
//! Static host-page markup rendered at startup.

mod project_card;
mod project_section;

pub use project_card::ProjectCard;
pub use project_section::ProjectSection;
