//! Board Models
//!
//! Categories and the seed entries rendered into the host page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which column a project lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Active,
    Finished,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Active, Category::Finished];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Active => "active",
            Category::Finished => "finished",
        }
    }

    pub fn other(self) -> Category {
        match self {
            Category::Active => Category::Finished,
            Category::Finished => Category::Active,
        }
    }

    /// Text of the switch button for an item in this category
    pub fn switch_label(self) -> &'static str {
        match self {
            Category::Active => "Finish",
            Category::Finished => "Activate",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Category::Active => "Active Projects",
            Category::Finished => "Finished Projects",
        }
    }

    /// Id of the section holding this category's list
    pub fn container_id(self) -> String {
        format!("{}-projects", self.as_str())
    }

    /// Selector of the list element items are appended to
    pub fn list_selector(self) -> String {
        format!("#{} ul", self.container_id())
    }

    /// Selector matching every item currently in this category
    pub fn item_selector(self) -> String {
        format!("#{} li", self.container_id())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One project card as rendered at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSeed {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub extra_info: String,
    pub category: Category,
}
