//! Board Configuration
//!
//! Read once at startup from an optional `<script type="application/json" id="board-config">`
//! element. Every field has a default, so a page without the element still boots.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use dom_helper::{DomError, ScrollMode};
use crate::error::Result;
use crate::models::{Category, ProjectSeed};

/// Id of the JSON script element carrying the config
pub const CONFIG_ELEMENT_ID: &str = "board-config";

/// Tooltip distance from its anchor, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub x: i32,
    pub y: i32,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self { x: 20, y: 10 }
    }
}

/// Container a tooltip is inserted into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipHost {
    /// The project card the tooltip describes
    #[default]
    Anchor,
    /// The document body
    Body,
}

impl TooltipHost {
    /// Host element id for a tooltip anchored at `anchor_id`; `None` is the body
    pub fn host_id(self, anchor_id: &str) -> Option<&str> {
        match self {
            TooltipHost::Anchor => Some(anchor_id),
            TooltipHost::Body => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// `<template>` holding the tooltip skeleton
    pub tooltip_template_id: String,
    pub tooltip_offset: TooltipOffset,
    pub tooltip_host: TooltipHost,
    /// Insert tooltips as the host's first child rather than its last
    pub tooltip_insert_before: bool,
    pub analytics_button_id: String,
    pub analytics_script_url: String,
    /// Animate the scroll after moving a project between lists
    pub smooth_scroll: bool,
    pub log_level: String,
    pub projects: Vec<ProjectSeed>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tooltip_template_id: "tooltip".to_string(),
            tooltip_offset: TooltipOffset::default(),
            tooltip_host: TooltipHost::Anchor,
            tooltip_insert_before: false,
            analytics_button_id: "start-analytics-btn".to_string(),
            analytics_script_url: "assets/scripts/analytics.js".to_string(),
            smooth_scroll: false,
            log_level: "info".to_string(),
            projects: default_projects(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from the page, falling back to defaults when no config element exists
    pub fn load() -> Result<Self> {
        match dom_helper::element_by_id(CONFIG_ELEMENT_ID) {
            Ok(element) => Self::from_json(&element.text_content().unwrap_or_default()),
            Err(DomError::MissingElement(_)) => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        if self.smooth_scroll {
            ScrollMode::Smooth
        } else {
            ScrollMode::Instant
        }
    }

    /// Seeds for one column, in configured order
    pub fn projects_in(&self, category: Category) -> Vec<ProjectSeed> {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }
}

fn default_projects() -> Vec<ProjectSeed> {
    let seed = |id: &str, title: &str, summary: &str, extra_info: &str, category| ProjectSeed {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        extra_info: extra_info.to_string(),
        category,
    };
    vec![
        seed(
            "p1",
            "Finish the Course",
            "Finish the course within the next two weeks.",
            "Got lifetime access, but would be nice to finish it soon!",
            Category::Active,
        ),
        seed(
            "p2",
            "Buy Groceries",
            "Don't forget to pick up groceries today.",
            "Not really a business topic but still important.",
            Category::Active,
        ),
        seed(
            "p3",
            "Book Hotel",
            "Academind conference takes place in December, don't forget to book a hotel.",
            "Super important conference! Fictional but still!",
            Category::Finished,
        ),
    ]
}
