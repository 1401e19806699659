//! Project Board App
//!
//! Host page: header with the analytics control and one section per category.

use leptos::prelude::*;

use crate::components::ProjectSection;
use crate::config::BoardConfig;
use crate::models::Category;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let sections = Category::ALL
        .into_iter()
        .map(|category| {
            let projects = config.projects_in(category);
            view! { <ProjectSection category=category projects=projects /> }
        })
        .collect_view();

    view! {
        <header id="main-header">
            <h1>"Project Planner"</h1>
            <button id=config.analytics_button_id.clone()>"Analytics"</button>
        </header>
        {sections}
    }
}
