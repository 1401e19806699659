//! Project Section Component
//!
//! Column for one category: `section#<category>-projects` with its `ul`.

use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::models::{Category, ProjectSeed};

#[component]
pub fn ProjectSection(category: Category, projects: Vec<ProjectSeed>) -> impl IntoView {
    view! {
        <section id=category.container_id()>
            <header>
                <h2>{category.heading()}</h2>
            </header>
            <ul>
                {projects
                    .into_iter()
                    .map(|seed| view! { <ProjectCard seed=seed /> })
                    .collect_view()}
            </ul>
        </section>
    }
}
