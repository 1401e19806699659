//! Project Card Component
//!
//! One `li` of a project list. Rendered once; after mount the project list
//! owns its buttons and moves it between sections.

use leptos::prelude::*;

use crate::models::ProjectSeed;

/// Project card with the info button first and the switch button last
#[component]
pub fn ProjectCard(seed: ProjectSeed) -> impl IntoView {
    view! {
        <li id=seed.id.clone() class="card" data-extra-info=seed.extra_info.clone()>
            <h2>{seed.title.clone()}</h2>
            <p>{seed.summary.clone()}</p>
            <button class="alt">"More Info"</button>
            <button>{seed.category.switch_label()}</button>
        </li>
    }
}
