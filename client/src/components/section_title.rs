//! Numbered section heading (`01. Experience`).

use leptos::prelude::*;

use crate::view_tree::SectionHeading;

#[component]
pub fn SectionTitle(heading: SectionHeading) -> impl IntoView {
    view! {
        <div class="section-title">
            <span class="section-title__number">{format!("{}.", heading.number)}</span>
            <h2 class="section-title__text">{heading.title}</h2>
            <span class="section-title__rule" aria-hidden="true"></span>
        </div>
    }
}
