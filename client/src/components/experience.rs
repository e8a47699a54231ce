//! Experience timeline (`#experience`).

use leptos::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::view_tree::ExperienceView;

#[component]
pub fn ExperienceSection(experience: ExperienceView) -> impl IntoView {
    let items = experience
        .items
        .into_iter()
        .map(|item| {
            view! {
                <li class="timeline__item">
                    <span class="timeline__dot" aria-hidden="true"></span>
                    <h3 class="timeline__role">{item.role}</h3>
                    <div class="timeline__meta">{item.meta}</div>
                    <p class="timeline__description">{item.description}</p>
                </li>
            }
        })
        .collect_view();

    let id = experience.heading.id;

    view! {
        <section id=id class="section section--alt">
            <div class="section__inner section__inner--narrow">
                <SectionTitle heading=experience.heading/>
                <ol class="timeline">{items}</ol>
            </div>
        </section>
    }
}
