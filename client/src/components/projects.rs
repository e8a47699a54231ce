//! Project cards (`#projects`).

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::link::OutboundLink;
use crate::components::section_title::SectionTitle;
use crate::content::Icon;
use crate::view_tree::ProjectsView;

#[component]
pub fn ProjectsSection(projects: ProjectsView) -> impl IntoView {
    let cards = projects
        .cards
        .into_iter()
        .map(|card| {
            let tags = card
                .tags
                .into_iter()
                .map(|tag| view! { <span class="project__tag">{tag}</span> })
                .collect_view();
            view! {
                <article class="project">
                    <div class="project__header">
                        <span class="project__icon"><IconGlyph icon=Icon::Briefcase/></span>
                        <OutboundLink link=card.link class="project__link" label=card.title>
                            <IconGlyph icon=Icon::ExternalLink/>
                        </OutboundLink>
                    </div>
                    <h3 class="project__title">{card.title}</h3>
                    <p class="project__description">{card.description}</p>
                    <div class="project__tags">{tags}</div>
                </article>
            }
        })
        .collect_view();

    let id = projects.heading.id;

    view! {
        <section id=id class="section section--alt">
            <div class="section__inner">
                <SectionTitle heading=projects.heading/>
                <div class="project-grid">{cards}</div>
            </div>
        </section>
    }
}
