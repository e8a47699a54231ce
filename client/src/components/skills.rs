//! Skills and certifications grids (`#skills`).
//!
//! Both grids share the same card markup; certifications sit under their own
//! subheading.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::section_title::SectionTitle;
use crate::view_tree::{Card, SkillsView};

#[component]
pub fn SkillsSection(skills: SkillsView) -> impl IntoView {
    let skill_cards = skills.skills.into_iter().map(|card| view! { <InfoCard card=card/> }).collect_view();
    let cert_cards = skills
        .certifications
        .into_iter()
        .map(|card| view! { <InfoCard card=card/> })
        .collect_view();

    let id = skills.heading.id;

    view! {
        <section id=id class="section">
            <div class="section__inner">
                <SectionTitle heading=skills.heading/>
                <div class="card-grid card-grid--four">{skill_cards}</div>
                <h3 class="section__subheading">{skills.certifications_heading}</h3>
                <div class="card-grid card-grid--two">{cert_cards}</div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(card: Card) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__icon"><IconGlyph icon=card.icon/></div>
            <h3 class="card__title">{card.title}</h3>
            <p class="card__description">{card.description}</p>
        </div>
    }
}
