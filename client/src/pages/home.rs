//! The single portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is rendered once from the `UiState` seen at mount. Body sections
//! depend only on static content, so that snapshot stays valid; the
//! navigation bar re-renders from `UiState` on every theme or menu change.

use leptos::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::experience::ExperienceSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
use crate::content::PORTFOLIO;
use crate::state::ui::UiState;
use crate::view_tree::render;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>().get_untracked();
    let body = render(state.theme, state.menu, &PORTFOLIO).body;

    view! {
        <div class="page">
            <Navbar/>
            <main>
                <Hero hero=body.hero/>
                <ExperienceSection experience=body.experience/>
                <SkillsSection skills=body.skills/>
                <ProjectsSection projects=body.projects/>
                <ContactSection contact=body.contact/>
            </main>
            <Footer footer=body.footer/>
        </div>
    }
}
