//! Fixed navigation bar with theme toggle and mobile dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only interactive surface on the page. It owns the three event
//! handlers that mutate `UiState`: theme toggle, menu toggle, and link
//! activation (which closes the menu and scrolls to the section).

use leptos::prelude::*;

use crate::components::icon::icon_class;
use crate::content::{NavLink, PORTFOLIO};
use crate::state::ui::UiState;
use crate::util::{anchor, theme};
use crate::view_tree::render_nav;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let nav = Memo::new(move |_| {
        let state = ui.get();
        render_nav(state.theme, state.menu, PORTFOLIO.nav_links)
    });

    let on_theme = move |_| {
        let next = theme::toggle_and_commit(ui.get_untracked().theme);
        ui.update(|u| u.set_theme(next));
    };
    let on_menu = move |_| ui.update(UiState::toggle_menu);
    let on_navigate = move |link: NavLink| {
        let mut target = None;
        ui.update(|u| target = u.navigate(&link));
        if let Some(id) = target {
            anchor::scroll_to(id);
        }
    };

    let link_view = move |link: NavLink, class: &'static str| {
        view! {
            <a
                class=class
                href=link.href
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    on_navigate(link);
                }
            >
                {link.name}
            </a>
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="#about">"</>"</a>

                <div class="navbar__links">
                    {move || {
                        nav.get()
                            .links
                            .into_iter()
                            .map(|link| link_view(link, "navbar__link"))
                            .collect_view()
                    }}
                    <button class="navbar__theme" on:click=on_theme title="Toggle theme" aria-label="Toggle theme">
                        <span class=move || icon_class(nav.get().theme_icon) aria-hidden="true"></span>
                    </button>
                </div>

                <div class="navbar__mobile-controls">
                    <button class="navbar__theme" on:click=on_theme title="Toggle theme" aria-label="Toggle theme">
                        <span class=move || icon_class(nav.get().theme_icon) aria-hidden="true"></span>
                    </button>
                    <button
                        class="navbar__menu-button"
                        on:click=on_menu
                        aria-label="Toggle menu"
                        aria-expanded=move || if nav.get().menu_open { "true" } else { "false" }
                    >
                        <span class=move || icon_class(nav.get().menu_icon) aria-hidden="true"></span>
                    </button>
                </div>
            </div>

            <Show when=move || nav.get().menu_open>
                <div class="navbar__dropdown">
                    {move || {
                        nav.get()
                            .mobile_links
                            .unwrap_or_default()
                            .into_iter()
                            .map(|link| link_view(link, "navbar__dropdown-link"))
                            .collect_view()
                    }}
                </div>
            </Show>
        </nav>
    }
}
