//! Root application component and HTML shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::PORTFOLIO;
use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::theme::{self, ThemePreference};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The document starts in the default theme; `hydrate()` swaps the marker to
/// the stored preference before the page becomes interactive.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let default_theme = ThemePreference::default();
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=default_theme.as_str() class:dark=default_theme.is_dark()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the `UiState` context and mounts the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Runs in the browser only; SSR always renders the default theme.
    Effect::new(move || {
        let stored = theme::read_preference();
        if ui.get_untracked().theme != stored {
            ui.update(|u| u.set_theme(stored));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{} | Portfolio", PORTFOLIO.profile.name)/>
        <Meta name="description" content=PORTFOLIO.profile.headline/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
