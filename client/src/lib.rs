//! # portfolio-client
//!
//! Leptos + WASM frontend for a single-page personal portfolio.
//!
//! The page is a pure rendering of static `content` through `view_tree`,
//! parameterized only by `state::ui::UiState` (theme preference and mobile
//! menu). The theme preference is the one value persisted across sessions,
//! handled by `util::theme`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
pub mod view_tree;

/// WASM entry point: apply the stored theme, then hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let store = util::theme::PreferenceStore::browser();
    let theme = store.load();
    store.apply(theme);
    log::debug!("theme preference applied: {theme}");

    leptos::mount::hydrate_body(app::App);
}
