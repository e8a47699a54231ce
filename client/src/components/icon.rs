//! Icon placeholder elements resolved to glyphs by the stylesheet.

use leptos::prelude::*;

use crate::content::Icon;

/// Class list for an icon element.
pub fn icon_class(icon: Icon) -> String {
    format!("icon icon--{}", icon.slug())
}

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! { <span class=icon_class(icon) aria-hidden="true"></span> }
}
