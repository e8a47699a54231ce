//! Anchor element honoring the link's browsing-context rules.

use leptos::prelude::*;

use crate::view_tree::LinkView;

/// `<a>` with `target`/`rel` set for external links and left off otherwise.
#[component]
pub fn OutboundLink(
    link: LinkView,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class=class
            href=link.href
            target=link.target.target_attr()
            rel=link.target.rel_attr()
            aria-label=label
        >
            {children()}
        </a>
    }
}
