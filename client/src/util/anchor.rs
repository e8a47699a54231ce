//! Link classification and in-page anchor scrolling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every link on the page is either a same-document fragment, an external URL
//! opened in a new browsing context, or a mail link. Hrefs are passed through
//! unmodified; this module only decides how they are rendered and, for
//! fragments, which element to scroll to.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// How a link is opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// `#id` within this page.
    SameDocument,
    /// External URL; rendered with `target="_blank"` and `rel="noopener noreferrer"`.
    NewContext,
    /// `mailto:` link handed to the mail client.
    Mail,
}

impl LinkTarget {
    pub fn for_href(href: &str) -> Self {
        if href.starts_with('#') {
            Self::SameDocument
        } else if href.starts_with("mailto:") {
            Self::Mail
        } else {
            Self::NewContext
        }
    }

    /// Value for the `target` attribute, if any.
    pub fn target_attr(self) -> Option<&'static str> {
        match self {
            Self::NewContext => Some("_blank"),
            Self::SameDocument | Self::Mail => None,
        }
    }

    /// Value for the `rel` attribute, if any.
    pub fn rel_attr(self) -> Option<&'static str> {
        match self {
            Self::NewContext => Some("noopener noreferrer"),
            Self::SameDocument | Self::Mail => None,
        }
    }
}

/// Element id named by a same-document href (`"#about"` -> `"about"`).
///
/// Returns `None` for a bare `"#"` and for anything that is not a fragment.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll the element with `id` into view. Missing elements are ignored.
pub fn scroll_to(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::debug!("anchor target #{id} not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
