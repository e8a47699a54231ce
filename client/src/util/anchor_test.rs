use super::*;

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#contact"), Some("contact"));
}

#[test]
fn fragment_id_rejects_bare_hash_and_urls() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("https://example.com/#about"), None);
    assert_eq!(fragment_id("mailto:someone@example.com"), None);
}

#[test]
fn link_target_classifies_hrefs() {
    assert_eq!(LinkTarget::for_href("#projects"), LinkTarget::SameDocument);
    assert_eq!(LinkTarget::for_href("#"), LinkTarget::SameDocument);
    assert_eq!(LinkTarget::for_href("mailto:a@b.com"), LinkTarget::Mail);
    assert_eq!(LinkTarget::for_href("https://github.com/x"), LinkTarget::NewContext);
}

#[test]
fn only_external_links_open_new_context() {
    assert_eq!(LinkTarget::NewContext.target_attr(), Some("_blank"));
    assert_eq!(LinkTarget::NewContext.rel_attr(), Some("noopener noreferrer"));
    assert_eq!(LinkTarget::SameDocument.target_attr(), None);
    assert_eq!(LinkTarget::Mail.rel_attr(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_is_noop_outside_browser() {
    scroll_to("about");
    scroll_to("");
}
