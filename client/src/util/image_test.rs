use super::*;
use crate::content::PORTFOLIO;

#[test]
fn placeholder_url_encodes_spaces_as_plus() {
    assert_eq!(
        placeholder_avatar_url("Rudolph Benjamin"),
        "https://ui-avatars.com/api/?name=Rudolph+Benjamin&background=0d9488&color=fff&size=512"
    );
}

#[test]
fn placeholder_url_collapses_repeated_whitespace() {
    assert_eq!(
        placeholder_avatar_url("  Ada   Lovelace "),
        "https://ui-avatars.com/api/?name=Ada+Lovelace&background=0d9488&color=fff&size=512"
    );
}

#[test]
fn placeholder_url_percent_encodes_query_delimiters() {
    assert_eq!(
        placeholder_avatar_url("A&B #1"),
        "https://ui-avatars.com/api/?name=A%26B+%231&background=0d9488&color=fff&size=512"
    );
}

#[test]
fn placeholder_url_percent_encodes_non_ascii() {
    assert_eq!(
        placeholder_avatar_url("José Núñez"),
        "https://ui-avatars.com/api/?name=Jos%C3%A9+N%C3%BA%C3%B1ez&background=0d9488&color=fff&size=512"
    );
}

#[test]
fn pending_and_loaded_resolve_to_primary() {
    let source = ImageSource::new("/profile.jpg", "https://example.test/avatar");
    assert_eq!(source.resolve(LoadOutcome::Pending), "/profile.jpg");
    assert_eq!(source.resolve(LoadOutcome::Loaded), "/profile.jpg");
}

#[test]
fn unreachable_image_resolves_to_placeholder() {
    let source = ImageSource::for_profile(&PORTFOLIO.profile);
    assert_eq!(
        source.resolve(LoadOutcome::Failed),
        "https://ui-avatars.com/api/?name=Rudolph+Benjamin&background=0d9488&color=fff&size=512"
    );
}

#[test]
fn default_outcome_is_pending() {
    assert_eq!(LoadOutcome::default(), LoadOutcome::Pending);
}
