use super::*;
use crate::util::storage::MemoryStorage;

fn store_with(storage: MemoryStorage) -> PreferenceStore<MemoryStorage, MemoryTarget> {
    PreferenceStore::new(storage, MemoryTarget::new())
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn default_preference_is_dark() {
    assert_eq!(ThemePreference::default(), ThemePreference::Dark);
}

#[test]
fn parse_accepts_only_exact_literals() {
    assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
    assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::parse("Dark"), None);
    assert_eq!(ThemePreference::parse(" light"), None);
    assert_eq!(ThemePreference::parse(""), None);
}

#[test]
fn toggle_is_an_involution() {
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        assert_ne!(toggle(pref), pref);
        assert_eq!(toggle(toggle(pref)), pref);
    }
}

#[test]
fn display_matches_stored_literal() {
    assert_eq!(ThemePreference::Light.to_string(), "light");
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
}

// =============================================================
// load
// =============================================================

#[test]
fn load_without_stored_value_is_dark() {
    assert_eq!(store_with(MemoryStorage::new()).load(), ThemePreference::Dark);
}

#[test]
fn load_with_unrecognized_value_is_dark() {
    for raw in ["", "blue", "LIGHT", "true", "null", "{\"theme\":\"light\"}"] {
        let store = store_with(MemoryStorage::new().with_value(STORAGE_KEY, raw));
        assert_eq!(store.load(), ThemePreference::Dark, "stored {raw:?}");
    }
}

#[test]
fn load_with_unavailable_storage_is_dark() {
    assert_eq!(store_with(MemoryStorage::failing()).load(), ThemePreference::Dark);
}

#[test]
fn load_reads_stored_light() {
    let store = store_with(MemoryStorage::new().with_value(STORAGE_KEY, "light"));
    assert_eq!(store.load(), ThemePreference::Light);
}

// =============================================================
// save / apply
// =============================================================

#[test]
fn saved_preference_survives_a_new_session() {
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        let durable = MemoryStorage::new();
        store_with(durable.clone()).save(pref);
        assert_eq!(store_with(durable).load(), pref);
    }
}

#[test]
fn save_writes_the_theme_slot() {
    let durable = MemoryStorage::new();
    store_with(durable.clone()).save(ThemePreference::Light);
    assert_eq!(durable.get("theme"), Ok(Some("light".to_owned())));
}

#[test]
fn save_with_unavailable_storage_does_not_panic() {
    let store = store_with(MemoryStorage::failing());
    store.save(ThemePreference::Light);
    assert_eq!(store.load(), ThemePreference::Dark);
}

#[test]
fn apply_is_idempotent() {
    let store = store_with(MemoryStorage::new());
    store.apply(ThemePreference::Light);
    store.apply(ThemePreference::Light);
    assert_eq!(store.target().current(), Some(ThemePreference::Light));
    assert_eq!(store.target().changes(), 1);
}

#[test]
fn apply_switches_marker() {
    let store = store_with(MemoryStorage::new());
    store.apply(ThemePreference::Dark);
    store.apply(ThemePreference::Light);
    assert_eq!(store.target().current(), Some(ThemePreference::Light));
    assert_eq!(store.target().changes(), 2);
}

#[test]
fn toggle_and_persist_applies_and_saves_next_value() {
    let durable = MemoryStorage::new();
    let store = store_with(durable.clone());
    let next = store.toggle_and_persist(ThemePreference::Dark);
    assert_eq!(next, ThemePreference::Light);
    assert_eq!(store.target().current(), Some(ThemePreference::Light));
    assert_eq!(durable.get(STORAGE_KEY), Ok(Some("light".to_owned())));
}

#[test]
fn toggle_with_unavailable_storage_still_changes_session_theme() {
    let store = store_with(MemoryStorage::failing());
    let next = store.toggle_and_persist(ThemePreference::Dark);
    assert_eq!(next, ThemePreference::Light);
    assert_eq!(store.target().current(), Some(ThemePreference::Light));
}

// =============================================================
// Scenario
// =============================================================

#[test]
fn first_visit_toggle_then_reload_restores_light() {
    let durable = MemoryStorage::new();

    let session = store_with(durable.clone());
    let initial = session.load();
    assert_eq!(initial, ThemePreference::Dark);
    let next = session.toggle_and_persist(initial);
    assert_eq!(next, ThemePreference::Light);

    let reloaded = store_with(durable);
    assert_eq!(reloaded.load(), ThemePreference::Light);
}

// =============================================================
// Browser bindings outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_dark_outside_browser() {
    assert_eq!(read_preference(), ThemePreference::Dark);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_and_commit_flips_both_ways_outside_browser() {
    assert_eq!(toggle_and_commit(ThemePreference::Dark), ThemePreference::Light);
    assert_eq!(toggle_and_commit(ThemePreference::Light), ThemePreference::Dark);
}

#[test]
fn toggle_and_persist_matches_pure_toggle() {
    let store = store_with(MemoryStorage::new());
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        assert_eq!(store.toggle_and_persist(pref), toggle(pref));
        assert_eq!(store.load(), toggle(pref));
        assert_eq!(store.target().current(), Some(toggle(pref)));
    }
}
