//! Theme preference: load, toggle, apply, persist.
//!
//! Reads the user's preference from the `"theme"` storage slot and marks the
//! `<html>` element with `data-theme` plus a `dark` class so every styled
//! component resolves its variant from one place. Toggling writes back
//! immediately so a reload observes the latest choice.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A missing, malformed, or unreadable slot loads
//! as `Dark`; a failed write keeps the preference for the current session
//! only. SSR paths skip the browser entirely to keep server output
//! deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::sync::{Arc, Mutex};

use super::storage::{KeyValueStore, StorageError};

/// Storage slot holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Visual mode chosen by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Literal written to storage and to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored literal. Only the exact strings `"light"` and `"dark"` match.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opposite preference. No side effects.
pub fn toggle(current: ThemePreference) -> ThemePreference {
    current.toggle()
}

/// Document-level marker that the styling layer reads.
pub trait ThemeTarget {
    /// Mark the document with `pref`. Marking the current value again changes nothing.
    fn mark(&self, pref: ThemePreference);

    /// The marker currently on the document, if any.
    fn current(&self) -> Option<ThemePreference>;
}

/// The `<html>` element of the live document.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
impl DocumentRoot {
    fn element() -> Option<web_sys::Element> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
    }
}

#[cfg(feature = "hydrate")]
impl ThemeTarget for DocumentRoot {
    fn mark(&self, pref: ThemePreference) {
        let Some(el) = Self::element() else {
            return;
        };
        let _ = el.set_attribute("data-theme", pref.as_str());
        let class_list = el.class_list();
        if pref.is_dark() {
            let _ = class_list.add_1("dark");
        } else {
            let _ = class_list.remove_1("dark");
        }
    }

    fn current(&self) -> Option<ThemePreference> {
        Self::element()
            .and_then(|el| el.get_attribute("data-theme"))
            .and_then(|raw| ThemePreference::parse(&raw))
    }
}

/// In-process marker for SSR and tests. Counts actual marker changes.
#[derive(Clone, Debug, Default)]
pub struct MemoryTarget {
    inner: Arc<Mutex<(Option<ThemePreference>, usize)>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the marker value actually changed.
    pub fn changes(&self) -> usize {
        self.inner.lock().map_or(0, |guard| guard.1)
    }
}

impl ThemeTarget for MemoryTarget {
    fn mark(&self, pref: ThemePreference) {
        if let Ok(mut guard) = self.inner.lock() {
            if guard.0 != Some(pref) {
                guard.0 = Some(pref);
                guard.1 += 1;
            }
        }
    }

    fn current(&self) -> Option<ThemePreference> {
        self.inner.lock().ok().and_then(|guard| guard.0)
    }
}

/// Preference persistence bound to one storage backend and one document marker.
#[derive(Clone, Debug)]
pub struct PreferenceStore<S, T> {
    storage: S,
    target: T,
}

#[cfg(feature = "hydrate")]
impl PreferenceStore<super::storage::BrowserStorage, DocumentRoot> {
    /// Store bound to `localStorage` and the live `<html>` element.
    pub fn browser() -> Self {
        Self::new(super::storage::BrowserStorage, DocumentRoot)
    }
}

impl<S: KeyValueStore, T: ThemeTarget> PreferenceStore<S, T> {
    pub fn new(storage: S, target: T) -> Self {
        Self { storage, target }
    }

    /// Read the persisted preference. Never fails: absent, malformed, or
    /// unreadable slots all yield `Dark`.
    pub fn load(&self) -> ThemePreference {
        match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_default(),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                report_fault("load", &err);
                ThemePreference::default()
            }
        }
    }

    /// Persist `pref`. A write fault leaves the preference session-only.
    pub fn save(&self, pref: ThemePreference) {
        if let Err(err) = self.storage.set(STORAGE_KEY, pref.as_str()) {
            report_fault("save", &err);
        }
    }

    /// Mark the document with `pref`.
    pub fn apply(&self, pref: ThemePreference) {
        self.target.mark(pref);
    }

    /// Apply and persist in one synchronous step.
    pub fn commit(&self, pref: ThemePreference) {
        self.apply(pref);
        self.save(pref);
    }

    /// Flip `current`, then apply and persist the result.
    pub fn toggle_and_persist(&self, current: ThemePreference) -> ThemePreference {
        let next = toggle(current);
        self.commit(next);
        next
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

fn report_fault(op: &str, err: &StorageError) {
    #[cfg(feature = "hydrate")]
    log::warn!("theme preference {op} skipped: {err}");
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (op, err);
    }
}

/// Read the persisted preference from the browser. `Dark` outside the browser.
pub fn read_preference() -> ThemePreference {
    #[cfg(feature = "hydrate")]
    {
        PreferenceStore::browser().load()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemePreference::default()
    }
}

/// Flip `current`, apply it to the live document, and persist it.
///
/// Outside the browser only the flip happens.
pub fn toggle_and_commit(current: ThemePreference) -> ThemePreference {
    #[cfg(feature = "hydrate")]
    {
        PreferenceStore::browser().toggle_and_persist(current)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        toggle(current)
    }
}
