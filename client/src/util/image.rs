//! Image source resolution with a generated-avatar fallback.
//!
//! The view layer only ever sees the resolved URL: the primary resource while
//! it is pending or loaded, the placeholder once the browser reports a load
//! failure.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use crate::content::Profile;

const AVATAR_ENDPOINT: &str = "https://ui-avatars.com/api/";
const AVATAR_BACKGROUND: &str = "0d9488";
const AVATAR_COLOR: &str = "fff";
const AVATAR_SIZE: u32 = 512;

/// Placeholder avatar URL keyed by `name`.
///
/// Whitespace runs become `+`; every other reserved or non-ASCII byte is
/// percent-encoded so the name cannot leak into sibling query parameters.
pub fn placeholder_avatar_url(name: &str) -> String {
    let name = name.split_whitespace().map(urlencoding::encode).collect::<Vec<_>>().join("+");
    format!("{AVATAR_ENDPOINT}?name={name}&background={AVATAR_BACKGROUND}&color={AVATAR_COLOR}&size={AVATAR_SIZE}")
}

/// Load state of the primary resource as reported by the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadOutcome {
    #[default]
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    pub primary: String,
    pub fallback: String,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self { primary: primary.into(), fallback: fallback.into() }
    }

    /// Profile photo with the avatar placeholder as fallback.
    pub fn for_profile(profile: &Profile) -> Self {
        Self::new(profile.photo, placeholder_avatar_url(profile.name))
    }

    pub fn resolve(&self, outcome: LoadOutcome) -> &str {
        match outcome {
            LoadOutcome::Failed => &self.fallback,
            LoadOutcome::Pending | LoadOutcome::Loaded => &self.primary,
        }
    }
}
