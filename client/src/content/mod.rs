//! Static portfolio content records.
//!
//! DESIGN
//! ======
//! Every record borrows `'static` data so the whole page content is a single
//! constant. Nothing mutates these lists at runtime; list order is display
//! order, curated by hand rather than sorted.

mod data;


pub use data::PORTFOLIO;

/// Icon tags resolved to glyphs by the styling layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Server,
    Database,
    Wifi,
    Award,
    Briefcase,
    Github,
    Instagram,
    Mail,
    ExternalLink,
    Sun,
    Moon,
    Menu,
    Close,
}

impl Icon {
    pub const ALL: [Icon; 14] = [
        Self::Code,
        Self::Server,
        Self::Database,
        Self::Wifi,
        Self::Award,
        Self::Briefcase,
        Self::Github,
        Self::Instagram,
        Self::Mail,
        Self::ExternalLink,
        Self::Sun,
        Self::Moon,
        Self::Menu,
        Self::Close,
    ];

    /// Stable slug used in `icon--<slug>` class names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Server => "server",
            Self::Database => "database",
            Self::Wifi => "wifi",
            Self::Award => "award",
            Self::Briefcase => "briefcase",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Mail => "mail",
            Self::ExternalLink => "external-link",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Menu => "menu",
            Self::Close => "close",
        }
    }
}

/// Navigation entry pointing at a section anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// Section id this link jumps to, without the leading `#`.
    pub fn anchor_id(&self) -> Option<&'static str> {
        crate::util::anchor::fragment_id(self.href)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CertificationEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// One role on the experience timeline. `period` is free text ("Jan 2024 - Present").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// A showcased project. `link` may be the placeholder `"#"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

/// Call-to-action button in the hero block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroAction {
    pub label: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub headline: &'static str,
    pub bio: &'static [&'static str],
    /// Site-root path of the photo. The file itself is dropped into the
    /// site root at deploy time and is not part of `public/`.
    pub photo: &'static str,
    pub credit: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub lead: &'static str,
    pub heading: &'static str,
    pub blurb: &'static str,
    pub email: &'static str,
    pub button_label: &'static str,
    pub socials: &'static [SocialLink],
}

impl Contact {
    /// Direct mail link for the contact button.
    pub fn mail_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// The complete content set rendered by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub nav_links: &'static [NavLink],
    pub hero_actions: &'static [HeroAction],
    pub experiences: &'static [ExperienceEntry],
    pub skills: &'static [SkillEntry],
    pub certifications_heading: &'static str,
    pub certifications: &'static [CertificationEntry],
    pub projects: &'static [ProjectEntry],
    pub contact: Contact,
}
