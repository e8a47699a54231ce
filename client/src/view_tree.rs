//! Pure page renderer: (theme, menu, content) -> view tree.
//!
//! ARCHITECTURE
//! ============
//! Components never iterate content directly. They receive pieces of a
//! `PageView` built here, so ordering and theme/menu-dependent choices are
//! plain data that can be compared in tests. Every list maps one view unit
//! per source entry in source order; nothing is sorted, filtered, or merged.

#[cfg(test)]
#[path = "view_tree_test.rs"]
mod view_tree_test;

use crate::content::{Icon, NavLink, Portfolio};
use crate::state::ui::MenuState;
use crate::util::anchor::LinkTarget;
use crate::util::image::ImageSource;
use crate::util::theme::ThemePreference;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    /// Marker for the document-level styling layer.
    pub theme: ThemePreference,
    pub nav: NavView,
    pub body: BodyView,
}

/// Everything below the navigation bar. Depends on content only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyView {
    pub hero: HeroView,
    pub experience: ExperienceView,
    pub skills: SkillsView,
    pub projects: ProjectsView,
    pub contact: ContactView,
    pub footer: FooterView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    pub label: &'static str,
    pub href: String,
    pub target: LinkTarget,
}

impl LinkView {
    pub fn new(label: &'static str, href: impl Into<String>) -> Self {
        let href = href.into();
        let target = LinkTarget::for_href(&href);
        Self { label, href, target }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavView {
    pub links: Vec<NavLink>,
    /// Sun while dark (switch to light), moon while light.
    pub theme_icon: Icon,
    pub menu_open: bool,
    pub menu_icon: Icon,
    /// Dropdown entries; only present while the menu is open.
    pub mobile_links: Option<Vec<NavLink>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionHeading {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroView {
    pub id: &'static str,
    pub greeting: &'static str,
    pub name: &'static str,
    pub headline: &'static str,
    pub bio: Vec<&'static str>,
    pub actions: Vec<ActionView>,
    pub photo: ImageSource,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionView {
    pub link: LinkView,
    pub primary: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceView {
    pub heading: SectionHeading,
    pub items: Vec<ExperienceItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceItem {
    pub role: &'static str,
    /// `"<organization> | <period>"`.
    pub meta: String,
    pub description: &'static str,
}

/// Icon card shared by skills and certifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillsView {
    pub heading: SectionHeading,
    pub skills: Vec<Card>,
    pub certifications_heading: &'static str,
    pub certifications: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectsView {
    pub heading: SectionHeading,
    pub cards: Vec<ProjectCard>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: Vec<&'static str>,
    pub link: LinkView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactView {
    pub id: &'static str,
    pub lead: &'static str,
    pub heading: &'static str,
    pub blurb: &'static str,
    pub mail: LinkView,
    pub socials: Vec<SocialView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialView {
    pub icon: Icon,
    pub link: LinkView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterView {
    pub credit: &'static str,
}

/// Render the whole page.
pub fn render(theme: ThemePreference, menu: MenuState, content: &Portfolio) -> PageView {
    PageView { theme, nav: render_nav(theme, menu, content.nav_links), body: render_body(content) }
}

/// Navigation bar; the only part that depends on theme and menu state.
pub fn render_nav(theme: ThemePreference, menu: MenuState, nav_links: &[NavLink]) -> NavView {
    let links = nav_links.to_vec();
    let menu_open = menu.is_open();
    NavView {
        mobile_links: menu_open.then(|| links.clone()),
        links,
        theme_icon: if theme.is_dark() { Icon::Sun } else { Icon::Moon },
        menu_open,
        menu_icon: if menu_open { Icon::Close } else { Icon::Menu },
    }
}

pub fn render_body(content: &Portfolio) -> BodyView {
    BodyView {
        hero: render_hero(content),
        experience: ExperienceView {
            heading: SectionHeading { id: "experience", number: "01", title: "Experience" },
            items: content
                .experiences
                .iter()
                .map(|e| ExperienceItem {
                    role: e.role,
                    meta: format!("{} | {}", e.organization, e.period),
                    description: e.description,
                })
                .collect(),
        },
        skills: SkillsView {
            heading: SectionHeading { id: "skills", number: "02", title: "Skills & Certifications" },
            skills: content
                .skills
                .iter()
                .map(|s| Card { icon: s.icon, title: s.name, description: s.description })
                .collect(),
            certifications_heading: content.certifications_heading,
            certifications: content
                .certifications
                .iter()
                .map(|c| Card { icon: c.icon, title: c.name, description: c.description })
                .collect(),
        },
        projects: ProjectsView {
            heading: SectionHeading { id: "projects", number: "03", title: "Academic Projects" },
            cards: content
                .projects
                .iter()
                .map(|p| ProjectCard {
                    title: p.title,
                    description: p.description,
                    tags: p.tags.to_vec(),
                    link: LinkView::new(p.title, p.link),
                })
                .collect(),
        },
        contact: render_contact(content),
        footer: FooterView { credit: content.profile.credit },
    }
}

fn render_hero(content: &Portfolio) -> HeroView {
    let profile = &content.profile;
    HeroView {
        id: "about",
        greeting: profile.greeting,
        name: profile.name,
        headline: profile.headline,
        bio: profile.bio.to_vec(),
        actions: content
            .hero_actions
            .iter()
            .map(|a| ActionView { link: LinkView::new(a.label, a.href), primary: a.primary })
            .collect(),
        photo: ImageSource::for_profile(profile),
    }
}

fn render_contact(content: &Portfolio) -> ContactView {
    let contact = &content.contact;
    ContactView {
        id: "contact",
        lead: contact.lead,
        heading: contact.heading,
        blurb: contact.blurb,
        mail: LinkView::new(contact.button_label, contact.mail_href()),
        socials: contact
            .socials
            .iter()
            .map(|s| SocialView { icon: s.icon, link: LinkView::new(s.label, s.href) })
            .collect(),
    }
}
