use super::*;
use crate::content::PORTFOLIO;

fn open_menu() -> MenuState {
    let mut menu = MenuState::default();
    menu.toggle();
    menu
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn equal_inputs_render_equal_trees() {
    let a = render(ThemePreference::Light, open_menu(), &PORTFOLIO);
    let b = render(ThemePreference::Light, open_menu(), &PORTFOLIO);
    assert_eq!(a, b);
}

#[test]
fn theme_marker_follows_input_theme() {
    for theme in [ThemePreference::Light, ThemePreference::Dark] {
        assert_eq!(render(theme, MenuState::default(), &PORTFOLIO).theme, theme);
    }
}

#[test]
fn page_body_matches_standalone_body_render() {
    let page = render(ThemePreference::Light, open_menu(), &PORTFOLIO);
    assert_eq!(page.body, render_body(&PORTFOLIO));
    assert_eq!(page.nav, render_nav(ThemePreference::Light, open_menu(), PORTFOLIO.nav_links));
}

#[test]
fn body_does_not_depend_on_theme_or_menu() {
    let dark = render(ThemePreference::Dark, MenuState::default(), &PORTFOLIO);
    let light = render(ThemePreference::Light, open_menu(), &PORTFOLIO);
    assert_eq!(dark.body, light.body);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn theme_toggle_icon_offers_the_other_mode() {
    let dark = render_nav(ThemePreference::Dark, MenuState::default(), PORTFOLIO.nav_links);
    let light = render_nav(ThemePreference::Light, MenuState::default(), PORTFOLIO.nav_links);
    assert_eq!(dark.theme_icon, Icon::Sun);
    assert_eq!(light.theme_icon, Icon::Moon);
}

#[test]
fn closed_menu_has_no_dropdown() {
    let nav = render_nav(ThemePreference::Dark, MenuState::default(), PORTFOLIO.nav_links);
    assert!(!nav.menu_open);
    assert_eq!(nav.menu_icon, Icon::Menu);
    assert!(nav.mobile_links.is_none());
}

#[test]
fn open_menu_lists_every_link_in_order() {
    let nav = render_nav(ThemePreference::Dark, open_menu(), PORTFOLIO.nav_links);
    assert_eq!(nav.menu_icon, Icon::Close);
    let mobile = nav.mobile_links.expect("dropdown rendered while open");
    assert_eq!(mobile, nav.links);
    let labels: Vec<_> = mobile.iter().map(|l| l.name).collect();
    assert_eq!(labels, ["About", "Experience", "Skills", "Projects", "Contact"]);
}

#[test]
fn nav_links_stay_in_page() {
    let nav = render_nav(ThemePreference::Dark, MenuState::default(), PORTFOLIO.nav_links);
    assert!(nav.links.iter().all(|l| LinkTarget::for_href(l.href) == LinkTarget::SameDocument));
}

// =============================================================
// Sections
// =============================================================

#[test]
fn experience_renders_three_entries_in_source_order() {
    let body = render_body(&PORTFOLIO);
    let roles: Vec<_> = body.experience.items.iter().map(|i| i.role).collect();
    let source: Vec<_> = PORTFOLIO.experiences.iter().map(|e| e.role).collect();
    assert_eq!(roles.len(), 3);
    assert_eq!(roles, source);
    assert_eq!(body.experience.items[0].meta, "Self-Employed | Jan 2024 - Present");
}

#[test]
fn projects_render_three_cards_in_source_order() {
    let body = render_body(&PORTFOLIO);
    let titles: Vec<_> = body.projects.cards.iter().map(|c| c.title).collect();
    assert_eq!(
        titles,
        ["Points Credit System", "Popcorn - Find Your Favorite Movies", "Portfolio Website"]
    );
    assert_eq!(body.projects.cards[0].tags, ["PHP", "MySQL", "Web App"]);
}

#[test]
fn external_project_links_open_new_context() {
    let body = render_body(&PORTFOLIO);
    assert_eq!(body.projects.cards[0].link.href, "https://github.com/codefucks007/sikp");
    assert_eq!(body.projects.cards[0].link.target, LinkTarget::NewContext);
    assert_eq!(body.projects.cards[2].link.href, "#");
}

#[test]
fn skills_and_certifications_keep_lengths_and_order() {
    let body = render_body(&PORTFOLIO);
    assert_eq!(body.skills.skills.len(), PORTFOLIO.skills.len());
    assert_eq!(body.skills.certifications.len(), PORTFOLIO.certifications.len());
    assert_eq!(body.skills.skills[0].title, "Frontend & Web");
    assert_eq!(body.skills.skills[3].icon, Icon::Wifi);
    assert_eq!(body.skills.certifications[1].description, "Certified Database Programmer (Jul 2024)");
}

#[test]
fn section_headings_are_numbered_in_page_order() {
    let body = render_body(&PORTFOLIO);
    let numbers = [body.experience.heading.number, body.skills.heading.number, body.projects.heading.number];
    assert_eq!(numbers, ["01", "02", "03"]);
}

#[test]
fn every_nav_target_has_a_section() {
    let body = render_body(&PORTFOLIO);
    let ids = [
        body.hero.id,
        body.experience.heading.id,
        body.skills.heading.id,
        body.projects.heading.id,
        body.contact.id,
    ];
    for link in PORTFOLIO.nav_links {
        let id = link.anchor_id().expect("nav link is a fragment");
        assert!(ids.contains(&id), "no section for #{id}");
    }
}

#[test]
fn hero_actions_jump_to_sections() {
    let body = render_body(&PORTFOLIO);
    let hrefs: Vec<_> = body.hero.actions.iter().map(|a| a.link.href.as_str()).collect();
    assert_eq!(hrefs, ["#projects", "#contact"]);
    assert!(body.hero.actions[0].primary);
}

#[test]
fn hero_photo_falls_back_to_name_avatar() {
    let body = render_body(&PORTFOLIO);
    assert_eq!(body.hero.photo.primary, "/profile.jpg");
    assert!(body.hero.photo.fallback.contains("name=Rudolph+Benjamin"));
}

#[test]
fn contact_uses_mail_link_and_external_socials() {
    let body = render_body(&PORTFOLIO);
    assert_eq!(body.contact.mail.href, "mailto:anakmanusia245@gmail.com");
    assert_eq!(body.contact.mail.target, LinkTarget::Mail);
    let icons: Vec<_> = body.contact.socials.iter().map(|s| s.icon).collect();
    assert_eq!(icons, [Icon::Github, Icon::Instagram]);
    assert!(body.contact.socials.iter().all(|s| s.link.target == LinkTarget::NewContext));
}
