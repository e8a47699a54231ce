//! Contact block (`#contact`): mail link and social profiles.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::link::OutboundLink;
use crate::view_tree::ContactView;

#[component]
pub fn ContactSection(contact: ContactView) -> impl IntoView {
    let socials = contact
        .socials
        .into_iter()
        .map(|social| {
            let label = social.link.label;
            view! {
                <OutboundLink link=social.link class="contact__social" label=label>
                    <IconGlyph icon=social.icon/>
                </OutboundLink>
            }
        })
        .collect_view();
    let mail_label = contact.mail.label;

    view! {
        <section id=contact.id class="section contact">
            <div class="section__inner section__inner--center">
                <p class="contact__lead">{contact.lead}</p>
                <h2 class="contact__heading">{contact.heading}</h2>
                <p class="contact__blurb">{contact.blurb}</p>
                <OutboundLink link=contact.mail class="contact__mail">
                    {mail_label}
                </OutboundLink>
                <div class="contact__socials">{socials}</div>
            </div>
        </section>
    }
}
