//! Introduction block (`#about`) with profile photo and call-to-action links.

use leptos::prelude::*;

use crate::util::anchor;
use crate::util::image::{ImageSource, LoadOutcome};
use crate::view_tree::{ActionView, HeroView};

#[component]
pub fn Hero(hero: HeroView) -> impl IntoView {
    let actions = hero.actions.into_iter().map(|action| view! { <HeroActionLink action=action/> }).collect_view();
    let bio = hero.bio.into_iter().map(|p| view! { <p>{p}</p> }).collect_view();

    view! {
        <section id=hero.id class="hero">
            <div class="hero__inner">
                <div class="hero__text">
                    <p class="hero__greeting">{hero.greeting}</p>
                    <h1 class="hero__name">{format!("{}.", hero.name)}</h1>
                    <h2 class="hero__headline">{hero.headline}</h2>
                    <div class="hero__bio">{bio}</div>
                    <div class="hero__actions">{actions}</div>
                </div>
                <div class="hero__photo">
                    <div class="hero__glow" aria-hidden="true"></div>
                    <div class="hero__frame">
                        <ProfilePhoto source=hero.photo alt=hero.name/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroActionLink(action: ActionView) -> impl IntoView {
    let href = action.link.href.clone();
    view! {
        <a
            class="hero__action"
            class:hero__action--primary=action.primary
            href=action.link.href
            on:click=move |ev: leptos::ev::MouseEvent| {
                if let Some(id) = anchor::fragment_id(&href) {
                    ev.prevent_default();
                    anchor::scroll_to(id);
                }
            }
        >
            {action.link.label}
        </a>
    }
}

/// Photo that swaps to the generated avatar when the primary image fails.
#[component]
pub fn ProfilePhoto(source: ImageSource, alt: &'static str) -> impl IntoView {
    let outcome = RwSignal::new(LoadOutcome::Pending);
    let img_ref = NodeRef::<leptos::html::Img>::new();

    // The error event can fire before hydration attaches listeners.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(img) = img_ref.get() else {
            return;
        };
        if img.complete() && img.natural_width() == 0 && outcome.get_untracked() == LoadOutcome::Pending {
            log::debug!("profile photo failed before hydration, using placeholder");
            outcome.set(LoadOutcome::Failed);
        }
    });

    let src = move || source.resolve(outcome.get()).to_owned();

    view! {
        <img
            class="hero__image"
            node_ref=img_ref
            src=src
            alt=alt
            on:load=move |_| {
                if outcome.get_untracked() == LoadOutcome::Pending {
                    outcome.set(LoadOutcome::Loaded);
                }
            }
            on:error=move |_| outcome.set(LoadOutcome::Failed)
        />
    }
}
