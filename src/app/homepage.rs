use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::hooks::{use_location, use_params_map};

use super::{
    contact::{Contact, Footer},
    hero::{About, Hero},
    hooks::provide_reveal_tracker,
    nav::{jump_to, NavBar},
    showcase::{Certificates, Education, Experience, Projects, Research, Skills},
};
use crate::{
    content::{Profile, Variant},
    sections::SectionId,
};

fn section_view(id: SectionId, profile: Arc<Profile>, variant: Variant) -> AnyView {
    match id {
        SectionId::Home => view! { <Hero profile variant /> }.into_any(),
        SectionId::About => view! { <About profile variant /> }.into_any(),
        SectionId::Skills => view! { <Skills profile variant /> }.into_any(),
        SectionId::Certificates => view! { <Certificates profile variant /> }.into_any(),
        SectionId::Work | SectionId::Projects => view! { <Projects profile variant id /> }.into_any(),
        SectionId::Research => view! { <Research profile variant /> }.into_any(),
        SectionId::Education => view! { <Education profile variant /> }.into_any(),
        SectionId::Experience => view! { <Experience profile variant /> }.into_any(),
        SectionId::Contact => view! { <Contact profile variant /> }.into_any(),
    }
}

/// Picks the variant from the optional `:variant` path segment.
#[component]
pub fn VariantPage() -> impl IntoView {
    let params = use_params_map();
    let variant = Memo::new(move |_| {
        let segment = params.read().get("variant").unwrap_or_default();
        Variant::from_path_segment(&segment)
    });

    move || match variant.get() {
        Some(variant) => Either::Left(view! { <PortfolioPage variant /> }),
        None => Either::Right(view! {
            <Title text="Not Found" />
            <p class="p-8 text-center">"Page not found."</p>
        }),
    }
}

/// The whole single-page portfolio for one variant, sections in layout order.
#[component]
pub fn PortfolioPage(variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let profile = match Profile::load(variant) {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("{e}");
            return Either::Right(view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center">"This page's content could not be loaded."</p>
            });
        }
    };

    provide_reveal_tracker();

    // deep links like /#contact land on the section once hydrated
    let hash = use_location().hash;
    Effect::new(move |_| {
        if let Some(id) = variant.resolve_anchor(&hash.get()) {
            jump_to(id);
        }
    });

    let sections = variant
        .layout()
        .iter()
        .map(|id| section_view(*id, profile.clone(), variant))
        .collect_view();

    Either::Left(view! {
        <Title text=profile.title.clone() />
        <div class=theme.page>
            <NavBar variant />
            {sections}
            <Footer profile variant />
        </div>
    })
}
