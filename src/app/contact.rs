use std::sync::Arc;

use leptos::prelude::*;

use super::effects::RevealSection;
use crate::{
    build_info::{built_stamp, copyright_year},
    content::{Profile, Variant},
    sections::SectionId,
};

#[component]
pub fn Contact(profile: Arc<Profile>, variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let link_class = format!(
        "flex items-center gap-2 transition-colors hover:opacity-80 {}",
        theme.accent_text,
    );
    let links = [
        ("📧", "Email", profile.social.email.clone()),
        ("in", "LinkedIn", profile.social.linkedin.clone()),
        ("⌥", "GitHub", profile.social.github.clone()),
    ]
    .into_iter()
    .map(|(icon, label, href)| {
        view! {
            <a href=href class=link_class.clone() aria-label=label>
                <span class="text-xl w-6 text-center" aria-hidden="true">{icon}</span>
                {label}
            </a>
        }
    })
    .collect_view();

    view! {
        <RevealSection
            id=SectionId::Contact
            class="min-h-screen flex flex-col justify-center items-center py-32 px-6 container mx-auto"
        >
            <h2 class=format!(
                "text-4xl font-bold mb-6 text-center {}",
                theme.accent_text,
            )>"Contact"</h2>
            <div class="flex flex-col md:flex-row gap-6 items-center justify-center">{links}</div>
        </RevealSection>
    }
}

#[component]
pub fn Footer(profile: Arc<Profile>, variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let built = built_stamp();
    view! {
        <footer class=format!("py-8 text-center text-sm {}", theme.muted_text)>
            <p>{format!("© {} {}", copyright_year(), profile.name)}</p>
            {built.map(|stamp| view! { <p class="mt-1 text-xs opacity-70">{stamp}</p> })}
        </footer>
    }
}
