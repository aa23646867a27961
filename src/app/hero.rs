use std::sync::Arc;

use leptos::prelude::*;

use super::{
    avatar::{Avatar, Emblem},
    effects::RevealSection,
    nav::jump_to,
};
use crate::{
    content::{Profile, Variant},
    sections::SectionId,
};

#[component]
pub fn Hero(profile: Arc<Profile>, variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let showcase = variant.showcase();
    let outline_btn =
        "px-8 py-3 border border-gray-500 tracking-widest transition-all duration-300 hover:opacity-80";

    view! {
        <RevealSection
            id=SectionId::Home
            class="relative min-h-screen flex items-center pt-20 z-10"
        >
            <div class="container mx-auto px-6 flex flex-col md:flex-row items-center gap-12">
                <div class="md:w-[60%]">
                    <p class=format!(
                        "tracking-[0.2em] uppercase mb-4 text-sm {}",
                        theme.accent_text,
                    )>{profile.location.clone()}</p>
                    <h1 class="text-5xl md:text-7xl font-extrabold leading-tight mb-6 tracking-tight">
                        {profile.first_name().to_string()}
                        " "
                        <span class=theme.accent_text>{profile.last_name().to_string()}</span>
                    </h1>
                    <h2 class=format!(
                        "text-2xl md:text-3xl font-light mb-8 {}",
                        theme.muted_text,
                    )>{profile.title.clone()}</h2>
                    <p class=format!(
                        "text-lg max-w-xl leading-relaxed mb-10 border-l-2 pl-6 {} {}",
                        theme.muted_text,
                        theme.accent_border,
                    )>{profile.tagline.clone()}</p>
                    <div class="flex flex-wrap gap-4">
                        <button
                            class=format!(
                                "px-8 py-3 text-white font-semibold tracking-widest transition-colors duration-300 {}",
                                theme.accent_bg,
                            )
                            on:click=move |_| jump_to(SectionId::Contact)
                        >
                            "CONNECT"
                        </button>
                        <button class=outline_btn on:click=move |_| jump_to(showcase)>
                            "VIEW EXPERTISE"
                        </button>
                        <a href=profile.resume.clone() download="" class=outline_btn>
                            "DOWNLOAD CV"
                        </a>
                    </div>
                </div>
                <div class="md:w-[40%] flex flex-col items-center gap-6">
                    <Emblem theme />
                </div>
            </div>
            <div
                class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce cursor-pointer"
                on:click=move |_| jump_to(SectionId::About)
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    class=theme.muted_text
                    aria-label="Scroll to about"
                >
                    <path d="m6 9 6 6 6-6" />
                </svg>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn About(profile: Arc<Profile>, variant: Variant) -> impl IntoView {
    let theme = variant.theme();

    view! {
        <RevealSection
            id=SectionId::About
            class="min-h-screen flex flex-col md:flex-row justify-center items-center gap-10 py-32 px-6 container mx-auto"
        >
            <div class="md:w-1/2">
                <h2 class=format!("text-4xl font-bold mb-6 {}", theme.accent_text)>"About Me"</h2>
                <p class="max-w-2xl leading-relaxed">{profile.about.clone()}</p>
            </div>
            <div class="md:w-1/2 flex justify-center">
                <Avatar src=profile.picture.clone() alt=profile.first_name().to_string() theme />
            </div>
        </RevealSection>
    }
}
