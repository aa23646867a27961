use leptos::prelude::*;

use super::effects::pointer_in_target;
use crate::{
    content::Theme,
    spotlight::Tilt,
};

#[component]
pub fn Avatar(#[prop(into)] src: String, #[prop(into)] alt: String, theme: &'static Theme) -> impl IntoView {
    view! {
        <div class=format!(
            "w-56 h-56 sm:w-64 sm:h-64 md:w-72 md:h-72 rounded-full overflow-hidden border-4 {}",
            theme.accent_border,
        )>
            <img src=src alt=alt class="w-full h-full object-cover" />
        </div>
    }
}

/// Spinning rings around a chip glyph, tilting towards the pointer with a
/// soft glare on top.
#[component]
pub fn Emblem(theme: &'static Theme) -> impl IntoView {
    let tilt = RwSignal::new(Tilt::default());
    let ring = move |inset: &str, opacity: &str, spin: &str| {
        format!(
            "absolute {inset} border {} rounded-full {opacity} {spin}",
            theme.accent_border
        )
    };

    view! {
        <div
            class="relative w-64 h-64 md:w-80 md:h-80 transition-transform duration-200 ease-out"
            style=move || tilt.with(Tilt::transform)
            on:mousemove=move |ev| {
                if let Some((pos, width, height)) = pointer_in_target(&ev) {
                    tilt.update(|t| t.sample(pos, width, height));
                }
            }
            on:mouseleave=move |_| tilt.update(Tilt::leave)
        >
            <div class=ring("inset-0", "opacity-20", "animate-spin-slow")></div>
            <div class=ring("inset-4", "opacity-40", "animate-reverse-spin")></div>
            <div class=ring("inset-8", "opacity-60", "animate-spin-slow")></div>
            <div class=format!(
                "absolute inset-0 flex items-center justify-center {}",
                theme.accent_text,
            )>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="64"
                    height="64"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    aria-hidden="true"
                >
                    <rect x="4" y="4" width="16" height="16" rx="2" />
                    <rect x="9" y="9" width="6" height="6" />
                    <path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2" />
                </svg>
            </div>
            <div
                class="pointer-events-none absolute inset-0 rounded-full"
                style=move || tilt.with(Tilt::glare_style)
            ></div>
        </div>
    }
}
