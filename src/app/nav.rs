use leptos::prelude::*;
use leptos_router::components::A;

use super::hooks::use_scroll_state;
use crate::{content::Variant, navigation::scroll_to_section, sections::SectionId};

/// Jump to a section of the current render. Missing anchors are ignored.
pub fn jump_to(section: SectionId) {
    scroll_to_section(&document(), section);
}

#[component]
pub fn NavBar(variant: Variant) -> impl IntoView {
    let theme = variant.theme();
    let scroll = use_scroll_state();
    let (brand_accent, brand_plain) = variant.brand();
    let alternate = variant.alternate();

    let nav_items = variant
        .nav_items()
        .map(|id| {
            view! {
                <button
                    class="relative group transition-colors duration-300 hover:opacity-80"
                    on:click=move |_| jump_to(id)
                >
                    {id.label()}
                    <span class=format!(
                        "absolute -bottom-1 left-0 w-0 h-[1px] transition-all duration-300 group-hover:w-full {}",
                        theme.accent_bg,
                    )></span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            let state = scroll.get();
            if state.scrolled {
                format!("{} {}", state.nav_class(), theme.nav_scrolled)
            } else {
                state.nav_class().to_string()
            }
        }>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <div
                    class=format!(
                        "text-2xl font-bold tracking-widest cursor-pointer transition-colors {}",
                        theme.accent_text,
                    )
                    on:click=move |_| jump_to(SectionId::Home)
                >
                    {brand_accent}
                    <span class="opacity-80">{brand_plain}</span>
                </div>
                <div class="hidden md:flex items-center space-x-8 text-sm tracking-widest uppercase">
                    {nav_items}
                    <A
                        href=alternate.path()
                        attr:class="text-xs border rounded px-2 py-1 opacity-70 hover:opacity-100"
                    >
                        {format!("{alternate} theme")}
                    </A>
                </div>
            </div>
        </nav>
    }
}
