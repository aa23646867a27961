use leptos::{ev::MouseEvent, html, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::use_reveal;
use crate::{
    content::Theme,
    reveal::reveal_class,
    sections::SectionId,
    spotlight::{PointerPosition, Spotlight},
};

/// Pointer position relative to the element the handler is attached to,
/// together with that element's size.
pub fn pointer_in_target(ev: &MouseEvent) -> Option<(PointerPosition, f64, f64)> {
    let el = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = el.get_bounding_client_rect();
    let pos = PointerPosition::relative_to(
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
        rect.left(),
        rect.top(),
    );
    Some((pos, rect.width(), rect.height()))
}

/// A page section that fades in the first time it scrolls into view.
#[component]
pub fn RevealSection(
    id: SectionId,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(id, node_ref);

    view! {
        <section
            id=id.anchor()
            node_ref=node_ref
            class=move || format!("{class} {}", reveal_class(revealed.get()))
        >
            {children()}
        </section>
    }
}

/// Card with a radial highlight that follows the pointer while hovered.
#[component]
pub fn SpotlightCard(
    theme: &'static Theme,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let spotlight = RwSignal::new(Spotlight::default());

    view! {
        <div
            class=format!("group relative overflow-hidden p-6 {} {class}", theme.card)
            on:mousemove=move |ev| {
                if let Some((pos, _, _)) = pointer_in_target(&ev) {
                    spotlight.update(|s| s.sample(pos));
                }
            }
        >
            <div
                class="pointer-events-none absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-300"
                style=move || spotlight.with(|s| s.style(theme.spotlight_rgba))
            ></div>
            <div class="relative">{children()}</div>
        </div>
    }
}
