#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod build_info;
pub mod content;
pub mod navigation;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod spotlight;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a second init only happens on hot reload
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
