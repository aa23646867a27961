use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::sections::SectionId;

pub trait ScrollTarget {
    fn scroll_into_view_smooth(&self);
}

/// Something that can resolve an anchor id to a scrollable element.
pub trait AnchorLookup {
    type Target: ScrollTarget;

    fn find(&self, id: &str) -> Option<Self::Target>;
}

/// Smoothly scrolls the element with the given id into view.
///
/// Returns false, leaving the scroll position untouched, when no such
/// element exists in the current render.
pub fn scroll_to<L: AnchorLookup>(lookup: &L, id: &str) -> bool {
    match lookup.find(id) {
        Some(target) => {
            target.scroll_into_view_smooth();
            true
        }
        None => {
            log::debug!("no element with id {id:?}, ignoring navigation");
            false
        }
    }
}

pub fn scroll_to_section<L: AnchorLookup>(lookup: &L, section: SectionId) -> bool {
    scroll_to(lookup, section.anchor())
}

impl ScrollTarget for web_sys::Element {
    fn scroll_into_view_smooth(&self) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

impl AnchorLookup for web_sys::Document {
    type Target = web_sys::Element;

    fn find(&self, id: &str) -> Option<Self::Target> {
        self.get_element_by_id(id)
    }
}
