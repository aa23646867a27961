use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::{
    reveal::{batch_ratio, RevealTracker, Transition, REVEAL_THRESHOLD},
    scroll::ScrollState,
    sections::SectionId,
};

/// Reveal state shared by every section of one page view.
#[derive(Debug, Clone, Copy)]
pub struct RevealContext(RwSignal<RevealTracker>);

/// Creates the page's tracker and tears it down when the page unmounts.
pub fn provide_reveal_tracker() -> RevealContext {
    let tracker = RwSignal::new(RevealTracker::new());
    on_cleanup(move || {
        tracker.try_update_untracked(RevealTracker::teardown);
    });
    let ctx = RevealContext(tracker);
    provide_context(ctx);
    ctx
}

/// Tracks the one-shot reveal of a section.
///
/// The observer is stopped as soon as the section is revealed and again on
/// cleanup, so unmounting before any intersection releases it too. Without
/// IntersectionObserver support the flag simply stays false.
pub fn use_reveal(id: SectionId, target: NodeRef<html::Section>) -> Signal<bool> {
    let RevealContext(tracker) = use_context::<RevealContext>().unwrap_or_else(|| {
        log::debug!("section {id} has no page tracker, using its own");
        RevealContext(RwSignal::new(RevealTracker::new()))
    });
    tracker.update_untracked(|t| {
        t.attach(id);
    });

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let ratio = batch_ratio(
                entries
                    .iter()
                    .map(|entry| (entry.is_intersecting(), entry.intersection_ratio())),
            );
            tracker.maybe_update(|t| t.observe(id, ratio) == Transition::Revealed);
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    let revealed: Signal<bool> = Memo::new(move |_| tracker.with(|t| t.is_revealed(id))).into();

    let stop_on_reveal = stop.clone();
    Effect::watch(
        move || revealed.get(),
        move |revealed, _, _| {
            if *revealed {
                stop_on_reveal();
            }
        },
        false,
    );

    on_cleanup(move || {
        let released = tracker
            .try_update_untracked(|t| t.cancel(id))
            .unwrap_or(false);
        if released {
            log::debug!("section {id} unmounted before reveal");
        }
        stop();
    });

    revealed
}

/// Navigation bar state, recomputed from the window's scroll offset.
pub fn use_scroll_state() -> Signal<ScrollState> {
    let (_, y) = use_window_scroll();
    Memo::new(move |_| ScrollState::from_offset(y.get())).into()
}
