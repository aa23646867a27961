//! One-shot reveal tracking for page sections.
//!
//! Every section starts out `Watching`. The first intersection sample at or
//! above [`REVEAL_THRESHOLD`] moves it to `Revealed`, after which nothing
//! can move it back. Tearing the page down cancels whatever is still
//! watching so no subscription outlives the view.

use std::collections::HashMap;

use crate::sections::SectionId;

/// Fraction of a section's area that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Watching,
    Revealed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Revealed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionVisibility {
    id: SectionId,
    phase: RevealPhase,
}

impl SectionVisibility {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            phase: RevealPhase::Watching,
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn has_been_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Whether the section still holds a live observation subscription.
    pub fn is_subscribed(&self) -> bool {
        self.phase == RevealPhase::Watching
    }

    /// Feed one intersection sample.
    pub fn observe(&mut self, ratio: f64) -> Transition {
        if self.phase == RevealPhase::Watching && ratio >= REVEAL_THRESHOLD {
            self.phase = RevealPhase::Revealed;
            log::debug!("section {} revealed at ratio {ratio:.2}", self.id);
            Transition::Revealed
        } else {
            Transition::None
        }
    }

    /// Release the subscription. Returns true if one was still live.
    pub fn cancel(&mut self) -> bool {
        if self.phase == RevealPhase::Watching {
            self.phase = RevealPhase::Cancelled;
            true
        } else {
            false
        }
    }
}

/// Collapses one batch of observer entries, given as
/// `(is_intersecting, intersection_ratio)`, into the ratio to observe.
/// Entries that are not intersecting count as zero.
pub fn batch_ratio(entries: impl IntoIterator<Item = (bool, f64)>) -> f64 {
    entries
        .into_iter()
        .filter(|(intersecting, _)| *intersecting)
        .map(|(_, ratio)| ratio)
        .fold(0.0, f64::max)
}

/// All reveal state for one page view.
#[derive(Debug, Default)]
pub struct RevealTracker {
    sections: HashMap<SectionId, SectionVisibility>,
    torn_down: bool,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a section. Attaching an already tracked section keeps its state.
    pub fn attach(&mut self, id: SectionId) -> &SectionVisibility {
        let torn_down = self.torn_down;
        self.sections.entry(id).or_insert_with(|| {
            let mut v = SectionVisibility::new(id);
            if torn_down {
                v.cancel();
            }
            v
        })
    }

    pub fn observe(&mut self, id: SectionId, ratio: f64) -> Transition {
        self.sections
            .get_mut(&id)
            .map(|v| v.observe(ratio))
            .unwrap_or(Transition::None)
    }

    /// Releases one section's subscription, e.g. when it unmounts on its own.
    pub fn cancel(&mut self, id: SectionId) -> bool {
        self.sections.get_mut(&id).is_some_and(SectionVisibility::cancel)
    }

    pub fn is_subscribed(&self, id: SectionId) -> bool {
        self.sections
            .get(&id)
            .is_some_and(SectionVisibility::is_subscribed)
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.sections
            .get(&id)
            .is_some_and(SectionVisibility::has_been_revealed)
    }

    pub fn live_subscriptions(&self) -> usize {
        self.sections.values().filter(|v| v.is_subscribed()).count()
    }

    /// Cancels every live subscription. Returns the number released.
    pub fn teardown(&mut self) -> usize {
        self.torn_down = true;
        let released = self
            .sections
            .values_mut()
            .map(SectionVisibility::cancel)
            .filter(|released| *released)
            .count();
        log::debug!("reveal tracker torn down, {released} subscriptions released");
        released
    }
}

/// Classes for the hidden and revealed visual states.
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "transition-all duration-700 opacity-100 translate-y-0"
    } else {
        "transition-all duration-700 opacity-0 translate-y-8"
    }
}
