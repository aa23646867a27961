use std::cell::RefCell;

use portfolio_site::{
    content::{Profile, Variant},
    navigation::{scroll_to, AnchorLookup, ScrollTarget},
    reveal::{batch_ratio, RevealTracker, Transition},
    scroll::ScrollState,
    sections::SectionId,
    spotlight::{neutral_tilt, spotlight_style, PointerPosition, Spotlight, Tilt},
};

/// Stand-in for the rendered document: the anchors of one variant plus a
/// scroll position that moves when an element is scrolled into view.
struct RenderedPage {
    anchors: Vec<(&'static str, f64)>,
    scroll_y: RefCell<f64>,
}

impl RenderedPage {
    fn of(variant: Variant) -> Self {
        let anchors = variant
            .layout()
            .iter()
            .enumerate()
            .map(|(i, id)| (id.anchor(), i as f64 * 900.0))
            .collect();
        Self {
            anchors,
            scroll_y: RefCell::new(0.0),
        }
    }
}

struct Anchor<'a> {
    top: f64,
    scroll_y: &'a RefCell<f64>,
}

impl ScrollTarget for Anchor<'_> {
    fn scroll_into_view_smooth(&self) {
        *self.scroll_y.borrow_mut() = self.top;
    }
}

impl<'a> AnchorLookup for &'a RenderedPage {
    type Target = Anchor<'a>;

    fn find(&self, id: &str) -> Option<Self::Target> {
        let page: &'a RenderedPage = *self;
        page.anchors
            .iter()
            .find(|(anchor, _)| *anchor == id)
            .map(|(_, top)| Anchor {
                top: *top,
                scroll_y: &page.scroll_y,
            })
    }
}

fn mounted(variant: Variant) -> RevealTracker {
    let mut tracker = RevealTracker::new();
    for id in variant.layout() {
        tracker.attach(*id);
    }
    tracker
}

#[test]
fn reveal_is_monotonic_and_single_fire() {
    let mut tracker = mounted(Variant::Neural);
    for id in Variant::Neural.layout() {
        assert!(!tracker.is_revealed(*id));
    }

    let samples = [0.1, 0.25, 0.0, 0.6, 0.05, 1.0];
    let fired = samples
        .iter()
        .filter(|r| tracker.observe(SectionId::Skills, **r) == Transition::Revealed)
        .count();
    assert_eq!(fired, 1);
    assert!(tracker.is_revealed(SectionId::Skills));

    // leaving the viewport and tearing down never un-reveals
    tracker.observe(SectionId::Skills, 0.0);
    tracker.teardown();
    assert!(tracker.is_revealed(SectionId::Skills));
}

#[test]
fn skill_bars_match_levels() {
    for variant in Variant::ALL {
        let profile = Profile::load(variant).unwrap();
        for skill in &profile.skills {
            assert!((0..=100).contains(&skill.level), "{variant}: {}", skill.name);
            assert_eq!(skill.fill_width(), format!("{}%", skill.level));
        }
    }
}

#[test]
fn out_of_range_levels_pass_through() {
    let record = r#"{
        "name": "Test Person",
        "title": "t",
        "tagline": "t",
        "location": "l",
        "about": "a",
        "picture": "/p.png",
        "resume": "/cv.pdf",
        "social": { "linkedin": "", "github": "", "email": "" },
        "skills": [
            { "name": "Overflow", "level": 130 },
            { "name": "Negative", "level": -5 }
        ]
    }"#;
    let profile: Profile = serde_json::from_str(record).unwrap();
    let widths = profile
        .skills
        .iter()
        .map(|s| s.fill_width())
        .collect::<Vec<_>>();
    assert_eq!(widths, ["130%", "-5%"]);
}

#[test]
fn python_and_nextjs_bars_are_equal() {
    let profile = Profile::load(Variant::Neural).unwrap();
    let width = |name: &str| {
        profile
            .skills
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.fill_width())
            .unwrap()
    };
    assert_eq!(width("Python"), "95%");
    assert_eq!(width("Python"), width("Next.js"));
}

#[test]
fn navigation_to_anchors() {
    let page = RenderedPage::of(Variant::Neural);

    assert!(scroll_to(&&page, "contact"));
    let at_contact = *page.scroll_y.borrow();
    assert!(at_contact > 0.0);

    // research only exists in the scholar layout
    assert!(!scroll_to(&&page, "research"));
    assert!(!scroll_to(&&page, "abuot"));
    assert_eq!(*page.scroll_y.borrow(), at_contact);
}

#[test]
fn every_nav_item_resolves() {
    for variant in Variant::ALL {
        let page = RenderedPage::of(variant);
        for id in variant.nav_items() {
            assert!(scroll_to(&&page, id.anchor()), "{variant}: {id}");
        }
        assert!(scroll_to(&&page, variant.showcase().anchor()));
    }
}

#[test]
fn neural_nav_lists_certificates_after_projects() {
    let nav = Variant::Neural.nav_items().collect::<Vec<_>>();
    let pos = |id| nav.iter().position(|n| *n == id).unwrap();
    assert!(pos(SectionId::Projects) < pos(SectionId::Certificates));
    assert_eq!(nav.last(), Some(&SectionId::Contact));
    assert!(!nav.contains(&SectionId::Home));
}

#[test]
fn hash_deep_links_resolve_per_variant() {
    let page = RenderedPage::of(Variant::Scholar);
    let id = Variant::Scholar.resolve_anchor("#research").unwrap();
    assert!(scroll_to(&&page, id.anchor()));
    assert_eq!(Variant::Neural.resolve_anchor("#research"), None);
}

#[test]
fn nav_bar_follows_scroll() {
    assert!(!ScrollState::from_offset(0.0).scrolled);
    assert!(ScrollState::from_offset(300.0).scrolled);
    assert!(!ScrollState::from_offset(0.0).scrolled);
}

#[test]
fn unmount_before_any_reveal_releases_everything() {
    let mut tracker = mounted(Variant::Scholar);
    let sections = Variant::Scholar.layout().len();
    assert_eq!(tracker.live_subscriptions(), sections);

    assert_eq!(tracker.teardown(), sections);
    assert_eq!(tracker.live_subscriptions(), 0);

    // a late callback after teardown does nothing
    assert_eq!(
        tracker.observe(SectionId::About, 1.0),
        Transition::None
    );
    assert!(!tracker.is_revealed(SectionId::About));
}

#[test]
fn observer_batches_reveal_once() {
    let mut tracker = mounted(Variant::Neural);
    let batches: [&[(bool, f64)]; 4] = [
        &[(false, 0.8)],
        &[(true, 0.1), (true, 0.05)],
        &[(false, 0.9), (true, 0.3)],
        &[(true, 1.0)],
    ];
    let fired = batches
        .iter()
        .map(|batch| tracker.observe(SectionId::About, batch_ratio(batch.iter().copied())))
        .filter(|t| *t == Transition::Revealed)
        .count();
    assert_eq!(fired, 1);
    assert!(tracker.is_revealed(SectionId::About));
    // stop-on-reveal leaves nothing to cancel for this section
    assert!(!tracker.cancel(SectionId::About));
}

#[test]
fn spotlight_tracks_last_pointer_sample() {
    let card_origin = (320.0, 1200.0);
    let samples = [(330.0, 1210.0), (400.0, 1250.0), (512.0, 1333.0)];
    let mut spot = Spotlight::default();
    for (cx, cy) in samples {
        spot.sample(PointerPosition::relative_to(cx, cy, card_origin.0, card_origin.1));
    }
    let rgba = "rgba(59,130,246,0.15)";
    let expected = spotlight_style(PointerPosition { x: 192.0, y: 133.0 }, rgba);
    assert_eq!(spot.style(rgba), expected);
    assert!(expected.contains("at 192px 133px"));
}

#[test]
fn emblem_tilt_resets_on_leave() {
    let mut tilt = Tilt::default();
    tilt.sample(PointerPosition::relative_to(10.0, 10.0, 0.0, 0.0), 320.0, 320.0);
    assert_ne!(tilt.transform(), neutral_tilt());
    assert!(!tilt.glare_style().is_empty());
    tilt.leave();
    assert_eq!(tilt.transform(), neutral_tilt());
    assert!(tilt.glare_style().is_empty());
}
