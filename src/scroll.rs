/// Vertical offset in pixels past which the navigation bar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the page is scrolled past [`NAV_SCROLL_THRESHOLD`].
/// Recomputed from the current offset on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub scrolled: bool,
}

impl ScrollState {
    pub fn from_offset(y: f64) -> Self {
        Self {
            scrolled: y > NAV_SCROLL_THRESHOLD,
        }
    }

    pub fn nav_class(self) -> &'static str {
        if self.scrolled {
            "fixed w-full z-50 transition-all duration-500 backdrop-blur-md border-b py-4"
        } else {
            "fixed w-full z-50 transition-all duration-500 bg-transparent py-6"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscrolled_by_default() {
        assert!(!ScrollState::default().scrolled);
        assert!(!ScrollState::from_offset(0.0).scrolled);
        assert!(!ScrollState::from_offset(NAV_SCROLL_THRESHOLD).scrolled);
    }

    #[test]
    fn test_follows_offset_both_ways() {
        let offsets = [0.0, 51.0, 400.0, 10.0, -20.0];
        let states = offsets
            .iter()
            .map(|y| ScrollState::from_offset(*y).scrolled)
            .collect::<Vec<_>>();
        assert_eq!(states, vec![false, true, true, false, false]);
    }

    #[test]
    fn test_nav_class() {
        assert!(ScrollState::from_offset(0.0)
            .nav_class()
            .contains("bg-transparent"));
        assert!(ScrollState::from_offset(120.0)
            .nav_class()
            .contains("backdrop-blur-md"));
    }
}
