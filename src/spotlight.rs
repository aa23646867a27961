//! Pointer-driven decoration: the radial spotlight on cards and the
//! parallax tilt on the hero emblem.

/// Maximum tilt, in degrees, on either axis.
pub const TILT_MAX_ANGLE: f64 = 12.0;
/// Glare opacity with the pointer on a corner of the tilted element.
pub const GLARE_MAX_OPACITY: f64 = 0.25;
const TILT_PERSPECTIVE_PX: u32 = 1000;

/// Pointer offset relative to the hovered element's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn relative_to(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Self {
        Self {
            x: client_x - origin_left,
            y: client_y - origin_top,
        }
    }
}

/// Background for a card with the highlight centred on the pointer.
pub fn spotlight_style(pos: PointerPosition, rgba: &str) -> String {
    format!(
        "background: radial-gradient(600px circle at {:.0}px {:.0}px, {rgba}, transparent 40%);",
        pos.x, pos.y
    )
}

/// Rotation angles in degrees as `(rotate_x, rotate_y)`.
///
/// The element centre is neutral; the edges reach `max_angle`. Pointer
/// positions outside the element are clamped to its edges.
pub fn tilt_angles(pos: PointerPosition, width: f64, height: f64, max_angle: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = ((pos.x / width) * 2.0 - 1.0).clamp(-1.0, 1.0);
    let ny = ((pos.y / height) * 2.0 - 1.0).clamp(-1.0, 1.0);
    // pointer towards the top tilts the top edge away; `+ 0.0` folds -0.0
    (-ny * max_angle + 0.0, nx * max_angle + 0.0)
}

pub fn tilt_transform(pos: PointerPosition, width: f64, height: f64) -> String {
    let (rx, ry) = tilt_angles(pos, width, height, TILT_MAX_ANGLE);
    format!("transform: perspective({TILT_PERSPECTIVE_PX}px) rotateX({rx:.2}deg) rotateY({ry:.2}deg);")
}

pub fn neutral_tilt() -> String {
    format!("transform: perspective({TILT_PERSPECTIVE_PX}px) rotateX(0.00deg) rotateY(0.00deg);")
}

/// Glare strength grows with the pointer's distance from the centre.
pub fn glare_opacity(pos: PointerPosition, width: f64, height: f64) -> f64 {
    let (rx, ry) = tilt_angles(pos, width, height, 1.0);
    (rx.hypot(ry) / std::f64::consts::SQRT_2) * GLARE_MAX_OPACITY
}

/// Spotlight state of one card: the last pointer sample wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spotlight {
    pointer: Option<PointerPosition>,
}

impl Spotlight {
    pub fn sample(&mut self, pos: PointerPosition) {
        self.pointer = Some(pos);
    }

    /// Empty until the pointer has moved over the card.
    pub fn style(&self, rgba: &str) -> String {
        self.pointer
            .map(|pos| spotlight_style(pos, rgba))
            .unwrap_or_default()
    }
}

/// Tilt state of the hero emblem. Leaving the element returns it to neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    hover: Option<(PointerPosition, f64, f64)>,
}

impl Tilt {
    pub fn sample(&mut self, pos: PointerPosition, width: f64, height: f64) {
        self.hover = Some((pos, width, height));
    }

    pub fn leave(&mut self) {
        self.hover = None;
    }

    pub fn transform(&self) -> String {
        match self.hover {
            Some((pos, width, height)) => tilt_transform(pos, width, height),
            None => neutral_tilt(),
        }
    }

    pub fn glare_style(&self) -> String {
        match self.hover {
            Some((pos, width, height)) => spotlight_style(
                pos,
                &format!("rgba(255,255,255,{:.2})", glare_opacity(pos, width, height)),
            ),
            None => String::new(),
        }
    }
}
