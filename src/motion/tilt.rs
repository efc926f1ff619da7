use super::spring::{Spring, SpringConfig};

pub const MAX_TILT_DEGREES: f64 = 10.0;
pub const PERSPECTIVE_PX: u32 = 1200;
const SAMPLE_DOMAIN: (f64, f64) = (-0.5, 0.5);

/// Element rectangle in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
            || !self.left.is_finite()
            || !self.top.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
    }
}

/// Pointer position relative to the centre of an element, in `[-0.5, 0.5]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const NEUTRAL: Self = Self { x: 0.0, y: 0.0 };

    pub fn from_client(client_x: f64, client_y: f64, bounds: &Bounds) -> Self {
        if bounds.is_degenerate() || !client_x.is_finite() || !client_y.is_finite() {
            return Self::NEUTRAL;
        }

        let x = (client_x - bounds.left) / bounds.width - 0.5;
        let y = (client_y - bounds.top) / bounds.height - 0.5;
        Self {
            x: x.clamp(SAMPLE_DOMAIN.0, SAMPLE_DOMAIN.1),
            y: y.clamp(SAMPLE_DOMAIN.0, SAMPLE_DOMAIN.1),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Pitch, driven by the vertical sample.
    pub x_deg: f64,
    /// Yaw, driven by the horizontal sample.
    pub y_deg: f64,
}

impl Rotation {
    #[cfg(test)]
    pub const FLAT: Self = Self {
        x_deg: 0.0,
        y_deg: 0.0,
    };

    /// Rotation for spring positions `x` (horizontal) and `y` (vertical).
    /// Positions outside `[-0.5, 0.5]` are clamped first.
    pub fn from_positions(x: f64, y: f64) -> Self {
        Self {
            x_deg: map_range(y, SAMPLE_DOMAIN, (MAX_TILT_DEGREES, -MAX_TILT_DEGREES)),
            y_deg: map_range(x, SAMPLE_DOMAIN, (-MAX_TILT_DEGREES, MAX_TILT_DEGREES)),
        }
    }

    pub fn to_css(self) -> String {
        let Self { x_deg, y_deg } = self;
        format!("rotateX({x_deg:.3}deg) rotateY({y_deg:.3}deg)")
    }
}

/// Linear interpolation of `value` from `from` onto `to`, clamped to the
/// input domain.
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let (low, high) = (from.0.min(from.1), from.0.max(from.1));
    let clamped = value.clamp(low, high);
    let progress = (clamped - from.0) / (from.1 - from.0);
    to.0 + (to.1 - to.0) * progress
}

/// Layer offsets toward the viewer inside a tilt surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Depth {
    Shallow,
    Raised,
    Lifted,
    Panel,
    Floating,
    Glare,
}

impl Depth {
    pub fn px(self) -> u32 {
        match self {
            Self::Shallow => 20,
            Self::Raised => 30,
            Self::Lifted => 35,
            Self::Panel => 40,
            Self::Floating => 50,
            Self::Glare => 60,
        }
    }

    pub fn style(self) -> String {
        format!(
            "transform: translateZ({}px); transform-style: preserve-3d;",
            self.px()
        )
    }
}

/// Pointer-driven tilt state for one card: one spring per axis.
#[derive(Clone, Debug)]
pub struct TiltSurface {
    x: Spring,
    y: Spring,
    reduced_motion: bool,
}

impl TiltSurface {
    pub fn new() -> Self {
        Self::with_config(SpringConfig::TILT)
    }

    pub fn with_config(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config),
            y: Spring::new(config),
            reduced_motion: false,
        }
    }

    /// With reduced motion the surface ignores pointer input and eases back
    /// to flat.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        if reduced {
            self.on_pointer_leave();
        }
    }

    /// `bounds` must be the element's rectangle at the time of the event.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, bounds: Bounds) {
        if self.reduced_motion {
            return;
        }
        let sample = PointerSample::from_client(client_x, client_y, &bounds);
        self.x.set_target(sample.x);
        self.y.set_target(sample.y);
    }

    pub fn on_pointer_leave(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    #[cfg(test)]
    pub fn target(&self) -> PointerSample {
        PointerSample {
            x: self.x.target(),
            y: self.y.target(),
        }
    }

    /// Advance both springs. Returns whether either axis is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }

    #[cfg(test)]
    pub fn is_at_rest(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn rotation(&self) -> Rotation {
        Rotation::from_positions(self.x.position(), self.y.position())
    }

    pub fn transform(&self) -> String {
        self.rotation().to_css()
    }
}

impl Default for TiltSurface {
    fn default() -> Self {
        Self::new()
    }
}
