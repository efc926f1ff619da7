//! Decorative blurred shapes drifting behind the page.

pub const PARTICLE_COUNT: usize = 6;
pub const PALETTE: [&str; 4] = ["#3b82f6", "#8b5cf6", "#06b6d4", "#10b981"];
pub const SCALE_KEYFRAMES: [f64; 3] = [1.0, 1.5, 1.0];

const DRIFT_RANGE_PX: f64 = 400.0;
const MIN_SIZE_PX: f64 = 200.0;
const SIZE_RANGE_PX: f64 = 400.0;
const MIN_DURATION_SECONDS: f64 = 15.0;
const DURATION_RANGE_SECONDS: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub drift_x: [f64; 3],
    pub drift_y: [f64; 3],
    pub width_px: f64,
    pub height_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_seconds: f64,
    pub color: &'static str,
}

impl Particle {
    fn random(index: usize, rng: &mut fastrand::Rng) -> Self {
        let mut drift = || DRIFT_RANGE_PX.mul_add(rng.f64(), -DRIFT_RANGE_PX / 2.0);
        let drift_x = [drift(), drift(), drift()];
        let drift_y = [drift(), drift(), drift()];

        Self {
            drift_x,
            drift_y,
            width_px: SIZE_RANGE_PX.mul_add(rng.f64(), MIN_SIZE_PX),
            height_px: SIZE_RANGE_PX.mul_add(rng.f64(), MIN_SIZE_PX),
            left_pct: rng.f64() * 100.0,
            top_pct: rng.f64() * 100.0,
            duration_seconds: DURATION_RANGE_SECONDS.mul_add(rng.f64(), MIN_DURATION_SECONDS),
            color: PALETTE[index % PALETTE.len()],
        }
    }

    /// Inline style: placement plus the custom properties read by the
    /// `particle-drift` keyframes.
    pub fn style(&self) -> String {
        let [x0, x1, x2] = self.drift_x;
        let [y0, y1, y2] = self.drift_y;
        let [s0, s1, s2] = SCALE_KEYFRAMES;
        format!(
            "width: {:.1}px; height: {:.1}px; left: {:.2}%; top: {:.2}%; background-color: {}; \
             animation-duration: {:.2}s; \
             --drift-x0: {x0:.1}px; --drift-x1: {x1:.1}px; --drift-x2: {x2:.1}px; \
             --drift-y0: {y0:.1}px; --drift-y1: {y1:.1}px; --drift-y2: {y2:.1}px; \
             --scale0: {s0}; --scale1: {s1}; --scale2: {s2};",
            self.width_px,
            self.height_px,
            self.left_pct,
            self.top_pct,
            self.color,
            self.duration_seconds,
        )
    }
}

/// Particle parameters drawn once and kept for the lifetime of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate(rng: &mut fastrand::Rng) -> Self {
        Self {
            particles: (0..PARTICLE_COUNT)
                .map(|index| Particle::random(index, rng))
                .collect(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::generate(&mut fastrand::Rng::with_seed(seed))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_has_six_particles_in_documented_ranges() {
        let field = ParticleField::with_seed(7);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);

        for particle in field.particles() {
            for drift in particle.drift_x.iter().chain(&particle.drift_y) {
                assert!((-200.0..200.0).contains(drift), "drift {drift}");
            }
            assert!((200.0..600.0).contains(&particle.width_px));
            assert!((200.0..600.0).contains(&particle.height_px));
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!((0.0..100.0).contains(&particle.top_pct));
            assert!((15.0..25.0).contains(&particle.duration_seconds));
        }
    }

    #[test]
    fn colours_cycle_through_palette() {
        let field = ParticleField::with_seed(1);
        let colours: Vec<_> = field.particles().iter().map(|p| p.color).collect();
        assert_eq!(
            colours,
            vec![
                "#3b82f6", "#8b5cf6", "#06b6d4", "#10b981", "#3b82f6", "#8b5cf6"
            ]
        );
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        assert_eq!(ParticleField::with_seed(42), ParticleField::with_seed(42));
        assert_ne!(ParticleField::with_seed(42), ParticleField::with_seed(43));
    }

    #[test]
    fn style_exposes_keyframe_properties() {
        let particle = Particle {
            drift_x: [-10.0, 0.0, 10.0],
            drift_y: [5.0, -5.0, 0.0],
            width_px: 250.0,
            height_px: 300.0,
            left_pct: 12.5,
            top_pct: 80.0,
            duration_seconds: 18.25,
            color: PALETTE[2],
        };

        let style = particle.style();
        assert!(style.starts_with("width: 250.0px; height: 300.0px; left: 12.50%; top: 80.00%;"));
        assert!(style.contains("background-color: #06b6d4;"));
        assert!(style.contains("animation-duration: 18.25s;"));
        assert!(style.contains("--drift-x0: -10.0px;"));
        assert!(style.contains("--drift-y1: -5.0px;"));
        assert!(style.contains("--scale1: 1.5;"));
    }
}
