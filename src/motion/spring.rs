//! Damped harmonic spring, stepped once per animation frame.
//!
//! Each step applies the closed-form solution of
//! `m·x'' + c·x' + k·(x - target) = 0` over the elapsed time, so the result
//! does not depend on frame rate and the spring cannot blow up on long
//! frames.

/// Longest interval a single step will integrate, in seconds.
pub const MAX_STEP_SECONDS: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target below which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Tuning used by tilt surfaces.
    pub const TILT: Self = Self {
        stiffness: 300.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.01,
    };

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::TILT
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self::at(0.0, config)
    }

    pub fn at(value: f64, config: SpringConfig) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// True once the spring sits exactly on its target with no velocity.
    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Returns whether the spring is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            return false;
        }
        if dt <= 0.0 || !dt.is_finite() {
            return true;
        }

        let dt = dt.min(MAX_STEP_SECONDS);
        let (offset, velocity) = self.solve(self.position - self.target, self.velocity, dt);
        self.position = self.target + offset;
        self.velocity = velocity;

        if offset.abs() < self.config.rest_delta && velocity.abs() < self.config.rest_speed {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }

        true
    }

    /// Offset from the target and velocity after `t` seconds, starting from
    /// offset `x0` and velocity `v0`.
    fn solve(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let omega = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            let decay = (-omega * t).exp();
            let slope = v0 + omega * x0;
            return (decay * (x0 + slope * t), decay * (v0 - omega * slope * t));
        }

        if zeta < 1.0 {
            let decay_rate = zeta * omega;
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-decay_rate * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let offset = decay * (x0 * cos + ((v0 + decay_rate * x0) / damped) * sin);
            let velocity =
                decay * (v0 * cos - ((omega * omega * x0 + decay_rate * v0) / damped) * sin);
            return (offset, velocity);
        }

        let root = omega * (zeta * zeta - 1.0).sqrt();
        let r1 = -zeta * omega + root;
        let r2 = -zeta * omega - root;
        let c1 = (v0 - r2 * x0) / (r1 - r2);
        let c2 = x0 - c1;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SpringConfig::TILT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run_until_settled(spring: &mut Spring, max_frames: usize) -> Option<usize> {
        (1..=max_frames).find(|_| !spring.step(FRAME))
    }

    #[test]
    fn tilt_tuning_is_lightly_underdamped() {
        let ratio = SpringConfig::TILT.damping_ratio();
        assert!(ratio > 0.85 && ratio < 0.88, "ratio was {ratio}");
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut spring = Spring::default();
        spring.set_target(0.5);

        let frames = run_until_settled(&mut spring, 120).expect("spring settles");
        assert!(frames < 60, "took {frames} frames");
        assert_eq!(spring.position(), 0.5);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn unit_step_overshoot_stays_below_one_percent() {
        let mut spring = Spring::default();
        spring.set_target(0.5);

        let mut peak = 0.0_f64;
        while spring.step(FRAME) {
            peak = peak.max(spring.position());
        }

        let overshoot = (peak - 0.5).max(0.0) / 0.5;
        assert!(overshoot < 0.01, "overshoot was {overshoot}");
    }

    #[test]
    fn large_frame_gap_is_clamped() {
        let mut clamped = Spring::default();
        clamped.set_target(0.5);
        clamped.step(5.0);

        let mut reference = Spring::default();
        reference.set_target(0.5);
        reference.step(MAX_STEP_SECONDS);

        assert_eq!(clamped.position(), reference.position());
    }

    #[test]
    fn non_positive_step_changes_nothing() {
        let mut spring = Spring::default();
        spring.set_target(0.25);

        assert!(spring.step(0.0));
        assert!(spring.step(-1.0));
        assert!(spring.step(f64::NAN));
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn settled_spring_reports_no_motion() {
        let mut spring = Spring::at(0.3, SpringConfig::TILT);
        assert!(!spring.step(FRAME));
        assert_eq!(spring.position(), 0.3);
    }

    #[test]
    fn non_finite_target_is_ignored() {
        let mut spring = Spring::default();
        spring.set_target(f64::INFINITY);
        assert_eq!(spring.target(), 0.0);
    }

    #[test]
    fn critical_and_overdamped_tunings_converge_without_overshoot() {
        let critical = SpringConfig {
            damping: 2.0 * 300.0_f64.sqrt(),
            ..SpringConfig::TILT
        };
        let overdamped = SpringConfig {
            damping: 80.0,
            ..SpringConfig::TILT
        };

        for config in [critical, overdamped] {
            let mut spring = Spring::new(config);
            spring.set_target(-0.5);
            let mut lowest = 0.0_f64;
            let frames = (1..=600)
                .find(|_| {
                    let moving = spring.step(FRAME);
                    lowest = lowest.min(spring.position());
                    !moving
                })
                .expect("spring settles");

            assert!(frames < 600);
            assert!(lowest >= -0.5 - 1e-9, "overshot to {lowest}");
            assert_eq!(spring.position(), -0.5);
        }
    }

    #[test]
    fn retargeting_mid_flight_keeps_velocity() {
        let mut spring = Spring::default();
        spring.set_target(0.5);
        spring.step(FRAME);
        spring.step(FRAME);
        let velocity = spring.velocity();

        spring.set_target(0.0);
        assert_eq!(spring.velocity(), velocity);
        assert!(spring.step(FRAME));
    }
}
