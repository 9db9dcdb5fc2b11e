//! Exponentially damped pointer position.
//!
//! Input events only overwrite the target; [`PointerSmoother::step`] runs once
//! per animation frame, so the smoothed position keeps easing toward the last
//! known target after the pointer stops.

use crate::config::PointerConfig;

const MIDPOINT: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct PointerSmoother {
    target_x: f64,
    target_y: f64,
    smoothed_x: f64,
    smoothed_y: f64,
    damping: f64,
}

impl PointerSmoother {
    pub fn new(config: &PointerConfig) -> Self {
        Self {
            target_x: f64::NAN,
            target_y: f64::NAN,
            smoothed_x: MIDPOINT,
            smoothed_y: MIDPOINT,
            damping: config.damping.clamp(0.0, 1.0),
        }
    }

    /// Record the latest normalized pointer position. Non-finite samples are
    /// dropped and the previous target kept.
    pub fn set_target(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.target_x = x;
            self.target_y = y;
        }
    }

    /// Advance one frame and return the smoothed position.
    pub fn step(&mut self) -> (f64, f64) {
        // Until the first pointer event the target is unset.
        for v in [
            &mut self.target_x,
            &mut self.target_y,
            &mut self.smoothed_x,
            &mut self.smoothed_y,
        ] {
            if !v.is_finite() {
                *v = MIDPOINT;
            }
        }
        self.smoothed_x += (self.target_x - self.smoothed_x) * self.damping;
        self.smoothed_y += (self.target_y - self.smoothed_y) * self.damping;
        self.position()
    }

    pub fn position(&self) -> (f64, f64) {
        (self.smoothed_x, self.smoothed_y)
    }

    pub fn target(&self) -> (f64, f64) {
        (self.target_x, self.target_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smoother() -> PointerSmoother {
        PointerSmoother::new(&PointerConfig::default())
    }

    #[test]
    fn rests_at_midpoint_before_any_input() {
        let mut s = smoother();
        assert_eq!(s.step(), (0.5, 0.5));
        assert_eq!(s.target(), (0.5, 0.5));
    }

    #[test]
    fn nan_samples_are_ignored() {
        let mut s = smoother();
        s.set_target(0.9, 0.1);
        s.set_target(f64::NAN, 0.3);
        assert_eq!(s.target(), (0.9, 0.1));
    }

    #[test]
    fn first_step_covers_damping_fraction() {
        let mut s = smoother();
        s.set_target(1.5, 0.5);
        let (x, y) = s.step();
        assert!((x - 0.58).abs() < 1e-12);
        assert_eq!(y, 0.5);
    }

    #[test]
    fn converges_monotonically() {
        let mut s = smoother();
        s.set_target(1.0, 0.0);
        let mut prev = s.position();
        let mut steps = 0;
        while (s.position().0 - 1.0).abs() > 1e-3 {
            let next = s.step();
            assert!(next.0 > prev.0 && next.1 < prev.1);
            prev = next;
            steps += 1;
            assert!(steps < 200);
        }
        // 0.5 * 0.92^n < 1e-3 needs n = 75
        assert_eq!(steps, 75);
    }
}
