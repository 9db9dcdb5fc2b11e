//! Frame state of the liquid text effect.
//!
//! The GL side lives in the browser module; this type owns everything that
//! changes per frame and produces the uniform payload.

use crate::config::SiteConfig;
use crate::effect::{FrameEffect, Lifecycle};
use crate::input::InputEvent;
use crate::pointer::PointerSmoother;
use crate::text_capture::CaptureLayout;

/// Values pushed to the fluid program every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidUniforms {
    pub mouse: [f32; 2],
    pub time: f32,
    pub resolution: [f32; 2],
    pub padding: [f32; 2],
}

#[derive(Debug, Clone)]
pub struct TextFluid {
    pointer: PointerSmoother,
    elapsed: f64,
    resolution: (f64, f64),
    padding: (f64, f64),
    captured: bool,
    lifecycle: Lifecycle,
}

impl TextFluid {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            pointer: PointerSmoother::new(&config.pointer),
            elapsed: 0.0,
            resolution: (1.0, 1.0),
            padding: (0.0, 0.0),
            captured: false,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// GL program and buffers exist.
    pub fn mark_initialized(&mut self) {
        self.lifecycle.advance(Lifecycle::Initialized, "text-fluid");
    }

    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMove { x, y } => self.pointer.set_target(x, y),
            InputEvent::Resize { width, height } => {
                self.resolution = (width.max(1.0), height.max(1.0));
            }
            _ => {}
        }
    }

    /// Record a fresh text capture; its bleed becomes the shader's UV padding.
    pub fn set_capture(&mut self, layout: &CaptureLayout) {
        self.padding = layout.padding;
        self.captured = true;
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn uniforms(&self) -> FluidUniforms {
        let (mx, my) = self.pointer.position();
        FluidUniforms {
            mouse: [mx as f32, my as f32],
            time: self.elapsed as f32,
            resolution: [self.resolution.0 as f32, self.resolution.1 as f32],
            padding: [self.padding.0 as f32, self.padding.1 as f32],
        }
    }
}

impl FrameEffect for TextFluid {
    fn tick(&mut self, dt: f64) {
        if self.lifecycle == Lifecycle::Uninitialized {
            return;
        }
        self.lifecycle.advance(Lifecycle::Rendering, "text-fluid");
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.pointer.step();
    }

    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_capture::Rect;

    fn fluid() -> TextFluid {
        let mut f = TextFluid::new(&SiteConfig::default());
        f.mark_initialized();
        f
    }

    #[test]
    fn uninitialized_effect_ignores_ticks() {
        let mut f = TextFluid::new(&SiteConfig::default());
        f.tick(0.5);
        assert_eq!(f.elapsed(), 0.0);
        assert_eq!(f.lifecycle(), Lifecycle::Uninitialized);
    }

    #[test]
    fn pointer_eases_toward_last_move() {
        let mut f = fluid();
        f.handle(&InputEvent::PointerMove { x: 1.0, y: 0.5 });
        f.tick(1.0 / 60.0);
        assert_eq!(f.lifecycle(), Lifecycle::Rendering);
        let u = f.uniforms();
        assert!((u.mouse[0] - 0.54).abs() < 1e-6);
        assert_eq!(u.mouse[1], 0.5);
    }

    #[test]
    fn capture_sets_padding() {
        let mut f = fluid();
        let r = Rect { left: 0.0, top: 0.0, width: 200.0, height: 200.0 };
        f.set_capture(&CaptureLayout::plan(r, r, 100.0, 1.0, 20.0));
        f.handle(&InputEvent::Resize { width: 800.0, height: 600.0 });
        let u = f.uniforms();
        assert_eq!(u.padding, [0.25, 0.25]);
        assert_eq!(u.resolution, [800.0, 600.0]);
        assert!(f.is_captured());
    }

    #[test]
    fn time_is_monotonic() {
        let mut f = fluid();
        f.tick(0.25);
        f.tick(f64::NAN);
        f.tick(-1.0);
        f.tick(0.25);
        assert_eq!(f.uniforms().time, 0.5);
    }
}
