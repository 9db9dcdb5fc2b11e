//! Frame state of the animated gradient background.
//!
//! Owns the pointer trail and its painter. Pointer samples arrive with a
//! top-left origin and are flipped so the trail works in texture space
//! (origin bottom-left).

use crate::config::{GradientConfig, SiteConfig};
use crate::effect::{FrameEffect, Lifecycle};
use crate::input::InputEvent;
use crate::trail::{TouchTrail, TrailPainter};

/// Values pushed to the gradient program every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientUniforms {
    pub time: f32,
    pub resolution: [f32; 2],
    pub colors: [[f32; 3]; 4],
    pub dark_base: [f32; 3],
    pub speed: f32,
    pub intensity: f32,
    pub grain_intensity: f32,
    pub gradient_size: f32,
    pub color1_weight: f32,
    pub color2_weight: f32,
    pub touch_strength: f32,
}

#[derive(Debug)]
pub struct GradientField<P> {
    time: f64,
    resolution: (f64, f64),
    palette: GradientConfig,
    trail: TouchTrail,
    painter: P,
    lifecycle: Lifecycle,
}

impl<P: TrailPainter> GradientField<P> {
    pub fn new(config: &SiteConfig, painter: P) -> Self {
        Self {
            time: 0.0,
            resolution: (1.0, 1.0),
            palette: config.gradient.clone(),
            trail: TouchTrail::new(&config.trail),
            painter,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn mark_initialized(&mut self) {
        self.lifecycle.advance(Lifecycle::Initialized, "gradient-field");
    }

    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMove { x, y } => {
                self.trail.add_touch(x, 1.0 - y);
            }
            InputEvent::Resize { width, height } => {
                self.resolution = (width.max(1.0), height.max(1.0));
            }
            _ => {}
        }
    }

    pub fn trail(&self) -> &TouchTrail {
        &self.trail
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    /// Whether the trail raster must be re-uploaded before drawing.
    pub fn take_trail_upload(&mut self) -> bool {
        self.trail.take_needs_upload()
    }

    pub fn uniforms(&self) -> GradientUniforms {
        let p = &self.palette;
        GradientUniforms {
            time: self.time as f32,
            resolution: [self.resolution.0 as f32, self.resolution.1 as f32],
            colors: p.colors,
            dark_base: p.dark_base,
            speed: p.speed,
            intensity: p.intensity,
            grain_intensity: p.grain_intensity,
            gradient_size: p.gradient_size,
            color1_weight: p.color1_weight,
            color2_weight: p.color2_weight,
            touch_strength: p.touch_strength,
        }
    }
}

impl<P: TrailPainter> FrameEffect for GradientField<P> {
    fn tick(&mut self, dt: f64) {
        if self.lifecycle == Lifecycle::Uninitialized {
            return;
        }
        self.lifecycle.advance(Lifecycle::Rendering, "gradient-field");
        self.trail.update(&mut self.painter);
        if dt.is_finite() && dt > 0.0 {
            self.time += dt;
        }
    }

    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::RasterPainter;

    fn field() -> GradientField<RasterPainter> {
        let config = SiteConfig::default();
        let mut f = GradientField::new(&config, RasterPainter::new(config.trail.size));
        f.mark_initialized();
        f
    }

    #[test]
    fn pointer_y_is_flipped_into_texture_space() {
        let mut f = field();
        f.handle(&InputEvent::PointerMove { x: 0.5, y: 0.2 });
        f.handle(&InputEvent::PointerMove { x: 0.5, y: 0.1 });
        let p = f.trail().points()[0];
        assert!((p.y - 0.9).abs() < 1e-12);
        assert!(p.vy > 0.0);
    }

    #[test]
    fn tick_accumulates_time_and_repaints() {
        let mut f = field();
        f.handle(&InputEvent::PointerMove { x: 0.4, y: 0.5 });
        f.handle(&InputEvent::PointerMove { x: 0.5, y: 0.5 });
        f.take_trail_upload();
        for _ in 0..10 {
            f.tick(0.1);
        }
        assert!((f.uniforms().time - 1.0).abs() < 1e-6);
        assert!(f.take_trail_upload());
        assert!(!f.painter().is_black());
    }

    #[test]
    fn uniforms_carry_the_palette() {
        let mut f = field();
        f.handle(&InputEvent::Resize { width: 1280.0, height: 720.0 });
        let u = f.uniforms();
        assert_eq!(u.resolution, [1280.0, 720.0]);
        assert_eq!(u.colors[0], [0.62, 0.13, 0.03]);
        assert_eq!(u.touch_strength, 0.15);
    }
}
