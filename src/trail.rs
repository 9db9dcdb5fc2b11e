//! Decaying pointer "ink" trail.
//!
//! [`TouchTrail`] keeps a short list of recent pointer-motion samples. Each
//! update tick drifts every sample along its velocity, ages it, drops expired
//! ones and hands a [`TrailSplat`] per survivor to a [`TrailPainter`]. The
//! painted raster is the displacement map the gradient background samples:
//! red/green hold the motion direction mapped from `[-1, 1]` to `[0, 255]`,
//! blue holds intensity.
//!
//! The browser paints through a 2D canvas; [`RasterPainter`] is a CPU
//! equivalent used off-browser.

use std::f64::consts::FRAC_PI_2;

use crate::config::TrailConfig;

/// Portion of a point's life spent fading in.
const EASE_IN_SHARE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub age: u32,
    pub max_age: u32,
    /// Scaled squared displacement, `0..=max_force`.
    pub force: f64,
    pub vx: f64,
    pub vy: f64,
}

/// One soft circle to draw, in raster pixel coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSplat {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Channel values in `0..=255`.
    pub rgb: [f64; 3],
    /// `0.2 * intensity`, clamped to `0..=1`.
    pub alpha: f64,
}

pub trait TrailPainter {
    /// Reset the whole raster to opaque black.
    fn clear(&mut self);
    fn splat(&mut self, splat: &TrailSplat);
}

#[derive(Debug, Clone)]
pub struct TouchTrail {
    points: Vec<TrailPoint>,
    last: Option<(f64, f64)>,
    size: u32,
    max_age: u32,
    radius: f64,
    force_scale: f64,
    max_force: f64,
    needs_upload: bool,
}

impl TouchTrail {
    pub fn new(config: &TrailConfig) -> Self {
        let size = config.size.max(1);
        Self {
            points: Vec::new(),
            last: None,
            size,
            max_age: config.max_age.max(1),
            radius: config.radius_fraction * f64::from(size),
            force_scale: config.force_scale,
            max_force: config.max_force,
            needs_upload: true,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Feed a normalized pointer sample (`y` grows upward).
    ///
    /// Returns `true` when a trail point was appended. The very first sample
    /// only establishes the reference position, and a sample identical to the
    /// previous one is dropped.
    pub fn add_touch(&mut self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let Some((last_x, last_y)) = self.last else {
            self.last = Some((x, y));
            return false;
        };
        let dx = x - last_x;
        let dy = y - last_y;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        let dd = dx * dx + dy * dy;
        let d = dd.sqrt();
        self.last = Some((x, y));
        self.points.push(TrailPoint {
            x,
            y,
            age: 0,
            max_age: self.max_age,
            force: (dd * self.force_scale).clamp(0.0, self.max_force),
            vx: dx / d,
            vy: dy / d,
        });
        true
    }

    /// Advance one tick and repaint the raster.
    pub fn update<P: TrailPainter>(&mut self, painter: &mut P) {
        painter.clear();
        let max_age = f64::from(self.max_age);
        let speed = 1.0 / max_age;
        self.points.retain_mut(|p| {
            let f = p.force * speed * (1.0 - f64::from(p.age) / max_age);
            p.x += p.vx * f;
            p.y += p.vy * f;
            p.age += 1;
            p.age <= p.max_age
        });
        // Newest first, matching the browser painter's compositing order.
        for point in self.points.iter().rev() {
            painter.splat(&self.splat_for(point));
        }
        self.needs_upload = true;
    }

    /// Whether the raster changed since the last call.
    pub fn take_needs_upload(&mut self) -> bool {
        std::mem::take(&mut self.needs_upload)
    }

    pub fn splat_for(&self, point: &TrailPoint) -> TrailSplat {
        let size = f64::from(self.size);
        let intensity = envelope(point.age, point.max_age) * point.force;
        TrailSplat {
            x: point.x * size,
            y: (1.0 - point.y) * size,
            radius: self.radius,
            rgb: [
                channel((point.vx + 1.0) / 2.0),
                channel((point.vy + 1.0) / 2.0),
                channel(intensity),
            ],
            alpha: (0.2 * intensity).clamp(0.0, 1.0),
        }
    }
}

fn channel(unit: f64) -> f64 {
    (unit * 255.0).clamp(0.0, 255.0)
}

/// Brightness over a point's life: sine ease-in for the first 30%, then an
/// inverted-parabola ease-out.
pub fn envelope(age: u32, max_age: u32) -> f64 {
    let age = f64::from(age);
    let max_age = f64::from(max_age.max(1));
    let ease_in = max_age * EASE_IN_SHARE;
    if age < ease_in {
        ((age / ease_in) * FRAC_PI_2).sin()
    } else {
        let t = 1.0 - (age - ease_in) / (max_age * (1.0 - EASE_IN_SHARE));
        -t * (t - 2.0)
    }
}

/// CPU raster with the same output as the canvas painter, up to blur shape.
///
/// The canvas draws each splat as a blurred shadow with `shadowBlur = radius`
/// (a Gaussian of sigma `radius / 2`). Here the blurred disk edge is
/// approximated with a logistic falloff of the same sigma.
#[derive(Debug, Clone)]
pub struct RasterPainter {
    size: usize,
    pixels: Vec<[f64; 3]>,
}

impl RasterPainter {
    pub fn new(size: u32) -> Self {
        let size = size.max(1) as usize;
        Self {
            size,
            pixels: vec![[0.0; 3]; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Channel values of pixel `(x, y)` in `0..=255`.
    pub fn pixel(&self, x: usize, y: usize) -> [f64; 3] {
        self.pixels[y * self.size + x]
    }

    pub fn is_black(&self) -> bool {
        self.pixels.iter().all(|px| px.iter().all(|&c| c == 0.0))
    }
}

impl TrailPainter for RasterPainter {
    fn clear(&mut self) {
        self.pixels.fill([0.0; 3]);
    }

    fn splat(&mut self, splat: &TrailSplat) {
        if splat.alpha <= 0.0 {
            return;
        }
        let sigma = (splat.radius / 2.0).max(f64::EPSILON);
        let reach = splat.radius + 3.0 * sigma;
        let size = self.size;
        let span = |c: f64| {
            let lo = (c - reach).floor().max(0.0) as usize;
            let hi = ((c + reach).ceil().max(0.0) as usize).min(size);
            lo..hi
        };
        for py in span(splat.y) {
            for px in span(splat.x) {
                let dx = px as f64 + 0.5 - splat.x;
                let dy = py as f64 + 0.5 - splat.y;
                let d = (dx * dx + dy * dy).sqrt();
                let coverage = 1.0 / (1.0 + (1.702 * (d - splat.radius) / sigma).exp());
                let a = splat.alpha * coverage;
                let dst = &mut self.pixels[py * size + px];
                for (c, src) in dst.iter_mut().zip(splat.rgb) {
                    *c = src * a + *c * (1.0 - a);
                }
            }
        }
    }
}
