//! Fade-in of project images as their rows enter the viewport.
//!
//! Images start hidden (transparent, slightly zoomed) and ease to full
//! opacity at natural scale while their row intersects the viewport. Leaving
//! the viewport hides them again so the reveal replays on the way back.

use crate::config::RevealConfig;

const EASING: &str = "cubic-bezier(0.165, 0.84, 0.44, 1)";

/// Inline style for one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub scale: f64,
}

impl RevealStyle {
    pub fn css_opacity(&self) -> String {
        self.opacity.to_string()
    }

    pub fn css_transform(&self) -> String {
        format!("scale({})", self.scale)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageReveal {
    threshold: f64,
    hidden_scale: f64,
    duration_ms: u32,
}

impl ImageReveal {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold.clamp(0.0, 1.0),
            hidden_scale: config.hidden_scale,
            duration_ms: config.duration_ms,
        }
    }

    /// Intersection ratio at which the observer reports a change.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// CSS `transition` shorthand applied once to every image.
    pub fn transition(&self) -> String {
        format!("all {}s {EASING}", f64::from(self.duration_ms) / 1000.0)
    }

    pub fn hidden(&self) -> RevealStyle {
        RevealStyle {
            opacity: 0.0,
            scale: self.hidden_scale,
        }
    }

    pub fn shown(&self) -> RevealStyle {
        RevealStyle {
            opacity: 1.0,
            scale: 1.0,
        }
    }

    pub fn style_for(&self, intersecting: bool) -> RevealStyle {
        if intersecting {
            self.shown()
        } else {
            self.hidden()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal() -> ImageReveal {
        ImageReveal::new(&RevealConfig::default())
    }

    #[test]
    fn hidden_images_are_transparent_and_zoomed() {
        let style = reveal().hidden();
        assert_eq!(style.css_opacity(), "0");
        assert_eq!(style.css_transform(), "scale(1.05)");
    }

    #[test]
    fn intersecting_rows_show_their_image() {
        let r = reveal();
        assert_eq!(r.style_for(true), r.shown());
        assert_eq!(r.shown().css_opacity(), "1");
        assert_eq!(r.shown().css_transform(), "scale(1)");
        assert_eq!(r.style_for(false), r.hidden());
    }

    #[test]
    fn transition_uses_configured_duration() {
        assert_eq!(
            reveal().transition(),
            "all 1.2s cubic-bezier(0.165, 0.84, 0.44, 1)"
        );
        let slow = ImageReveal::new(&RevealConfig {
            duration_ms: 2000,
            ..RevealConfig::default()
        });
        assert_eq!(slow.transition(), "all 2s cubic-bezier(0.165, 0.84, 0.44, 1)");
    }

    #[test]
    fn threshold_is_clamped_to_a_ratio() {
        assert_eq!(reveal().threshold(), 0.1);
        let wild = ImageReveal::new(&RevealConfig {
            threshold: 3.0,
            ..RevealConfig::default()
        });
        assert_eq!(wild.threshold(), 1.0);
    }
}
