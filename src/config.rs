//! Tuning constants for the whole site.
//!
//! Every section has a [`Default`] matching the shipped look. A page may ship a
//! `<script type="application/json" id="folio-config">` block to override any
//! subset of fields; missing fields keep their defaults.

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub header: HeaderConfig,
    pub pointer: PointerConfig,
    pub trail: TrailConfig,
    pub fluid: FluidConfig,
    pub gradient: GradientConfig,
    pub nav: NavConfig,
    pub intro: IntroConfig,
    pub reveal: RevealConfig,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: LogLevel,
}

impl SiteConfig {
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Rolling header geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Height of one header bar in CSS pixels.
    pub header_height: f64,
    /// Number of headers pinned at the top at once.
    pub stack_size: usize,
    /// Distance from the slot (px) under which a header counts as docked.
    pub dock_tolerance: f64,
    pub z_index_base: i32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            header_height: 21.0,
            stack_size: 4,
            dock_tolerance: 5.0,
            z_index_base: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Fraction of the remaining distance covered per frame.
    pub damping: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { damping: 0.08 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Raster edge length in pixels (square).
    pub size: u32,
    /// Ticks a point survives after creation.
    pub max_age: u32,
    /// Splat radius as a fraction of `size`.
    pub radius_fraction: f64,
    /// Squared displacement is multiplied by this to get force.
    pub force_scale: f64,
    pub max_force: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            size: 64,
            max_age: 64,
            radius_fraction: 0.25,
            force_scale: 20_000.0,
            max_force: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    /// Padding rasterized around the captured text, CSS pixels per side.
    pub bleed: f64,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self { bleed: 400.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    pub speed: f32,
    pub intensity: f32,
    pub grain_intensity: f32,
    pub gradient_size: f32,
    pub color1_weight: f32,
    pub color2_weight: f32,
    /// UV displacement per unit of trail intensity.
    pub touch_strength: f32,
    pub colors: [[f32; 3]; 4],
    pub dark_base: [f32; 3],
    /// Upper bound applied to `devicePixelRatio`.
    pub max_pixel_ratio: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            speed: 0.8,
            intensity: 1.5,
            grain_intensity: 0.05,
            gradient_size: 0.6,
            color1_weight: 0.7,
            color2_weight: 1.2,
            touch_strength: 0.15,
            colors: [
                [0.62, 0.13, 0.03], // deep red
                [0.01, 0.01, 0.02], // near black
                [0.72, 0.16, 0.03],
                [0.05, 0.02, 0.01], // dark warm
            ],
            dark_base: [0.0, 0.0, 0.0],
            max_pixel_ratio: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// How close (px) to the document edge counts as "at the edge".
    pub edge_slack: f64,
    /// Minimum wheel/touch delta that triggers a page change.
    pub delta_threshold: f64,
    /// Delay between starting the fade-out and leaving the page.
    pub transition_ms: i32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            edge_slack: 2.0,
            delta_threshold: 15.0,
            transition_ms: 800,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub fade_in_ms: i32,
    pub slide_up_ms: i32,
    pub bottom_jump_ms: i32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            fade_in_ms: 100,
            slide_up_ms: 1800,
            bottom_jump_ms: 50,
        }
    }
}

/// Project image fade-in.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Row visibility ratio that triggers the observer.
    pub threshold: f64,
    pub hidden_scale: f64,
    pub duration_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            hidden_scale: 1.05,
            duration_ms: 1200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg.header.header_height, 21.0);
        assert_eq!(cfg.header.stack_size, 4);
        assert_eq!(cfg.trail.max_age, 64);
        assert_eq!(cfg.reveal.threshold, 0.1);
        assert_eq!(cfg.log_level, LogLevel::Info);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{"header": {"stack_size": 3}, "pointer": {"damping": 0.2}, "log_level": "debug"}"#,
        )
        .unwrap();
        assert_eq!(cfg.header.stack_size, 3);
        assert_eq!(cfg.header.dock_tolerance, 5.0);
        assert_eq!(cfg.pointer.damping, 0.2);
        assert_eq!(log::Level::from(cfg.log_level), log::Level::Debug);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(SiteConfig::from_json("{header:").is_err());
    }
}
