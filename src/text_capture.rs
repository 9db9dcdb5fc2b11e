//! Geometry for rasterizing the hero name into a texture.
//!
//! The captured bitmap covers the hero container plus `bleed` CSS pixels on
//! every side, so the fluid shader can push glyphs outward without clipping.
//! Text is drawn at its on-page offset inside the container, shifted by the
//! bleed.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Where and how large the offscreen capture canvas is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureLayout {
    /// Canvas size in CSS pixels, bleed included.
    pub width: f64,
    pub height: f64,
    /// Backing store size in device pixels.
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_ratio: f64,
    /// Bleed as a fraction of the canvas size, fed to the shader as UV padding.
    pub padding: (f64, f64),
    /// Top-left of the first text line in canvas CSS pixels.
    pub origin: (f64, f64),
    pub line_height: f64,
}

impl CaptureLayout {
    pub fn plan(container: Rect, text: Rect, bleed: f64, pixel_ratio: f64, line_height: f64) -> Self {
        let bleed = bleed.max(0.0);
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        let width = container.width.max(0.0) + bleed * 2.0;
        let height = container.height.max(0.0) + bleed * 2.0;
        let padding = if width > 0.0 && height > 0.0 {
            (bleed / width, bleed / height)
        } else {
            (0.0, 0.0)
        };
        Self {
            width,
            height,
            pixel_width: (width * pixel_ratio) as u32,
            pixel_height: (height * pixel_ratio) as u32,
            pixel_ratio,
            padding,
            origin: (
                text.left - container.left + bleed,
                text.top - container.top + bleed,
            ),
            line_height,
        }
    }

    /// Baseline-top position of each of `count` lines.
    pub fn line_origins(&self, count: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..count).map(move |i| (self.origin.0, self.origin.1 + i as f64 * self.line_height))
    }
}

/// Split element markup into display lines: break on `<br>`, drop any other
/// tags, trim whitespace.
pub fn text_lines(inner_html: &str) -> Vec<String> {
    inner_html
        .split("<br>")
        .map(|line| strip_tags(line).trim().to_string())
        .collect()
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Leading numeric value of a CSS length such as `"48px"`; `None` for
/// keywords like `"normal"`.
pub fn parse_css_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse().ok()
}

/// Line height from computed style, falling back to `1.1 × font-size`.
pub fn resolve_line_height(line_height: &str, font_size: &str) -> f64 {
    parse_css_px(line_height)
        .filter(|v| *v > 0.0)
        .or_else(|| parse_css_px(font_size).map(|fs| fs * 1.1))
        .unwrap_or(0.0)
}

/// Canvas `font` shorthand from computed style parts.
pub fn font_shorthand(weight: &str, size: &str, family: &str) -> String {
    format!("{weight} {size} {family}")
}
