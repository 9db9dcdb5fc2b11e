//! Host-independent input events.
//!
//! The browser glue translates DOM events into [`InputEvent`]s and hands them
//! to each component's `handle` method. Tests drive the same methods with
//! synthetic sequences.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position normalized to the receiving surface, origin top-left.
    PointerMove { x: f64, y: f64 },
    /// Finger down, viewport Y in CSS pixels.
    TouchStart { y: f64 },
    TouchMove { y: f64 },
    /// Wheel delta, positive when scrolling down.
    Wheel { delta_y: f64 },
    /// Surface size in device pixels.
    Resize { width: f64, height: f64 },
}

/// Map a client-space point into `[0, 1]` coordinates of a rectangle.
///
/// A zero-sized rectangle is treated as one pixel wide/high so the result
/// stays finite.
pub fn normalize_in_rect(client: (f64, f64), origin: (f64, f64), size: (f64, f64)) -> (f64, f64) {
    let w = if size.0 == 0.0 { 1.0 } else { size.0 };
    let h = if size.1 == 0.0 { 1.0 } else { size.1 };
    ((client.0 - origin.0) / w, (client.1 - origin.1) / h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_into_unit_square() {
        assert_eq!(
            normalize_in_rect((150.0, 300.0), (50.0, 100.0), (200.0, 400.0)),
            (0.5, 0.5)
        );
    }

    #[test]
    fn empty_rect_does_not_divide_by_zero() {
        let (x, y) = normalize_in_rect((3.0, 4.0), (0.0, 0.0), (0.0, 0.0));
        assert_eq!((x, y), (3.0, 4.0));
    }
}
