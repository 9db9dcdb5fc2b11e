//! Rolling header stack.
//!
//! Every project row owns a thin header bar. While the page scrolls, up to
//! `stack_size` of those bars are pinned at the top of the viewport, one
//! `header_height` apart; the rest either ride along with their row or are
//! hidden. [`HeaderStack::layout`] turns the current row geometry into one
//! [`HeaderSlot`] per header.
//!
//! The layout is recomputed from scratch on every call. The only state kept
//! between frames lives in [`ActiveTracker`], and it exists only so the page
//! can skip redundant label writes.

use crate::config::HeaderConfig;

/// Viewport-relative vertical extent of a project row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowRect {
    pub top: f64,
    pub bottom: f64,
}

impl RowRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether any part of the row is inside a viewport of height `vh`.
    pub fn intersects_viewport(&self, vh: f64) -> bool {
        self.top < vh && self.bottom > 0.0
    }
}

/// Contiguous range of header indices pinned to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackWindow {
    pub start: usize,
    pub size: usize,
}

impl StackWindow {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.size
    }

    /// Signed slot offset of `index` relative to the window start.
    pub fn slot_of(&self, index: usize) -> f64 {
        index as f64 - self.start as f64
    }
}

/// Styling decision for one header bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderSlot {
    /// Hidden headers must be taken out of layout, not just made transparent.
    pub visible: bool,
    pub stacked: bool,
    /// Rendered `top`, CSS pixels from the viewport top.
    pub top_px: f64,
    /// Where the header would rest inside the stack.
    pub nominal_px: f64,
    pub z_index: i32,
    /// The header has reached its resting slot and switches to the solid style.
    pub docked: bool,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    pub window: StackWindow,
    /// Highest row whose top crossed the middle of the viewport.
    pub active_index: usize,
    pub slots: Vec<HeaderSlot>,
}

#[derive(Debug, Clone)]
pub struct HeaderStack {
    header_height: f64,
    stack_size: usize,
    dock_tolerance: f64,
    z_index_base: i32,
}

impl HeaderStack {
    pub fn new(config: &HeaderConfig) -> Self {
        Self {
            header_height: config.header_height,
            stack_size: config.stack_size.max(1),
            dock_tolerance: config.dock_tolerance,
            z_index_base: config.z_index_base,
        }
    }

    /// Bottom edge of a fully populated stack.
    pub fn stack_bottom(&self) -> f64 {
        self.stack_size as f64 * self.header_height
    }

    /// Start of the pinned window for the given geometry.
    ///
    /// The highest row at or past the stack bottom wins. The first
    /// `stack_size` rows never shift the window.
    pub fn window_for(&self, rows: &[RowRect]) -> StackWindow {
        let threshold = self.stack_bottom();
        let start = rows
            .iter()
            .enumerate()
            .skip(self.stack_size)
            .filter(|(_, row)| row.top <= threshold)
            .map(|(i, _)| i + 1 - self.stack_size)
            .last()
            .unwrap_or(0);
        StackWindow {
            start,
            size: self.stack_size,
        }
    }

    pub fn layout(&self, rows: &[RowRect], vh: f64) -> StackLayout {
        let window = self.window_for(rows);
        let slots = rows
            .iter()
            .enumerate()
            .map(|(j, row)| self.slot(j, row, window, vh))
            .collect();
        StackLayout {
            window,
            active_index: active_index(rows, vh),
            slots,
        }
    }

    fn slot(&self, j: usize, row: &RowRect, window: StackWindow, vh: f64) -> HeaderSlot {
        let stacked = window.contains(j);
        let visible = stacked || row.intersects_viewport(vh);
        let nominal_px = window.slot_of(j) * self.header_height;
        let top_px = nominal_px.max(row.top);
        HeaderSlot {
            visible,
            stacked,
            top_px,
            nominal_px,
            z_index: self.z_index_base + j as i32,
            docked: top_px <= nominal_px + self.dock_tolerance,
        }
    }
}

/// Highest index whose row top is at or above half the viewport; 0 if none.
pub fn active_index(rows: &[RowRect], vh: f64) -> usize {
    let half = vh / 2.0;
    rows.iter().rposition(|row| row.top <= half).unwrap_or(0)
}

/// Remembers the last reported active row so the page only restyles on change.
#[derive(Debug, Clone, Default)]
pub struct ActiveTracker {
    last: Option<usize>,
}

impl ActiveTracker {
    /// Returns the new index when it differs from the previous call.
    pub fn update(&mut self, index: usize) -> Option<usize> {
        if self.last == Some(index) {
            return None;
        }
        self.last = Some(index);
        Some(index)
    }

    pub fn last(&self) -> Option<usize> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> HeaderStack {
        HeaderStack::new(&HeaderConfig::default())
    }

    /// Rows of equal height laid out from `first_top` downward.
    fn rows(n: usize, first_top: f64, height: f64) -> Vec<RowRect> {
        (0..n)
            .map(|i| {
                let top = first_top + i as f64 * height;
                RowRect::new(top, top + height)
            })
            .collect()
    }

    #[test]
    fn first_rows_never_shift_the_window() {
        // Everything far above the stack, but only four rows exist.
        let layout = stack().layout(&rows(4, -5000.0, 100.0), 800.0);
        assert_eq!(layout.window.start, 0);
        for (j, slot) in layout.slots.iter().enumerate() {
            assert_eq!(slot.nominal_px, j as f64 * 21.0);
            assert!(slot.stacked);
        }
    }

    #[test]
    fn scan_keeps_going_past_the_first_match() {
        let mut geometry = rows(8, 0.0, 1000.0);
        geometry[4].top = 10.0;
        geometry[5].top = 2000.0;
        geometry[6].top = 50.0;
        let window = stack().window_for(&geometry);
        assert_eq!(window.start, 3);
    }

    #[test]
    fn header_rides_with_row_until_it_hits_its_slot() {
        let geometry = rows(7, 300.0, 200.0);
        let layout = stack().layout(&geometry, 800.0);
        let slot = layout.slots[1];
        assert_eq!(slot.top_px, 500.0);
        assert!(!slot.docked);

        let geometry = rows(7, -400.0, 200.0);
        let layout = stack().layout(&geometry, 800.0);
        assert_eq!(layout.slots[1].top_px, 21.0);
        assert!(layout.slots[1].docked);
    }

    #[test]
    fn dock_tolerance_is_inclusive() {
        let mut geometry = rows(2, -1000.0, 10.0);
        geometry[1] = RowRect::new(26.0, 300.0);
        let layout = stack().layout(&geometry, 800.0);
        assert!(layout.slots[1].docked);

        geometry[1] = RowRect::new(26.5, 300.0);
        let layout = stack().layout(&geometry, 800.0);
        assert!(!layout.slots[1].docked);
    }

    #[test]
    fn headers_outside_stack_and_viewport_are_hidden() {
        let geometry = rows(7, 0.0, 1000.0);
        let layout = stack().layout(&geometry, 800.0);
        // Row 5 starts at 5000px, well below the fold.
        assert!(!layout.slots[5].visible);
        assert!(layout.slots[0].visible);
    }

    #[test]
    fn z_index_follows_row_order() {
        let layout = stack().layout(&rows(3, 0.0, 100.0), 800.0);
        let z: Vec<i32> = layout.slots.iter().map(|s| s.z_index).collect();
        assert_eq!(z, vec![1000, 1001, 1002]);
    }

    #[test]
    fn active_index_defaults_to_zero() {
        assert_eq!(active_index(&rows(3, 900.0, 100.0), 800.0), 0);
        assert_eq!(active_index(&rows(3, 0.0, 300.0), 800.0), 1);
        assert_eq!(active_index(&[], 800.0), 0);
    }

    #[test]
    fn tracker_reports_only_changes() {
        let mut tracker = ActiveTracker::default();
        assert_eq!(tracker.update(0), Some(0));
        assert_eq!(tracker.update(0), None);
        assert_eq!(tracker.update(2), Some(2));
        assert_eq!(tracker.last(), Some(2));
    }
}
