#![cfg(not(target_arch = "wasm32"))]

use folio_wasm::config::HeaderConfig;
use folio_wasm::header_stack::{HeaderStack, RowRect};
use proptest::prelude::*;

const VH: f64 = 800.0;

fn stack() -> HeaderStack {
    HeaderStack::new(&HeaderConfig::default())
}

/// Row rectangles for a page scrolled down by `scroll` pixels.
fn page(heights: &[f64], scroll: f64) -> Vec<RowRect> {
    let mut top = -scroll;
    heights
        .iter()
        .map(|h| {
            let rect = RowRect::new(top, top + h);
            top += h;
            rect
        })
        .collect()
}

#[test]
fn seven_rows_roll_to_the_last_four() {
    let heights = [900.0; 7];
    // Row 6 starts 5400px down; it touches the 84px stack bottom at 5316.
    let layout = stack().layout(&page(&heights, 5316.0), VH);
    assert_eq!(layout.window.start, 3);
    for j in 3..7 {
        assert!(layout.slots[j].stacked, "header {j} should be stacked");
        assert!(layout.slots[j].visible);
    }
    for j in 0..3 {
        assert!(!layout.slots[j].visible, "header {j} should be hidden");
    }
    assert_eq!(layout.slots[6].top_px, 84.0);
    assert!(!layout.slots[6].docked);
    assert_eq!(layout.slots[3].top_px, 0.0);
    assert!(layout.slots[3].docked);
}

#[test]
fn one_pixel_short_keeps_previous_window() {
    let heights = [900.0; 7];
    let layout = stack().layout(&page(&heights, 5315.0), VH);
    assert_eq!(layout.window.start, 2);
}

#[test]
fn fewer_rows_than_stack_never_shift() {
    let heights = [400.0; 3];
    for scroll in [0.0, 500.0, 1200.0, 5000.0] {
        assert_eq!(stack().layout(&page(&heights, scroll), VH).window.start, 0);
    }
}

#[test]
fn jump_back_to_top_resets_window() {
    let heights = [900.0; 7];
    let s = stack();
    assert_eq!(s.layout(&page(&heights, 6000.0), VH).window.start, 3);
    assert_eq!(s.layout(&page(&heights, 0.0), VH).window.start, 0);
}

fn heights_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(50.0f64..1500.0, 0..12)
}

proptest! {
    #[test]
    fn window_start_is_monotonic_in_scroll(
        heights in heights_strategy(),
        a in 0.0f64..20_000.0,
        b in 0.0f64..20_000.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let s = stack();
        prop_assert!(s.window_for(&page(&heights, lo)).start <= s.window_for(&page(&heights, hi)).start);
    }

    #[test]
    fn layout_is_a_pure_function_of_geometry(
        heights in heights_strategy(),
        scroll in 0.0f64..20_000.0,
        vh in 300.0f64..1200.0,
    ) {
        let s = stack();
        let rows = page(&heights, scroll);
        prop_assert_eq!(s.layout(&rows, vh), s.layout(&rows, vh));
    }

    #[test]
    fn slots_follow_the_rolling_dock_rules(
        heights in heights_strategy(),
        scroll in 0.0f64..20_000.0,
        vh in 300.0f64..1200.0,
    ) {
        let s = stack();
        let rows = page(&heights, scroll);
        let layout = s.layout(&rows, vh);
        let start = layout.window.start;
        if start > 0 {
            // The row that opened this window has reached the stack bottom.
            prop_assert!(rows[start + 3].top <= s.stack_bottom());
        }
        for (j, (slot, row)) in layout.slots.iter().zip(&rows).enumerate() {
            let nominal = (j as f64 - start as f64) * 21.0;
            prop_assert_eq!(slot.nominal_px, nominal);
            prop_assert_eq!(slot.top_px, nominal.max(row.top));
            prop_assert_eq!(slot.docked, slot.top_px <= nominal + 5.0);
            let in_stack = j >= start && j < start + 4;
            prop_assert_eq!(slot.visible, in_stack || (row.top < vh && row.bottom > 0.0));
        }
        // Within the pinned window, tops never decrease.
        let pinned: Vec<f64> = layout.slots.iter().filter(|s| s.stacked).map(|s| s.top_px).collect();
        prop_assert!(pinned.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn first_four_rows_alone_never_open_a_window(
        heights in prop::collection::vec(50.0f64..1500.0, 1..=4),
        scroll in 0.0f64..50_000.0,
    ) {
        let layout = stack().layout(&page(&heights, scroll), VH);
        prop_assert_eq!(layout.window.start, 0);
        for (j, slot) in layout.slots.iter().enumerate() {
            prop_assert_eq!(slot.nominal_px, j as f64 * 21.0);
        }
    }
}
