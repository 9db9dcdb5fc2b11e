//! Shared lifecycle of the canvas effects.

use log::debug;

/// `Uninitialized → Initialized → Rendering`. There is no way back; an effect
/// runs until the page unloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Initialized,
    Rendering,
}

impl Lifecycle {
    /// Move forward to `next`; a backward request leaves the state untouched.
    pub fn advance(&mut self, next: Lifecycle, effect: &str) {
        if next > *self {
            debug!("{effect}: {self:?} -> {next:?}");
            *self = next;
        }
    }
}

/// Something driven once per animation frame.
pub trait FrameEffect {
    /// Advance by `dt` seconds. Effects that are not initialized ignore ticks.
    fn tick(&mut self, dt: f64);

    fn lifecycle(&self) -> Lifecycle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_moves_backwards() {
        let mut state = Lifecycle::default();
        state.advance(Lifecycle::Rendering, "test");
        state.advance(Lifecycle::Initialized, "test");
        assert_eq!(state, Lifecycle::Rendering);
    }
}
