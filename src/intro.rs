//! Entry choreography for both pages.
//!
//! Pages start with `body.transitioning` (fully faded). The plan lists timed
//! DOM steps; the browser glue schedules each one with `setTimeout`.

use crate::config::IntroConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroStep {
    /// Take the intro overlay out of layout.
    HideIntro,
    /// Start the overlay's slide-up animation.
    SlideUpIntro,
    /// Drop `body.intro-active` so the page can scroll.
    ReleaseScroll,
    ScrollToBottom,
    /// Drop `body.transitioning`, fading the page in.
    FadeIn,
}

/// `(delay_ms, step)` pairs; delays are measured from page load.
pub type IntroPlan = Vec<(i32, IntroStep)>;

/// Build the plan for a page. `has_intro` is false on pages without the
/// splash overlay; `hash` is `location.hash`.
pub fn plan(has_intro: bool, hash: &str, config: &IntroConfig) -> IntroPlan {
    if !has_intro {
        return vec![(config.fade_in_ms, IntroStep::FadeIn)];
    }
    if hash == "#bottom" {
        // Returning from the CV: land on the last project while still hidden.
        let jump = config.bottom_jump_ms;
        return vec![
            (0, IntroStep::HideIntro),
            (0, IntroStep::ReleaseScroll),
            (jump, IntroStep::ScrollToBottom),
            (jump + config.fade_in_ms, IntroStep::FadeIn),
        ];
    }
    vec![
        (config.fade_in_ms, IntroStep::FadeIn),
        (config.slide_up_ms, IntroStep::SlideUpIntro),
        (config.slide_up_ms, IntroStep::ReleaseScroll),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_visit_fades_then_slides() {
        let steps = plan(true, "", &IntroConfig::default());
        assert_eq!(
            steps,
            vec![
                (100, IntroStep::FadeIn),
                (1800, IntroStep::SlideUpIntro),
                (1800, IntroStep::ReleaseScroll),
            ]
        );
    }

    #[test]
    fn returning_visit_jumps_to_bottom_before_fading_in() {
        let steps = plan(true, "#bottom", &IntroConfig::default());
        assert_eq!(steps[0], (0, IntroStep::HideIntro));
        assert_eq!(steps[2], (50, IntroStep::ScrollToBottom));
        assert_eq!(steps[3], (150, IntroStep::FadeIn));
    }

    #[test]
    fn page_without_intro_only_fades() {
        assert_eq!(plan(false, "#bottom", &IntroConfig::default()), vec![(100, IntroStep::FadeIn)]);
    }
}
