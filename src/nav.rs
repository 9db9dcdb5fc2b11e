//! Page-to-page navigation by overscrolling.
//!
//! Scrolling past the bottom of the index page leads to the CV; scrolling up
//! past the top of the CV returns to the bottom of the index. A wheel or
//! touch gesture only counts when the document is already pinned against the
//! relevant edge, and only the first qualifying gesture fires.

use log::info;

use crate::config::NavConfig;
use crate::input::InputEvent;

pub const INDEX_BOTTOM_URL: &str = "index.html#bottom";
pub const CV_URL: &str = "cv.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Index,
    Cv,
}

impl PageKind {
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().contains("cv.html") {
            PageKind::Cv
        } else {
            PageKind::Index
        }
    }
}

/// Document scroll readout at the time of the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

#[derive(Debug, Clone)]
pub struct OverscrollNavigator {
    page: PageKind,
    edge_slack: f64,
    threshold: f64,
    touch_start_y: f64,
    transitioning: bool,
}

impl OverscrollNavigator {
    pub fn new(page: PageKind, config: &NavConfig) -> Self {
        Self {
            page,
            edge_slack: config.edge_slack,
            threshold: config.delta_threshold,
            touch_start_y: 0.0,
            transitioning: false,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Feed a wheel or touch event; returns the URL to leave for, once.
    pub fn handle(&mut self, event: &InputEvent, metrics: ScrollMetrics) -> Option<&'static str> {
        match *event {
            InputEvent::Wheel { delta_y } => self.overscroll(delta_y, metrics),
            InputEvent::TouchStart { y } => {
                self.touch_start_y = y;
                None
            }
            // Finger moving up scrolls down.
            InputEvent::TouchMove { y } => self.overscroll(self.touch_start_y - y, metrics),
            _ => None,
        }
    }

    fn overscroll(&mut self, delta_y: f64, m: ScrollMetrics) -> Option<&'static str> {
        if self.transitioning {
            return None;
        }
        let target = match self.page {
            PageKind::Cv if m.scroll_top <= self.edge_slack && delta_y < -self.threshold => {
                INDEX_BOTTOM_URL
            }
            PageKind::Index
                if m.scroll_top + m.client_height >= m.scroll_height - self.edge_slack
                    && delta_y > self.threshold =>
            {
                CV_URL
            }
            _ => return None,
        };
        self.transitioning = true;
        info!("overscroll on {:?}, leaving for {target}", self.page);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT_BOTTOM: ScrollMetrics = ScrollMetrics {
        scroll_top: 2200.0,
        scroll_height: 3000.0,
        client_height: 800.0,
    };
    const AT_TOP: ScrollMetrics = ScrollMetrics {
        scroll_top: 0.0,
        scroll_height: 3000.0,
        client_height: 800.0,
    };

    fn nav(page: PageKind) -> OverscrollNavigator {
        OverscrollNavigator::new(page, &NavConfig::default())
    }

    #[test]
    fn page_kind_from_path() {
        assert_eq!(PageKind::from_path("/site/CV.html"), PageKind::Cv);
        assert_eq!(PageKind::from_path("/"), PageKind::Index);
    }

    #[test]
    fn index_leaves_only_at_bottom_with_strong_delta() {
        let mut n = nav(PageKind::Index);
        assert_eq!(n.handle(&InputEvent::Wheel { delta_y: 40.0 }, AT_TOP), None);
        assert_eq!(n.handle(&InputEvent::Wheel { delta_y: 15.0 }, AT_BOTTOM), None);
        assert_eq!(n.handle(&InputEvent::Wheel { delta_y: 16.0 }, AT_BOTTOM), Some(CV_URL));
        assert!(n.is_transitioning());
        assert_eq!(n.handle(&InputEvent::Wheel { delta_y: 100.0 }, AT_BOTTOM), None);
    }

    #[test]
    fn cv_returns_from_top_on_upward_swipe() {
        let mut n = nav(PageKind::Cv);
        assert_eq!(n.handle(&InputEvent::TouchStart { y: 300.0 }, AT_TOP), None);
        // Finger moves down: content would scroll up.
        assert_eq!(
            n.handle(&InputEvent::TouchMove { y: 330.0 }, AT_TOP),
            Some(INDEX_BOTTOM_URL)
        );
    }

    #[test]
    fn cv_ignores_upward_wheel_away_from_top() {
        let mut n = nav(PageKind::Cv);
        let metrics = ScrollMetrics { scroll_top: 3.0, ..AT_TOP };
        assert_eq!(n.handle(&InputEvent::Wheel { delta_y: -50.0 }, metrics), None);
        assert!(!n.is_transitioning());
    }
}
