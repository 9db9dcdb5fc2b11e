use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::{Document, TouchEvent, WheelEvent, Window};

use super::inner_height;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::input::InputEvent;
use crate::nav::{OverscrollNavigator, PageKind, ScrollMetrics};
use crate::wasm::render;

fn scroll_metrics(window: &Window, document: &Document) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top: window.scroll_y().unwrap_or(0.0),
        scroll_height: document
            .document_element()
            .map_or(0.0, |el| f64::from(el.scroll_height())),
        client_height: inner_height(window),
    }
}

struct Navigation {
    window: Window,
    document: Document,
    navigator: OverscrollNavigator,
    transition_ms: i32,
}

impl Navigation {
    fn gesture(&mut self, event: InputEvent) {
        let metrics = scroll_metrics(&self.window, &self.document);
        let Some(url) = self.navigator.handle(&event, metrics) else {
            return;
        };
        if let Some(body) = self.document.body() {
            if let Err(err) = body.class_list().add_1("transitioning") {
                warn!("page fade-out failed: {err:?}");
            }
        }
        let win = self.window.clone();
        let leave = move || {
            if let Err(err) = win.location().set_href(url) {
                warn!("navigation to {url} failed: {err:?}");
            }
        };
        if let Err(err) = render::after(&self.window, self.transition_ms, leave) {
            warn!("could not schedule navigation: {err}");
        }
    }
}

fn first_touch_y(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|t| f64::from(t.client_y()))
}

pub fn start(window: &Window, document: &Document, config: &SiteConfig) -> Result<()> {
    let path = window.location().pathname()?;
    let nav = Rc::new(RefCell::new(Navigation {
        window: window.clone(),
        document: document.clone(),
        navigator: OverscrollNavigator::new(PageKind::from_path(&path), &config.nav),
        transition_ms: config.nav.transition_ms,
    }));

    {
        let nav = nav.clone();
        render::listen::<WheelEvent, _>(window, "wheel", true, move |e| {
            nav.borrow_mut().gesture(InputEvent::Wheel { delta_y: e.delta_y() });
        })?;
    }
    {
        let nav = nav.clone();
        render::listen::<TouchEvent, _>(window, "touchstart", true, move |e| {
            if let Some(y) = first_touch_y(e) {
                nav.borrow_mut().gesture(InputEvent::TouchStart { y });
            }
        })?;
    }
    render::listen::<TouchEvent, _>(window, "touchmove", true, move |e| {
        if let Some(y) = first_touch_y(e) {
            nav.borrow_mut().gesture(InputEvent::TouchMove { y });
        }
    })
}
