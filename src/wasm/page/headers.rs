use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, Window};

use super::{html_elements, inner_height};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::header_stack::{ActiveTracker, HeaderSlot, HeaderStack, RowRect};
use crate::projects::{self, Project};
use crate::wasm::render;

struct HeaderBoard {
    window: Window,
    headers: Vec<HtmlElement>,
    rows: Vec<HtmlElement>,
    label: Option<HtmlElement>,
    projects: Vec<Project>,
    stack: HeaderStack,
    tracker: ActiveTracker,
}

impl HeaderBoard {
    fn update(&mut self) {
        let rects: Vec<RowRect> = self
            .rows
            .iter()
            .map(|row| {
                let r = row.get_bounding_client_rect();
                RowRect::new(r.top(), r.bottom())
            })
            .collect();
        let layout = self.stack.layout(&rects, inner_height(&self.window));

        if let (Some(active), Some(label)) = (self.tracker.update(layout.active_index), &self.label) {
            label.set_inner_text(&projects::label_for(&self.projects, active));
        }
        for (header, slot) in self.headers.iter().zip(&layout.slots) {
            if let Err(err) = apply_slot(header, slot) {
                warn!("header restyle failed: {err:?}");
            }
        }
    }
}

fn apply_slot(header: &HtmlElement, slot: &HeaderSlot) -> std::result::Result<(), JsValue> {
    let style = header.style();
    if !slot.visible {
        style.set_property("visibility", "hidden")?;
        return style.set_property("display", "none");
    }
    style.set_property("visibility", "visible")?;
    style.set_property("display", "block")?;
    style.set_property("z-index", &slot.z_index.to_string())?;
    style.set_property("top", &format!("{}px", slot.top_px))?;
    header.class_list().toggle_with_force("docked", slot.docked)?;
    Ok(())
}

pub fn start(window: &Window, document: &Document, config: &SiteConfig, projects: Vec<Project>) -> Result<()> {
    let headers = html_elements(document, ".project-header")?;
    let rows = html_elements(document, ".project-row")?;
    if headers.is_empty() || rows.is_empty() {
        debug!("no project headers on this page");
        return Ok(());
    }
    let count = headers.len().min(rows.len());
    let label = document
        .get_element_by_id("center-label")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let board = Rc::new(RefCell::new(HeaderBoard {
        window: window.clone(),
        headers: headers[..count].to_vec(),
        rows: rows[..count].to_vec(),
        label,
        projects,
        stack: HeaderStack::new(&config.header),
        tracker: ActiveTracker::default(),
    }));

    {
        let board = board.clone();
        let win = window.clone();
        render::listen::<web_sys::Event, _>(window, "scroll", true, move |_| {
            let board = board.clone();
            let next = Closure::once_into_js(move || board.borrow_mut().update());
            if let Err(err) = win.request_animation_frame(next.unchecked_ref()) {
                warn!("request_animation_frame failed: {err:?}");
            }
        })?;
    }
    {
        let board = board.clone();
        render::listen::<web_sys::Event, _>(window, "resize", true, move |_| {
            board.borrow_mut().update();
        })?;
    }

    for (header, row) in headers.iter().zip(rows).take(count) {
        render::listen::<MouseEvent, _>(header, "click", false, move |_| {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            row.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }

    board.borrow_mut().update();
    Ok(())
}
