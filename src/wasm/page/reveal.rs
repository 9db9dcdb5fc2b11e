use log::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::html_elements;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::reveal::{ImageReveal, RevealStyle};

fn image_of(row: &Element) -> Option<HtmlElement> {
    row.query_selector("img")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into().ok())
}

fn apply(image: &HtmlElement, style: RevealStyle) -> std::result::Result<(), JsValue> {
    let css = image.style();
    css.set_property("opacity", &style.css_opacity())?;
    css.set_property("transform", &style.css_transform())
}

pub fn start(document: &Document, config: &SiteConfig) -> Result<()> {
    let rows = html_elements(document, ".project-row")?;
    if rows.is_empty() {
        debug!("no project images to reveal");
        return Ok(());
    }
    let reveal = ImageReveal::new(&config.reveal);

    let transition = reveal.transition();
    for image in rows.iter().filter_map(|row| image_of(row)) {
        apply(&image, reveal.hidden())?;
        image.style().set_property("transition", &transition)?;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if let Some(image) = image_of(&entry.target()) {
                if let Err(err) = apply(&image, reveal.style_for(entry.is_intersecting())) {
                    warn!("image reveal failed: {err:?}");
                }
            }
        }
    });
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.threshold()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for row in &rows {
        observer.observe(row);
    }
    callback.forget();
    Ok(())
}
