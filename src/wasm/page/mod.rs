//! DOM wiring for the index and CV pages.
//!
//! Each part starts independently; a failure is logged and the rest of the
//! page keeps working.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::error::{EffectError, Result};
use crate::projects::{self, Project};

mod headers;
mod intro;
mod listing;
mod nav;
mod reveal;

const CONFIG_ID: &str = "folio-config";

/// Site configuration from the page, or defaults. A parse failure is returned
/// alongside the defaults so it can be logged once logging is up.
pub fn load_config(document: &Document) -> (SiteConfig, Option<EffectError>) {
    let Some(src) = document
        .get_element_by_id(CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return (SiteConfig::default(), None);
    };
    match SiteConfig::from_json(&src) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    }
}

fn html_elements(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn report(part: &str, result: Result<()>) {
    if let Err(err) = result {
        warn!("{part} disabled: {err}");
    }
}

pub fn start(window: &Window, document: &Document, config: &SiteConfig) {
    let projects: Vec<Project> = projects::bundled().unwrap_or_else(|err| {
        warn!("project list unreadable: {err}");
        Vec::new()
    });

    report("intro", intro::start(window, document, config));
    report("project listing", listing::render(document, &projects));
    report("rolling headers", headers::start(window, document, config, projects));
    report("image reveal", reveal::start(document, config));
    report("overscroll navigation", nav::start(window, document, config));
}
