use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::error::{EffectError, Result};
use crate::intro::{self, IntroStep};
use crate::wasm::render;

fn apply_step(step: IntroStep, window: &Window, document: &Document, intro: Option<&HtmlElement>) -> Result<()> {
    let body = document.body().ok_or(EffectError::MissingElement("body"))?;
    match step {
        IntroStep::HideIntro => {
            if let Some(intro) = intro {
                intro.style().set_property("display", "none")?;
            }
        }
        IntroStep::SlideUpIntro => {
            if let Some(intro) = intro {
                intro.class_list().add_1("slide-up")?;
            }
        }
        IntroStep::ReleaseScroll => body.class_list().remove_1("intro-active")?,
        IntroStep::ScrollToBottom => {
            let height = document
                .document_element()
                .map_or(0, |el| el.scroll_height());
            window.scroll_to_with_x_and_y(0.0, f64::from(height));
        }
        IntroStep::FadeIn => body.class_list().remove_1("transitioning")?,
    }
    Ok(())
}

pub fn start(window: &Window, document: &Document, config: &SiteConfig) -> Result<()> {
    let intro = document
        .get_element_by_id("intro")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let hash = window.location().hash().unwrap_or_default();
    for (delay, step) in intro::plan(intro.is_some(), &hash, &config.intro) {
        let win = window.clone();
        let doc = document.clone();
        let intro = intro.clone();
        let run = move || {
            if let Err(err) = apply_step(step, &win, &doc, intro.as_ref()) {
                warn!("intro step {step:?} failed: {err}");
            }
        };
        if delay <= 0 {
            run();
        } else {
            render::after(window, delay, run)?;
        }
    }
    Ok(())
}
