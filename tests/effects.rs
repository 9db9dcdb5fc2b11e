#![cfg(target_arch = "wasm32")]

use folio_wasm::config::SiteConfig;
use folio_wasm::error::EffectError;
use folio_wasm::wasm::{fluid, gradient, page};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn fluid_without_canvas_reports_missing_element() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    assert!(document.get_element_by_id("fluid-canvas").is_none());

    let err = fluid::start(&window, &document, &SiteConfig::default()).unwrap_err();
    assert!(
        matches!(err, EffectError::MissingElement("#fluid-canvas")),
        "unexpected error: {err}"
    );
}

#[wasm_bindgen_test]
fn gradient_stays_off_outside_the_cv_page() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    body.class_list().remove_1("cv-page").unwrap();

    gradient::start(&window, &document, &SiteConfig::default()).unwrap();
    assert!(document.get_element_by_id("liquid-bg-canvas").is_none());
}

#[wasm_bindgen_test]
fn page_start_builds_listing_and_hides_images() {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    let headers = document.create_element("nav").unwrap();
    headers.set_id("headers");
    let portfolio = document.create_element("main").unwrap();
    portfolio.set_id("portfolio");
    body.append_child(&headers).unwrap();
    body.append_child(&portfolio).unwrap();

    page::start(&window, &document, &SiteConfig::default());

    let rows = document.query_selector_all(".project-row").unwrap();
    assert_eq!(rows.length(), 7);
    assert_eq!(document.query_selector_all(".project-header").unwrap().length(), 7);
    let first = document.query_selector(".project-header").unwrap().unwrap();
    assert_eq!(first.inner_html(), "UNOTRANS <span>#01</span>");
    assert!(document.get_element_by_id("project-7").is_some());

    let image: web_sys::HtmlElement = document
        .query_selector("#project-1 img")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(image.style().get_property_value("opacity").unwrap(), "0");
    assert_eq!(image.style().get_property_value("transform").unwrap(), "scale(1.05)");

    headers.remove();
    portfolio.remove();
}
