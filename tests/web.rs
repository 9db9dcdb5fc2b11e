#![cfg(target_arch = "wasm32")]

use folio_wasm::input::normalize_in_rect;
use folio_wasm::text_capture::text_lines;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn pointer_normalizes_against_canvas_rect() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas
        .set_attribute("style", "position:fixed;left:10px;top:20px;width:200px;height:100px")
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();

    let rect = canvas.get_bounding_client_rect();
    assert!(rect.width() > 0.0 && rect.height() > 0.0);
    let (x, y) = normalize_in_rect(
        (110.0, 45.0),
        (rect.left(), rect.top()),
        (rect.width(), rect.height()),
    );
    assert!((x - 0.5).abs() < 1e-9 && (y - 0.25).abs() < 1e-9);
    canvas.remove();
}

#[wasm_bindgen_test]
fn capture_reads_lines_from_live_markup() {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("h1").unwrap();
    el.set_inner_html("PORTFOLIO<br/><em>CURRICULUM</em>");
    // The browser serializes <br/> back as <br>.
    assert_eq!(text_lines(&el.inner_html()), vec!["PORTFOLIO", "CURRICULUM"]);
}
