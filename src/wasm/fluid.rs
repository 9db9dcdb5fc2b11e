//! Liquid distortion over the CV name.
//!
//! The name element is rasterized into an oversized offscreen canvas, uploaded
//! as a texture and drawn through the fluid shader onto `#fluid-canvas`. Once a
//! capture succeeds the live element is hidden.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use log::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, DomRect, HtmlCanvasElement, HtmlElement, MouseEvent,
    WebGl2RenderingContext as GL, WebGlTexture, WebGlUniformLocation, Window,
};

use super::render::{self, QuadProgram};
use crate::config::SiteConfig;
use crate::effect::FrameEffect;
use crate::error::{EffectError, Result};
use crate::fluid::TextFluid;
use crate::input::{normalize_in_rect, InputEvent};
use crate::shaders::{FLUID_FRAGMENT, FLUID_VERTEX};
use crate::text_capture::{font_shorthand, resolve_line_height, text_lines, CaptureLayout, Rect};

const CANVAS_ID: &str = "fluid-canvas";
/// Fallback delay when the font loading API is missing.
const CAPTURE_FALLBACK_MS: i32 = 500;

struct Locations {
    text: Option<WebGlUniformLocation>,
    mouse: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
    padding: Option<WebGlUniformLocation>,
}

struct FluidRenderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: QuadProgram,
    locations: Locations,
    texture: Option<WebGlTexture>,
    state: TextFluid,
    bleed: f64,
}

impl FluidRenderer {
    fn resize(&mut self) {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
        self.state.handle(&InputEvent::Resize {
            width: f64::from(width),
            height: f64::from(height),
        });
    }

    fn pointer(&mut self, event: &MouseEvent) {
        let rect = self.canvas.get_bounding_client_rect();
        let (x, y) = normalize_in_rect(
            (f64::from(event.client_x()), f64::from(event.client_y())),
            (rect.left(), rect.top()),
            (rect.width(), rect.height()),
        );
        self.state.handle(&InputEvent::PointerMove { x, y });
    }

    fn capture(&mut self, window: &Window, document: &Document) -> Result<()> {
        let name = query::<HtmlElement>(document, ".cv-name")?;
        let hero = query::<HtmlElement>(document, ".cv-hero")?;
        let style = window
            .get_computed_style(&name)?
            .ok_or(EffectError::MissingElement("computed style"))?;
        let font_size = style.get_property_value("font-size")?;
        let layout = CaptureLayout::plan(
            rect(&hero.get_bounding_client_rect()),
            rect(&name.get_bounding_client_rect()),
            self.bleed,
            window.device_pixel_ratio(),
            resolve_line_height(&style.get_property_value("line-height")?, &font_size),
        );

        let offscreen: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| EffectError::ResourceAllocation("capture canvas"))?;
        offscreen.set_width(layout.pixel_width);
        offscreen.set_height(layout.pixel_height);
        let ctx: CanvasRenderingContext2d = offscreen
            .get_context("2d")?
            .ok_or(EffectError::ContextUnavailable("2d"))?
            .dyn_into()
            .map_err(|_| EffectError::ContextUnavailable("2d"))?;
        ctx.scale(layout.pixel_ratio, layout.pixel_ratio)?;
        ctx.set_fill_style_str("black");
        ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

        ctx.set_font(&font_shorthand(
            &style.get_property_value("font-weight")?,
            &font_size,
            &style.get_property_value("font-family")?,
        ));
        ctx.set_fill_style_str("white");
        ctx.set_text_baseline("top");
        // Not every web-sys release exposes the setter.
        Reflect::set(
            &ctx,
            &"letterSpacing".into(),
            &JsValue::from_str(&style.get_property_value("letter-spacing")?),
        )?;
        let lines = text_lines(&name.inner_html());
        for (line, (x, y)) in lines.iter().zip(layout.line_origins(lines.len())) {
            ctx.fill_text(line, x, y)?;
        }

        if let Some(old) = self.texture.take() {
            self.gl.delete_texture(Some(&old));
        }
        let texture = render::linear_texture(&self.gl)?;
        render::upload_canvas(&self.gl, &texture, &offscreen, false)?;
        self.texture = Some(texture);

        name.style().set_property("opacity", "0")?;
        self.state.set_capture(&layout);
        debug!(
            "captured {} line(s) into {}x{} texture",
            lines.len(),
            layout.pixel_width,
            layout.pixel_height
        );
        Ok(())
    }

    fn frame(&mut self, dt: f64) {
        self.state.tick(dt);
        let u = self.state.uniforms();
        let gl = &self.gl;
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.uniform2f(self.locations.mouse.as_ref(), u.mouse[0], u.mouse[1]);
        gl.uniform1f(self.locations.time.as_ref(), u.time);
        gl.uniform2f(self.locations.resolution.as_ref(), u.resolution[0], u.resolution[1]);
        gl.uniform2f(self.locations.padding.as_ref(), u.padding[0], u.padding[1]);
        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, self.texture.as_ref());
        gl.uniform1i(self.locations.text.as_ref(), 0);
        self.program.draw(gl);
    }
}

fn query<T: JsCast>(document: &Document, selector: &'static str) -> Result<T> {
    document
        .query_selector(selector)?
        .ok_or(EffectError::MissingElement(selector))?
        .dyn_into()
        .map_err(|_| EffectError::MissingElement(selector))
}

fn rect(r: &DomRect) -> Rect {
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Re-capture once web fonts have settled so glyph metrics are final.
fn schedule_capture(renderer: &Rc<RefCell<FluidRenderer>>, window: &Window, document: &Document) {
    let run = {
        let renderer = renderer.clone();
        let window = window.clone();
        let document = document.clone();
        move || {
            if let Err(err) = renderer.borrow_mut().capture(&window, &document) {
                warn!("text capture skipped: {err}");
            }
        }
    };
    match document.fonts().ready() {
        Ok(ready) => {
            let callback: Closure<dyn FnMut(JsValue)> = Closure::once(move |_: JsValue| run());
            let _ = ready.then(&callback);
            callback.forget();
        }
        Err(_) => {
            if let Err(err) = render::after(window, CAPTURE_FALLBACK_MS, run) {
                warn!("could not schedule text capture: {err}");
            }
        }
    }
}

pub fn start(window: &Window, document: &Document, config: &SiteConfig) -> Result<()> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(EffectError::MissingElement("#fluid-canvas"))?
        .dyn_into()
        .map_err(|_| EffectError::MissingElement("#fluid-canvas"))?;
    let gl = render::gl_context(&canvas, true)?;
    let program = QuadProgram::new(&gl, FLUID_VERTEX, FLUID_FRAGMENT)?;
    let locations = Locations {
        text: program.uniform(&gl, "uText"),
        mouse: program.uniform(&gl, "uMouse"),
        time: program.uniform(&gl, "uTime"),
        resolution: program.uniform(&gl, "uResolution"),
        padding: program.uniform(&gl, "uPadding"),
    };
    let mut state = TextFluid::new(config);
    state.mark_initialized();

    let renderer = Rc::new(RefCell::new(FluidRenderer {
        gl,
        canvas,
        program,
        locations,
        texture: None,
        state,
        bleed: config.fluid.bleed,
    }));

    {
        let renderer = renderer.clone();
        render::listen::<MouseEvent, _>(window, "mousemove", true, move |event| {
            renderer.borrow_mut().pointer(event);
        })?;
    }
    {
        let renderer = renderer.clone();
        let win = window.clone();
        let doc = document.clone();
        render::listen::<web_sys::Event, _>(window, "resize", true, move |_| {
            renderer.borrow_mut().resize();
            schedule_capture(&renderer, &win, &doc);
        })?;
    }
    renderer.borrow_mut().resize();
    schedule_capture(&renderer, window, document);

    render::run_frames(move |dt| renderer.borrow_mut().frame(dt))
}
