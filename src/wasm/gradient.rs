//! Animated gradient background for the CV page.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, TouchEvent,
    WebGl2RenderingContext as GL, WebGlTexture, WebGlUniformLocation, Window,
};

use super::render::{self, QuadProgram};
use crate::config::SiteConfig;
use crate::effect::FrameEffect;
use crate::error::{EffectError, Result};
use crate::gradient::GradientField;
use crate::input::InputEvent;
use crate::shaders::{GRADIENT_FRAGMENT, GRADIENT_VERTEX};
use crate::trail::{TrailPainter, TrailSplat};

const CANVAS_ID: &str = "liquid-bg-canvas";
const PAGE_CLASS: &str = "cv-page";

/// Paints trail splats on a small 2D canvas.
///
/// Each splat is a solid circle drawn far outside the canvas whose blurred
/// shadow is offset back onto the real position; only the shadow is visible.
pub struct CanvasTrailPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: f64,
}

impl CanvasTrailPainter {
    pub fn new(document: &Document, size: u32) -> Result<Self> {
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| EffectError::ResourceAllocation("trail canvas"))?;
        canvas.set_width(size);
        canvas.set_height(size);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(EffectError::ContextUnavailable("2d"))?
            .dyn_into()
            .map_err(|_| EffectError::ContextUnavailable("2d"))?;
        let mut painter = Self {
            canvas,
            ctx,
            size: f64::from(size),
        };
        painter.clear();
        Ok(painter)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl TrailPainter for CanvasTrailPainter {
    fn clear(&mut self) {
        self.ctx.set_shadow_color("transparent");
        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, self.size, self.size);
    }

    fn splat(&mut self, splat: &TrailSplat) {
        let offset = self.size * 5.0;
        let [r, g, b] = splat.rgb;
        self.ctx.set_shadow_offset_x(offset);
        self.ctx.set_shadow_offset_y(offset);
        self.ctx.set_shadow_blur(splat.radius);
        self.ctx
            .set_shadow_color(&format!("rgba({r},{g},{b},{})", splat.alpha));
        self.ctx.begin_path();
        self.ctx.set_fill_style_str("rgba(255,0,0,1)");
        if self
            .ctx
            .arc(splat.x - offset, splat.y - offset, splat.radius, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}

struct Locations {
    time: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
    colors: [Option<WebGlUniformLocation>; 4],
    dark_base: Option<WebGlUniformLocation>,
    speed: Option<WebGlUniformLocation>,
    intensity: Option<WebGlUniformLocation>,
    touch_texture: Option<WebGlUniformLocation>,
    touch_strength: Option<WebGlUniformLocation>,
    grain: Option<WebGlUniformLocation>,
    gradient_size: Option<WebGlUniformLocation>,
    color1_weight: Option<WebGlUniformLocation>,
    color2_weight: Option<WebGlUniformLocation>,
}

impl Locations {
    fn lookup(gl: &GL, program: &QuadProgram) -> Self {
        Self {
            time: program.uniform(gl, "uTime"),
            resolution: program.uniform(gl, "uResolution"),
            colors: ["uColor1", "uColor2", "uColor3", "uColor4"].map(|n| program.uniform(gl, n)),
            dark_base: program.uniform(gl, "uDarkBase"),
            speed: program.uniform(gl, "uSpeed"),
            intensity: program.uniform(gl, "uIntensity"),
            touch_texture: program.uniform(gl, "uTouchTexture"),
            touch_strength: program.uniform(gl, "uTouchStrength"),
            grain: program.uniform(gl, "uGrainIntensity"),
            gradient_size: program.uniform(gl, "uGradientSize"),
            color1_weight: program.uniform(gl, "uColor1Weight"),
            color2_weight: program.uniform(gl, "uColor2Weight"),
        }
    }
}

struct GradientRenderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: QuadProgram,
    locations: Locations,
    trail_texture: WebGlTexture,
    state: GradientField<CanvasTrailPainter>,
    max_pixel_ratio: f64,
}

impl GradientRenderer {
    fn resize(&mut self, window: &Window) {
        let (w, h) = viewport(window);
        let ratio = window.device_pixel_ratio().min(self.max_pixel_ratio);
        let (pw, ph) = ((w * ratio) as u32, (h * ratio) as u32);
        self.canvas.set_width(pw);
        self.canvas.set_height(ph);
        let style = self.canvas.style();
        let sized = style
            .set_property("width", &format!("{w}px"))
            .and_then(|()| style.set_property("height", &format!("{h}px")));
        if let Err(err) = sized {
            warn!("background canvas resize failed: {err:?}");
        }
        self.gl.viewport(0, 0, pw as i32, ph as i32);
        self.state.handle(&InputEvent::Resize { width: w, height: h });
    }

    fn pointer(&mut self, window: &Window, client_x: f64, client_y: f64) {
        let (w, h) = viewport(window);
        if w > 0.0 && h > 0.0 {
            self.state.handle(&InputEvent::PointerMove {
                x: client_x / w,
                y: client_y / h,
            });
        }
    }

    fn frame(&mut self, dt: f64) {
        self.state.tick(dt);
        let gl = &self.gl;
        if self.state.take_trail_upload() {
            if let Err(err) = render::upload_canvas(
                gl,
                &self.trail_texture,
                self.state.painter().canvas(),
                true,
            ) {
                warn!("trail upload failed: {err}");
            }
        }

        let u = self.state.uniforms();
        let l = &self.locations;
        gl.uniform1f(l.time.as_ref(), u.time);
        gl.uniform2f(l.resolution.as_ref(), u.resolution[0], u.resolution[1]);
        for (loc, [r, g, b]) in l.colors.iter().zip(u.colors) {
            gl.uniform3f(loc.as_ref(), r, g, b);
        }
        let [r, g, b] = u.dark_base;
        gl.uniform3f(l.dark_base.as_ref(), r, g, b);
        gl.uniform1f(l.speed.as_ref(), u.speed);
        gl.uniform1f(l.intensity.as_ref(), u.intensity);
        gl.uniform1f(l.touch_strength.as_ref(), u.touch_strength);
        gl.uniform1f(l.grain.as_ref(), u.grain_intensity);
        gl.uniform1f(l.gradient_size.as_ref(), u.gradient_size);
        gl.uniform1f(l.color1_weight.as_ref(), u.color1_weight);
        gl.uniform1f(l.color2_weight.as_ref(), u.color2_weight);
        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.trail_texture));
        gl.uniform1i(l.touch_texture.as_ref(), 0);
        self.program.draw(gl);
    }
}

fn viewport(window: &Window) -> (f64, f64) {
    let read = |v: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

pub fn start(window: &Window, document: &Document, config: &SiteConfig) -> Result<()> {
    let body = document.body().ok_or(EffectError::MissingElement("body"))?;
    if !body.class_list().contains(PAGE_CLASS) {
        debug!("gradient background not wanted on this page");
        return Ok(());
    }

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| EffectError::ResourceAllocation("background canvas"))?;
    canvas.set_id(CANVAS_ID);
    body.insert_before(&canvas, body.first_child().as_ref())?;

    let gl = render::gl_context(&canvas, false)?;
    let program = QuadProgram::new(&gl, GRADIENT_VERTEX, GRADIENT_FRAGMENT)?;
    let locations = Locations::lookup(&gl, &program);
    let trail_texture = render::linear_texture(&gl)?;

    let painter = CanvasTrailPainter::new(document, config.trail.size)?;
    let mut state = GradientField::new(config, painter);
    state.mark_initialized();

    let renderer = Rc::new(RefCell::new(GradientRenderer {
        gl,
        canvas,
        program,
        locations,
        trail_texture,
        state,
        max_pixel_ratio: config.gradient.max_pixel_ratio,
    }));

    {
        let renderer = renderer.clone();
        let win = window.clone();
        render::listen::<MouseEvent, _>(window, "mousemove", true, move |e| {
            renderer
                .borrow_mut()
                .pointer(&win, f64::from(e.client_x()), f64::from(e.client_y()));
        })?;
    }
    {
        let renderer = renderer.clone();
        let win = window.clone();
        render::listen::<TouchEvent, _>(window, "touchmove", true, move |e| {
            if let Some(touch) = e.touches().get(0) {
                renderer
                    .borrow_mut()
                    .pointer(&win, f64::from(touch.client_x()), f64::from(touch.client_y()));
            }
        })?;
    }
    {
        let renderer = renderer.clone();
        let win = window.clone();
        render::listen::<web_sys::Event, _>(window, "resize", true, move |_| {
            renderer.borrow_mut().resize(&win);
        })?;
    }
    renderer.borrow_mut().resize(window);

    render::run_frames(move |dt| renderer.borrow_mut().frame(dt))
}
