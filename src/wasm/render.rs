use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use log::error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, EventTarget, HtmlCanvasElement, WebGl2RenderingContext as GL,
    WebGlProgram, WebGlShader, WebGlTexture, WebGlUniformLocation, Window,
};

use crate::error::{EffectError, Result};
use crate::shaders::QUAD_VERTICES;

/// Acquire a WebGL2 context for `canvas`.
pub fn gl_context(canvas: &HtmlCanvasElement, alpha: bool) -> Result<GL> {
    let attrs = js_sys::Object::new();
    Reflect::set(&attrs, &"alpha".into(), &JsValue::from_bool(alpha))?;
    Reflect::set(&attrs, &"antialias".into(), &JsValue::TRUE)?;
    canvas
        .get_context_with_context_options("webgl2", &attrs)?
        .ok_or(EffectError::ContextUnavailable("webgl2"))?
        .dyn_into()
        .map_err(|_| EffectError::ContextUnavailable("webgl2"))
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or(EffectError::ResourceAllocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Ok(shader);
    }
    let log = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    error!("shader compile failed: {log}");
    Err(EffectError::ShaderCompile(log))
}

/// A linked program drawing one fullscreen quad.
pub struct QuadProgram {
    program: WebGlProgram,
}

impl QuadProgram {
    pub fn new(gl: &GL, vertex: &str, fragment: &str) -> Result<Self> {
        let vs = compile(gl, GL::VERTEX_SHADER, vertex)?;
        let fs = compile(gl, GL::FRAGMENT_SHADER, fragment)?;
        let program = gl
            .create_program()
            .ok_or(EffectError::ResourceAllocation("program"))?;
        gl.attach_shader(&program, &vs);
        gl.attach_shader(&program, &fs);
        gl.link_program(&program);
        if !gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            error!("program link failed: {log}");
            return Err(EffectError::ProgramLink(log));
        }
        gl.use_program(Some(&program));

        let buffer = gl
            .create_buffer()
            .ok_or(EffectError::ResourceAllocation("vertex buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let vertices = js_sys::Float32Array::from(&QUAD_VERTICES[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

        // The attribute may be optimized out only if the shader is broken.
        let position = gl.get_attrib_location(&program, "position");
        if position >= 0 {
            gl.enable_vertex_attrib_array(position as u32);
            gl.vertex_attrib_pointer_with_i32(position as u32, 2, GL::FLOAT, false, 0, 0);
        }
        Ok(Self { program })
    }

    pub fn uniform(&self, gl: &GL, name: &str) -> Option<WebGlUniformLocation> {
        gl.get_uniform_location(&self.program, name)
    }

    pub fn draw(&self, gl: &GL) {
        gl.use_program(Some(&self.program));
        gl.draw_arrays(GL::TRIANGLES, 0, 6);
    }
}

/// Texture with clamped edges and linear filtering, nothing uploaded yet.
pub fn linear_texture(gl: &GL) -> Result<WebGlTexture> {
    let texture = gl
        .create_texture()
        .ok_or(EffectError::ResourceAllocation("texture"))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
    Ok(texture)
}

/// Upload a canvas into `texture` (already created with [`linear_texture`]).
pub fn upload_canvas(gl: &GL, texture: &WebGlTexture, source: &HtmlCanvasElement, flip_y: bool) -> Result<()> {
    gl.bind_texture(GL::TEXTURE_2D, Some(texture));
    gl.pixel_storei(GL::UNPACK_FLIP_Y_WEBGL, i32::from(flip_y));
    let uploaded = gl.tex_image_2d_with_u32_and_u32_and_html_canvas_element(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        source,
    );
    gl.pixel_storei(GL::UNPACK_FLIP_Y_WEBGL, 0);
    uploaded.map_err(EffectError::from)
}

/// Register a DOM listener for the lifetime of the page. Events that are not
/// of type `E` are ignored.
pub fn listen<E, F>(target: &EventTarget, kind: &str, passive: bool, mut handler: F) -> Result<()>
where
    E: JsCast,
    F: FnMut(&E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(event) = event.dyn_ref::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub fn after(window: &Window, ms: i32, f: impl FnOnce() + 'static) -> Result<()> {
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)?;
    Ok(())
}

/// Drive `frame` from `requestAnimationFrame` until the page unloads. The
/// argument is the time since the previous frame in seconds.
pub fn run_frames(mut frame: impl FnMut(f64) + 'static) -> Result<()> {
    let win = window().ok_or(EffectError::MissingElement("window"))?;
    let performance = win
        .performance()
        .ok_or(EffectError::ContextUnavailable("performance"))?;

    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut last = performance.now();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = performance.now();
        frame(((now - last) / 1000.0).max(0.0));
        last = now;

        // schedule next
        if let (Some(win), Some(cb)) = (window(), f.borrow().as_ref()) {
            if let Err(err) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                error!("request_animation_frame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
