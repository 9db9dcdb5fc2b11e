//! Front end of a portfolio site: rolling project headers, a liquid text
//! effect over the CV name, an animated gradient background and overscroll
//! page navigation.
//!
//! Everything stateful is plain Rust and runs on any target; the browser
//! bindings only translate DOM events and push uniforms.

pub mod config;
pub mod effect;
pub mod error;
pub mod fluid;
pub mod gradient;
pub mod header_stack;
pub mod input;
pub mod intro;
pub mod nav;
pub mod pointer;
pub mod projects;
pub mod reveal;
pub mod shaders;
pub mod text_capture;
pub mod trail;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use log::{debug, info, warn};
    use wasm_bindgen::prelude::*;

    use crate::error::EffectError;

    pub mod fluid;
    pub mod gradient;
    pub mod page;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let (config, config_err) = page::load_config(&document);
        console_log::init_with_level(config.log_level.into()).ok();
        if let Some(err) = config_err {
            warn!("ignoring page configuration: {err}");
        }
        info!("folio starting");

        page::start(&window, &document, &config);

        // Effects degrade silently: a failure only costs the decoration.
        if let Err(err) = fluid::start(&window, &document, &config) {
            disabled("text fluid", err);
        }
        if let Err(err) = gradient::start(&window, &document, &config) {
            disabled("gradient background", err);
        }
        Ok(())
    }

    /// Pages without the effect's markup are expected; anything else is worth
    /// a console line.
    fn disabled(effect: &str, err: EffectError) {
        match err {
            EffectError::MissingElement(_) => debug!("{effect} disabled: {err}"),
            _ => warn!("{effect} disabled: {err}"),
        }
    }
}
