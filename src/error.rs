//! Error type shared by every effect and page component.
//!
//! None of these errors reach the visitor. Effects that fail to initialize are
//! logged and dropped; the rest of the page keeps working.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectError {
    /// A DOM element the component depends on is absent.
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    /// The browser refused the requested rendering context.
    #[error("{0} context unavailable")]
    ContextUnavailable(&'static str),

    #[error("shader compile failed: {0}")]
    ShaderCompile(String),

    #[error("program link failed: {0}")]
    ProgramLink(String),

    /// `create_buffer`/`create_texture`/... returned nothing.
    #[error("could not allocate {0}")]
    ResourceAllocation(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EffectError>;

impl From<serde_json::Error> for EffectError {
    fn from(err: serde_json::Error) -> Self {
        EffectError::Config(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for EffectError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        EffectError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<EffectError> for wasm_bindgen::JsValue {
    fn from(err: EffectError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_carry_the_parser_message() {
        let err: EffectError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
        match err {
            EffectError::Config(msg) => assert!(msg.contains("invalid type")),
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn display_names_the_missing_piece() {
        assert_eq!(
            EffectError::MissingElement("#fluid-canvas").to_string(),
            "missing element: #fluid-canvas"
        );
        assert_eq!(
            EffectError::ContextUnavailable("webgl2").to_string(),
            "webgl2 context unavailable"
        );
    }
}
