//! Failures while wiring the particle field into a browser page.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum HostError {
    /// No global `window` (e.g. running inside a worker).
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("canvas has no 2d rendering context")]
    NoContext,

    /// `innerWidth`/`innerHeight` did not come back as numbers.
    #[error("could not read window {0}")]
    WindowSize(&'static str),
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
