//! WASM bindings for Starhex.
//!
//! This crate provides the JavaScript surface of the simulation core using
//! `wasm-bindgen` and `serde-wasm-bindgen` for type conversion. The host
//! engine owns rendering, input, and the frame loop; it calls in here for
//! generation and resource math and reads back plain JSON-shaped values.

use wasm_bindgen::prelude::*;

mod frame;
mod resources;
mod system;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
