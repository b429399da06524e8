//! WebAssembly exports for PhotoStag filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images are
//! passed as flat interleaved u8 buffers (length = width * height * channels).

use wasm_bindgen::prelude::*;

use crate::engine::filter_buffer;
use crate::filters::filter_names;

/// Apply a named filter to a flat RGB u8 image.
///
/// # Arguments
/// * `data` - Flat array of bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Channels per pixel; catalog filters need exactly 3
/// * `name` - Catalog filter name
///
/// # Returns
/// Flat array of filtered bytes, or an error message for an unknown name,
/// a mismatched buffer length or an unsupported channel count.
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    name: &str,
) -> Result<Vec<u8>, JsValue> {
    filter_buffer(data, width, height, channels, name)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Names of all filters, simple filters first.
#[wasm_bindgen]
pub fn filter_names_wasm() -> Vec<String> {
    filter_names().into_iter().map(String::from).collect()
}
