//! Grayscale reduction filters.
//!
//! Every filter collapses a pixel to a single grey level and writes it to
//! all three channels, so the output always has R = G = B.
//!
//! ## Methods
//!
//! - **average**: plain mean of the three channels
//! - **binary**: mean thresholded at the midpoint, black or white
//! - **desaturation**: midpoint of the brightest and darkest channel
//! - **luminance**: ITU-R BT.601 weighted sum
//! - **red/green/blue_channel**: one channel copied to all three

use super::{rgb_channels, Rgb};
use crate::error::FilterResult;

/// ITU-R BT.601 luma coefficients
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

#[inline]
fn grey(level: u32) -> Rgb {
    let v = level as u8;
    [v, v, v]
}

/// Floor of the channel mean.
pub fn average(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    Ok(grey((r + g + b) / 3))
}

/// White when the real-valued mean is strictly above 127.5, black otherwise.
pub fn binary(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    let mean = (r + g + b) as f64 / 3.0;
    Ok(grey(if mean > 255.0 / 2.0 { 255 } else { 0 }))
}

/// Floor of the midpoint between the largest and smallest channel.
pub fn desaturation(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    Ok(grey((max + min) / 2))
}

/// Weighted luma, truncated toward zero.
pub fn luminance(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    let luma = r as f64 * LUMA_R + g as f64 * LUMA_G + b as f64 * LUMA_B;
    Ok(grey(luma as u32))
}

pub fn red_channel(color: &[u8]) -> FilterResult<Rgb> {
    let (r, _, _) = rgb_channels(color)?;
    Ok(grey(r))
}

pub fn green_channel(color: &[u8]) -> FilterResult<Rgb> {
    let (_, g, _) = rgb_channels(color)?;
    Ok(grey(g))
}

pub fn blue_channel(color: &[u8]) -> FilterResult<Rgb> {
    let (_, _, b) = rgb_channels(color)?;
    Ok(grey(b))
}
