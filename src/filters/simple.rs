//! Simple color-effect filters.
//!
//! Atmosphere, Blacklight, Burn, Color Shift, Freeze, Lava, Metal,
//! Negative and Ocean. Each maps one RGB pixel to a new RGB pixel.

use super::{rgb_channels, Rgb};
use crate::error::FilterResult;

/// Luminance weights (per mille) shared by Blacklight and Metal.
const LUMA_R_MILLE: u32 = 222;
const LUMA_G_MILLE: u32 = 707;
const LUMA_B_MILLE: u32 = 71;

#[inline]
fn clamp_u8(v: u32) -> u8 {
    v.min(255) as u8
}

// ============================================================================
// Channel mixing
// ============================================================================

/// Replace each channel with the average of the other two.
pub fn atmosphere(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    Ok([((g + b) / 2) as u8, ((r + b) / 2) as u8, ((r + g) / 2) as u8])
}

/// Rotate channels: (r, g, b) -> (b, r, g).
pub fn color_shift(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    Ok([b as u8, r as u8, g as u8])
}

/// Invert every channel.
pub fn negative(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    Ok([(255 - r) as u8, (255 - g) as u8, (255 - b) as u8])
}

// ============================================================================
// Luminance based
// ============================================================================

/// Amplify each channel's distance from the weighted luminance.
///
/// Luminance is kept as a real number; the doubled distance is truncated
/// toward zero and clamped to 255.
pub fn blacklight(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    let luminance = (LUMA_R_MILLE * r + LUMA_G_MILLE * g + LUMA_B_MILLE * b) as f64 / 1000.0;
    let glow = |c: u32| clamp_u8(((c as f64 - luminance).abs() * 2.0) as u32);
    Ok([glow(r), glow(g), glow(b)])
}

/// Brightened, slightly blue-tinted grey.
pub fn metal(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    let grey = (r * LUMA_R_MILLE + g * LUMA_G_MILLE + b * LUMA_B_MILLE) / 1000;
    // 2 * (grey + 65) >= 130, so none of these go below zero
    let tone = |offset: u32| clamp_u8(2 * (grey + offset) - 128);
    Ok([tone(70), tone(65), tone(75)])
}

// ============================================================================
// Average based
// ============================================================================

/// Warm tones: red boosted, blue reduced.
pub fn burn(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    let grey = (r + g + b) / 3;
    Ok([clamp_u8(grey * 3), grey as u8, (grey / 3) as u8])
}

/// Cold tones: blue boosted, red reduced.
pub fn ocean(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    let grey = (r + g + b) / 3;
    Ok([(grey / 3) as u8, grey as u8, clamp_u8(grey * 3)])
}

/// Average in red, blue's distance from mid-grey in green and blue.
pub fn lava(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    let heat = b.abs_diff(128) as u8;
    Ok([((r + g + b) / 3) as u8, heat, heat])
}

/// Each channel minus the other two, scaled by 1.5.
pub fn freeze(color: &[u8]) -> FilterResult<Rgb> {
    let (r, g, b) = rgb_channels(color)?;
    let c = [r as i32, g as i32, b as i32];
    let mut out = [0u8; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        let diff = c[i] - c[(i + 1) % 3] - c[(i + 2) % 3];
        *slot = clamp_u8((diff as f64 * 1.5).abs() as u32);
    }
    Ok(out)
}
