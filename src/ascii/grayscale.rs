//! RGB to luma conversion using the NTSC (ITU-R BT.601) weights.

/// Red channel weight.
pub const R_WEIGHT: f32 = 0.299;
/// Green channel weight.
pub const G_WEIGHT: f32 = 0.587;
/// Blue channel weight.
pub const B_WEIGHT: f32 = 0.114;

/// Divisor that brings a 16-bit channel value down to the 0-255 range.
pub const CHANNEL_16_TO_8: u64 = 257;

/// Weighted luma of a single pixel on the 16-bit channel scale.
///
/// The formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Evaluated in single precision and truncated toward zero, so a pure white
/// pixel (65535, 65535, 65535) yields exactly 65535.
///
/// # Arguments
/// * `r`, `g`, `b` - Channel values in 0-65535
///
/// # Returns
/// The truncated luma, in 0-65535
#[inline]
pub fn luma16(r: u32, g: u32, b: u32) -> u32 {
    (R_WEIGHT * r as f32 + G_WEIGHT * g as f32 + B_WEIGHT * b as f32) as u32
}
