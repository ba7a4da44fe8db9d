//! Per-chunk luma and color averaging.

use super::grayscale::{luma16, CHANNEL_16_TO_8};
use super::partition::span;
use crate::source::PixelSource;

/// Divisor applied to summed 16-bit channels when averaging chunk color.
///
/// Differs from [`CHANNEL_16_TO_8`], so a white chunk averages to 257 per
/// channel. Emitted colors depend on this exact value.
pub const COLOR_DIVISOR: u64 = 255;

/// Average color of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChunkColor {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

/// Averages computed over one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    /// Average luma, 0-255.
    pub luma: u8,
    /// Average color, present when requested.
    pub color: Option<ChunkColor>,
}

/// Average the pixels of chunk `(ix, iy)`.
///
/// The chunk spans `[steps_x[ix - 1], steps_x[ix])` horizontally (starting
/// at 0 for `ix == 0`) and likewise vertically. Each pixel's luma is
/// truncated before it is summed; the sum is then divided by
/// `pixels * 257`. With `with_color`, each channel sum is divided by
/// `pixels * 255`.
///
/// # Arguments
/// * `steps_x`, `steps_y` - Cumulative chunk boundaries per axis
/// * `ix`, `iy` - Chunk index along each axis
/// * `source` - Pixels to sample
/// * `with_color` - Also compute the average color
///
/// # Panics
/// Panics if the chunk is empty; boundaries from
/// [`Partition`](super::Partition) never produce one.
pub fn aggregate<S: PixelSource + ?Sized>(
    steps_x: &[u32],
    steps_y: &[u32],
    ix: usize,
    iy: usize,
    source: &S,
    with_color: bool,
) -> Aggregate {
    let xs = span(steps_x, ix);
    let ys = span(steps_y, iy);
    let pixels = (xs.end - xs.start) as u64 * (ys.end - ys.start) as u64;
    assert!(pixels > 0, "chunk ({ix}, {iy}) has no pixels");

    let mut luma_sum = 0u64;
    let (mut sum_r, mut sum_g, mut sum_b) = (0u64, 0u64, 0u64);

    for y in ys {
        for x in xs.clone() {
            let px = source.rgba(x, y);
            luma_sum += luma16(px.r, px.g, px.b) as u64;
            if with_color {
                sum_r += px.r as u64;
                sum_g += px.g as u64;
                sum_b += px.b as u64;
            }
        }
    }

    // A truncated per-pixel luma never exceeds 65535, so this stays within 0-255.
    let luma = u8::try_from(luma_sum / (pixels * CHANNEL_16_TO_8)).unwrap_or(u8::MAX);

    let color = with_color.then(|| {
        let denom = pixels * COLOR_DIVISOR;
        ChunkColor {
            r: (sum_r / denom) as u32,
            g: (sum_g / denom) as u32,
            b: (sum_b / denom) as u32,
        }
    });

    Aggregate { luma, color }
}
