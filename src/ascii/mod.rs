//! Image to glyph conversion.
//!
//! This module turns a pixel grid into a grid of glyphs:
//!
//! 1. **Partitioning** - Split each axis into near-equal pixel steps
//! 2. **Aggregation** - Average luma (and optionally color) per chunk
//! 3. **Glyph mapping** - Map average luma onto a 19-glyph ramp
//!
//! The row count follows the image aspect ratio, corrected for terminal
//! cells being taller than they are wide (see [`rows_for`]).

mod aggregate;
mod charset;
mod dimensions;
mod grayscale;
mod partition;

pub use aggregate::{aggregate, Aggregate, ChunkColor, COLOR_DIVISOR};
pub use charset::{bucket, to_glyph, Ramp, FALLBACK_GLYPH, GLYPH_RAMP, INVERTED_GLYPH_RAMP};
pub use dimensions::{rows_for, DEFAULT_CHAR_ASPECT_RATIO};
pub use grayscale::{luma16, B_WEIGHT, CHANNEL_16_TO_8, G_WEIGHT, R_WEIGHT};
pub use partition::{partition, Axis, Partition};
