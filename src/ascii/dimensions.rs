//! Row count calculation for aspect-ratio-correct output.

/// Default terminal character aspect ratio.
/// Terminal characters are typically ~2x taller than wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Number of glyph rows for an image rendered `columns` glyphs wide.
///
/// Computed in single precision as
/// `columns * img_height / img_width / char_aspect`, truncated. The result
/// can be 0 for very wide images; callers treat that as "step too small".
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `columns` - Output width in glyphs
/// * `char_aspect` - Terminal character aspect ratio (height/width, typically ~2.0)
///
/// # Example
/// ```
/// use asciify::ascii::{rows_for, DEFAULT_CHAR_ASPECT_RATIO};
/// // A square image 10 glyphs wide is 5 rows tall
/// assert_eq!(rows_for(100, 100, 10, DEFAULT_CHAR_ASPECT_RATIO), 5);
/// ```
pub fn rows_for(img_width: u32, img_height: u32, columns: u32, char_aspect: f32) -> u32 {
    if img_width == 0 {
        return 0;
    }
    (columns as f32 * img_height as f32 / img_width as f32 / char_aspect) as u32
}
