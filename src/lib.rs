//! asciify library crate.
//!
//! Converts raster images into ASCII art, optionally colored with 24-bit
//! ANSI escapes. The binary is a thin wrapper over [`convert_file`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod source;

use std::path::Path;

use ascii::{rows_for, Axis, Partition, Ramp, DEFAULT_CHAR_ASPECT_RATIO};
pub use error::Error;
use render::Canvas;
use source::{Image, PixelSource};

/// Resolved settings for one conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Output width in glyphs
    pub columns: u32,
    /// Reverse the glyph ramp
    pub invert: bool,
    /// Emit 24-bit color escapes
    pub color: bool,
    /// Terminal cell height / width
    pub char_aspect: f32,
}

impl RenderOptions {
    /// Options for `columns` glyphs with every other setting at its default.
    pub fn new(columns: u32) -> Self {
        Self {
            columns,
            invert: false,
            color: false,
            char_aspect: DEFAULT_CHAR_ASPECT_RATIO,
        }
    }

    /// Check the options before any image work is done.
    pub fn validate(&self) -> Result<(), Error> {
        if self.columns == 0 {
            return Err(Error::InvalidWidth);
        }
        if !(self.char_aspect.is_finite() && self.char_aspect > 0.0) {
            return Err(Error::InvalidCharAspect(self.char_aspect));
        }
        Ok(())
    }
}

/// Convert an in-memory pixel source into a glyph canvas.
///
/// Fails with [`Error::StepTooSmall`] if either axis has fewer pixels than
/// the chunks requested along it, including the case where the image is so
/// wide that no rows fit.
pub fn convert<S: PixelSource + ?Sized>(
    source: &S,
    options: &RenderOptions,
) -> Result<Canvas, Error> {
    options.validate()?;

    let (width, height) = source.bounds();
    let rows = rows_for(width, height, options.columns, options.char_aspect);
    log::debug!(
        "Image {}x{} -> {} columns x {} rows",
        width,
        height,
        options.columns,
        rows
    );

    let xs = Partition::new(Axis::X, width, options.columns)?;
    let ys = Partition::new(Axis::Y, height, rows)?;

    Ok(Canvas::build(
        source,
        &xs,
        &ys,
        Ramp::from_invert(options.invert),
        options.color,
    ))
}

/// Open, decode and convert an image file.
pub fn convert_file(path: &Path, options: &RenderOptions) -> Result<Canvas, Error> {
    options.validate()?;
    let image = Image::open(path)?;
    convert(&image, options)
}
