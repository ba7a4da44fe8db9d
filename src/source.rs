//! Decoded images exposed as a grid of 16-bit RGBA samples.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{ImageBuffer, ImageReader, Rgba};

use crate::error::Error;

/// One pixel's color on the 0-65535 channel scale, premultiplied by alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba16 {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Rgba16 {
    /// Build from straight (non-premultiplied) 16-bit channels.
    pub fn from_straight(r: u16, g: u16, b: u16, a: u16) -> Self {
        let a = a as u32;
        let premultiply = |c: u16| c as u32 * a / 0xffff;
        Self {
            r: premultiply(r),
            g: premultiply(g),
            b: premultiply(b),
        }
    }
}

/// Anything that can be sampled pixel by pixel.
pub trait PixelSource {
    /// Image size as `(width, height)` in pixels.
    fn bounds(&self) -> (u32, u32);

    /// Sample the pixel at `(x, y)`. Callers stay within [`bounds`](Self::bounds).
    fn rgba(&self, x: u32, y: u32) -> Rgba16;
}

/// In-memory 16-bit RGBA image buffer.
pub type Rgba16Buffer = ImageBuffer<Rgba<u16>, Vec<u16>>;

impl PixelSource for Rgba16Buffer {
    fn bounds(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn rgba(&self, x: u32, y: u32) -> Rgba16 {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        Rgba16::from_straight(r, g, b, a)
    }
}

/// A decoded image file.
pub struct Image {
    pixels: Rgba16Buffer,
}

impl Image {
    /// Open and decode a JPEG or PNG file.
    ///
    /// The format is detected from the file contents, not its extension.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let decoded = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?
            .decode()
            .map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(Self {
            pixels: decoded.to_rgba16(),
        })
    }
}

impl PixelSource for Image {
    fn bounds(&self) -> (u32, u32) {
        self.pixels.bounds()
    }

    fn rgba(&self, x: u32, y: u32) -> Rgba16 {
        self.pixels.rgba(x, y)
    }
}
