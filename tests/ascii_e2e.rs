//! End-to-end tests: image files on disk through to rendered text.

use asciify::ascii::Axis;
use asciify::{convert_file, Error, RenderOptions};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to write a solid-color fixture and return its path.
fn write_solid(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save(&path)
        .expect("write fixture");
    path
}

fn lines_of(glyph: char, columns: usize, rows: usize) -> String {
    let row: String = std::iter::repeat(glyph).take(columns).collect();
    let mut expected = String::new();
    for _ in 0..rows {
        expected.push('\n');
        expected.push_str(&row);
    }
    expected.push('\n');
    expected
}

#[test]
fn test_black_image_renders_densest_glyph() {
    let dir = TempDir::new().unwrap();
    let path = write_solid(dir.path(), "black.png", 100, 200, [0, 0, 0]);

    let canvas = convert_file(&path, &RenderOptions::new(10)).unwrap();
    assert_eq!(canvas.columns(), 10);
    assert_eq!(canvas.rows(), 10);
    assert_eq!(canvas.to_text(false), lines_of('W', 10, 10));
}

#[test]
fn test_black_image_inverted_renders_spaces() {
    let dir = TempDir::new().unwrap();
    let path = write_solid(dir.path(), "black.png", 100, 200, [0, 0, 0]);

    let options = RenderOptions {
        invert: true,
        ..RenderOptions::new(10)
    };
    let canvas = convert_file(&path, &options).unwrap();
    assert_eq!(canvas.to_text(false), lines_of(' ', 10, 10));
}

#[test]
fn test_square_image_halves_row_count() {
    let dir = TempDir::new().unwrap();
    let path = write_solid(dir.path(), "black.png", 100, 100, [0, 0, 0]);

    let canvas = convert_file(&path, &RenderOptions::new(10)).unwrap();
    assert_eq!(canvas.to_text(false), lines_of('W', 10, 5));
}

#[test]
fn test_white_image_in_color() {
    let dir = TempDir::new().unwrap();
    let path = write_solid(dir.path(), "white.png", 4, 4, [255, 255, 255]);

    let options = RenderOptions {
        color: true,
        ..RenderOptions::new(2)
    };
    let canvas = convert_file(&path, &options).unwrap();
    let cell = "\x1b[38;2;257;257;257m \x1b[0m";
    let expected = format!("\n{cell}{cell}\n");
    assert_eq!(canvas.to_text(true), expected);
}

#[test]
fn test_horizontal_gradient_gets_lighter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gradient.png");
    RgbImage::from_fn(190, 38, |x, _| {
        let v = (x * 255 / 189) as u8;
        Rgb([v, v, v])
    })
    .save(&path)
    .unwrap();

    let canvas = convert_file(&path, &RenderOptions::new(19)).unwrap();
    let row: String = canvas.cells()[..19].iter().map(|c| c.glyph).collect();
    assert_eq!(row.chars().next(), Some('W'));
    assert_eq!(row.chars().last(), Some(' '));
    assert!(canvas.cells().iter().all(|c| c.color.is_none()));
}

#[test]
fn test_transparent_png_reads_as_black() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clear.png");
    RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 0]))
        .save(&path)
        .unwrap();

    let canvas = convert_file(&path, &RenderOptions::new(4)).unwrap();
    assert!(canvas.cells().iter().all(|c| c.glyph == 'W'));
}

#[test]
fn test_jpeg_input() {
    let dir = TempDir::new().unwrap();
    let path = write_solid(dir.path(), "black.jpg", 64, 64, [0, 0, 0]);

    let canvas = convert_file(&path, &RenderOptions::new(8)).unwrap();
    assert_eq!(canvas.to_text(false), lines_of('W', 8, 4));
}

#[test]
fn test_format_sniffed_from_contents() {
    let dir = TempDir::new().unwrap();
    let png = write_solid(dir.path(), "black.png", 8, 8, [0, 0, 0]);
    let renamed = dir.path().join("black.dat");
    std::fs::rename(&png, &renamed).unwrap();

    assert!(convert_file(&renamed, &RenderOptions::new(2)).is_ok());
}

#[test]
fn test_width_larger_than_image_is_step_too_small() {
    let dir = TempDir::new().unwrap();
    let path = write_solid(dir.path(), "tiny.png", 5, 5, [0, 0, 0]);

    let err = convert_file(&path, &RenderOptions::new(10)).unwrap_err();
    assert!(err.is_graceful());
    assert_eq!(err.to_string(), "Step too small");
    assert!(matches!(err, Error::StepTooSmall { axis: Axis::X, .. }));
}

#[test]
fn test_missing_file_is_open_error() {
    let dir = TempDir::new().unwrap();
    let err = convert_file(&dir.path().join("nope.png"), &RenderOptions::new(10)).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
    assert!(!err.is_graceful());
    assert!(err.to_string().contains("nope.png"));
}

#[test]
fn test_corrupt_file_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();

    let err = convert_file(&path, &RenderOptions::new(10)).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
