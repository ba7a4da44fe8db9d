//! Glyph grid assembly and output.
//!
//! Builds the full [`Canvas`] before anything is written, so a failure
//! part way through conversion never leaves partial art on stdout.

use std::io::Write;

use crate::ascii::{aggregate, ChunkColor, Partition, Ramp};
use crate::source::PixelSource;

/// One output glyph and the color it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Option<ChunkColor>,
}

/// Row-major grid of cells, `columns` wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    columns: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Sample every chunk of `source` described by the two partitions.
    ///
    /// Chunks are visited row by row, left to right.
    pub fn build<S: PixelSource + ?Sized>(
        source: &S,
        xs: &Partition,
        ys: &Partition,
        ramp: Ramp,
        color: bool,
    ) -> Self {
        let mut cells = Vec::with_capacity(xs.len() * ys.len());
        for iy in 0..ys.len() {
            for ix in 0..xs.len() {
                let agg = aggregate(xs.bounds(), ys.bounds(), ix, iy, source, color);
                cells.push(Cell {
                    glyph: ramp.glyph(agg.luma),
                    color: agg.color,
                });
            }
        }
        log::debug!("Sampled {}x{} chunks", xs.len(), ys.len());
        Self {
            columns: xs.len(),
            cells,
        }
    }

    /// Build directly from cells. Returns `None` if `columns` is zero.
    pub fn from_cells(columns: usize, cells: Vec<Cell>) -> Option<Self> {
        (columns > 0).then_some(Self { columns, cells })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.cells.len().div_ceil(self.columns)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Render to a string.
    ///
    /// A line break precedes every row (so the text starts with one) and a
    /// final line break follows the last glyph. Colored cells are wrapped in
    /// a 24-bit foreground escape and reset after each glyph.
    pub fn to_text(&self, color: bool) -> String {
        let per_cell = if color { 24 } else { 1 };
        let mut output = String::with_capacity(self.cells.len() * per_cell + self.rows() + 1);
        for (i, cell) in self.cells.iter().enumerate() {
            if i % self.columns == 0 {
                output.push('\n');
            }
            match cell.color {
                Some(c) if color => {
                    output.push_str(&format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b));
                    output.push(cell.glyph);
                    output.push_str("\x1b[0m");
                }
                _ => output.push(cell.glyph),
            }
        }
        output.push('\n');
        output
    }

    /// Write the rendered text and flush.
    pub fn write_to<W: Write>(&self, out: &mut W, color: bool) -> std::io::Result<()> {
        out.write_all(self.to_text(color).as_bytes())?;
        out.flush()
    }
}
