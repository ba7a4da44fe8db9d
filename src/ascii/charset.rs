//! Glyph ramp and luma-to-glyph mapping.

/// Glyph ramp (19 levels).
/// Characters ordered from densest (`W`) to lightest (space).
/// Works well on light backgrounds.
pub const GLYPH_RAMP: [char; 19] = [
    'W', 'M', 'N', 'X', 'K', 'O', '0', 'd', 'k', 'x', 'o', 'c', 'l', ';', ':', '\'', ',', '.', ' ',
];

/// [`GLYPH_RAMP`] reversed, lightest first. Works well on dark backgrounds.
pub const INVERTED_GLYPH_RAMP: [char; 19] = reverse(GLYPH_RAMP);

/// Returned if no bucket matches. Unreachable for luma in 0-255.
pub const FALLBACK_GLYPH: char = '+';

const fn reverse(ramp: [char; 19]) -> [char; 19] {
    let mut out = ramp;
    let mut i = 0;
    while i < ramp.len() {
        out[i] = ramp[ramp.len() - 1 - i];
        i += 1;
    }
    out
}

/// Direction the glyph ramp is traversed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ramp {
    /// Dense glyphs for dark chunks
    #[default]
    Standard,
    /// Light glyphs for dark chunks
    Inverted,
}

impl Ramp {
    /// Pick the ramp for an `--invert` flag.
    pub fn from_invert(invert: bool) -> Self {
        if invert {
            Ramp::Inverted
        } else {
            Ramp::Standard
        }
    }

    /// Glyphs in lookup order.
    pub fn glyphs(&self) -> &'static [char; 19] {
        match self {
            Ramp::Standard => &GLYPH_RAMP,
            Ramp::Inverted => &INVERTED_GLYPH_RAMP,
        }
    }

    /// The other direction.
    pub fn flipped(&self) -> Self {
        match self {
            Ramp::Standard => Ramp::Inverted,
            Ramp::Inverted => Ramp::Standard,
        }
    }

    /// Map a luma value to a glyph.
    ///
    /// The 0-255 range is split into 19 buckets of width 255/19; `luma`
    /// falls into the first bucket whose upper edge is at or above it.
    pub fn glyph(&self, luma: u8) -> char {
        match bucket(luma) {
            Some(i) => self.glyphs()[i],
            None => FALLBACK_GLYPH,
        }
    }
}

/// Index of the first bucket `i` with `(255 / 19) * (i + 1) >= luma`,
/// computed in single precision.
pub fn bucket(luma: u8) -> Option<usize> {
    let levels = GLYPH_RAMP.len();
    let width = 255.0f32 / levels as f32;
    (0..levels).find(|&i| width * (i + 1) as f32 >= luma as f32)
}

/// Map a luma value to a glyph, reversing the ramp when `inverted`.
pub fn to_glyph(luma: u8, inverted: bool) -> char {
    Ramp::from_invert(inverted).glyph(luma)
}
