//! Even partitioning of a pixel extent into chunk boundaries.

use crate::error::Error;

/// Split `max` pixels into `count` contiguous steps as evenly as possible.
///
/// Returns the cumulative end offset of every step, so the last element is
/// `max` and step `i` spans `[out[i - 1], out[i])` (with `out[-1] = 0`).
/// Step lengths take at most two values, `max / count` and one more than
/// that, and the longer steps are spread through the sequence rather than
/// bunched at one end.
///
/// When `max < count` some steps have length zero. That is still a valid
/// result here; [`Partition::new`] is the checked entry point.
///
/// # Panics
/// Panics if `count` is zero.
///
/// # Example
/// ```
/// use asciify::ascii::partition;
/// assert_eq!(partition(10, 3), vec![3, 7, 10]);
/// assert_eq!(partition(10, 5), vec![2, 4, 6, 8, 10]);
/// ```
pub fn partition(max: u32, count: u32) -> Vec<u32> {
    assert!(count > 0, "partition count must be positive");

    let small_step = max / count;
    let big_step = small_step + 1;
    let big_count = max - small_step * count;
    let small_count = count - big_count;

    let mut steps = Vec::with_capacity(count as usize);
    let mut sum = 0u32;

    if big_count == 0 {
        for _ in 0..count {
            sum += small_step;
            steps.push(sum);
        }
        return steps;
    }

    // Both position tables end in a 1.0 sentinel that is only compared
    // against, never consumed: `count` emissions exhaust exactly
    // `small_count + big_count` real positions.
    let small_positions = spacing(small_count);
    let big_positions = spacing(big_count);
    let mut small_idx = 0usize;
    let mut big_idx = 0usize;

    for _ in 0..count {
        // Ties go to the small step.
        if small_positions[small_idx] <= big_positions[big_idx] {
            sum += small_step;
            small_idx += 1;
        } else {
            sum += big_step;
            big_idx += 1;
        }
        steps.push(sum);
    }

    steps
}

/// `n + 1` single-precision positions evenly spaced over `[0, 1]`.
fn spacing(n: u32) -> Vec<f32> {
    (0..=n).map(|i| i as f32 / n as f32).collect()
}

/// Image axis a partition was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Validated chunk boundaries along one axis.
///
/// Every step is at least one pixel long, so chunk areas derived from a
/// `Partition` are never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    bounds: Vec<u32>,
}

impl Partition {
    /// Partition `extent` pixels into `count` chunks.
    ///
    /// Returns [`Error::StepTooSmall`] when there are fewer pixels than
    /// chunks (or no chunks at all).
    pub fn new(axis: Axis, extent: u32, count: u32) -> Result<Self, Error> {
        if count == 0 || extent < count {
            return Err(Error::StepTooSmall {
                axis,
                extent,
                count,
            });
        }
        Ok(Self {
            bounds: partition(extent, count),
        })
    }

    /// Number of chunks along this axis.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Never true for a partition built by [`Partition::new`].
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Cumulative end offsets.
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }

    /// Pixel range `[start, end)` covered by chunk `index`.
    pub fn span(&self, index: usize) -> std::ops::Range<u32> {
        span(&self.bounds, index)
    }
}

/// Pixel range of step `index` within cumulative `bounds`.
pub(crate) fn span(bounds: &[u32], index: usize) -> std::ops::Range<u32> {
    let start = if index > 0 { bounds[index - 1] } else { 0 };
    start..bounds[index]
}
