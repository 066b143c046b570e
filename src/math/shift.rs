//! Depth to horizontal displacement quantization

use crate::io::configuration::MAX_DEPTH_VALUE;

const LEVELS: usize = MAX_DEPTH_VALUE as usize + 1;

/// Precomputed displacement for every effective depth value
///
/// Maps depth `d` to `round(d / 255 * depth_factor)`, so depth 0 never
/// shifts and depth 255 shifts by the rounded factor.
#[derive(Debug, Clone)]
pub struct ShiftTable {
    shifts: [usize; LEVELS],
}

impl ShiftTable {
    /// Build the table for a maximum displacement of `depth_factor` pixels
    ///
    /// Negative or non-finite factors are treated as zero.
    pub fn new(depth_factor: f64) -> Self {
        let factor = if depth_factor.is_finite() {
            depth_factor.max(0.0)
        } else {
            0.0
        };

        let mut shifts = [0; LEVELS];
        for (depth, shift) in shifts.iter_mut().enumerate() {
            *shift = (depth as f64 / f64::from(MAX_DEPTH_VALUE) * factor).round() as usize;
        }

        Self { shifts }
    }

    /// Displacement for an effective depth value
    pub fn shift(&self, depth: u8) -> usize {
        self.shifts.get(usize::from(depth)).copied().unwrap_or(0)
    }

    /// Displacement of the deepest value
    pub fn max_shift(&self) -> usize {
        self.shift(MAX_DEPTH_VALUE)
    }
}
