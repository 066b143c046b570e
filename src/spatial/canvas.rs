//! Append-only row buffers and the padded output canvas

use image::RgbImage;
use ndarray::{Array3, s};

use crate::io::error::{Result, computation_error, invalid_dimensions};

/// One canvas row, filled strictly left to right
///
/// A column can only be read once it has been pushed, so every lookup made
/// while building the row sees pixels at smaller columns only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowBuffer {
    pixels: Vec<[u8; 3]>,
}

impl RowBuffer {
    /// Empty row with room for `width` pixels
    pub fn with_capacity(width: usize) -> Self {
        Self {
            pixels: Vec::with_capacity(width),
        }
    }

    /// Number of resolved columns
    pub const fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether no column has been resolved yet
    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Resolve the next column
    pub fn push(&mut self, pixel: [u8; 3]) {
        self.pixels.push(pixel);
    }

    /// Pixel at an already resolved column
    pub fn resolved(&self, x: usize) -> Option<[u8; 3]> {
        self.pixels.get(x).copied()
    }

    /// All resolved pixels in column order
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }
}

/// Padded canvas: seed columns followed by propagated columns
#[derive(Debug, Clone)]
pub struct OutputCanvas {
    pixels: Array3<u8>,
    seed_width: usize,
}

impl OutputCanvas {
    /// Assemble completed rows into a canvas
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no rows or the rows are empty
    /// - The rows have different widths
    pub fn from_rows(rows: &[RowBuffer], seed_width: usize) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, RowBuffer::len);
        if width == 0 || height == 0 {
            return Err(invalid_dimensions("canvas", width, height));
        }
        if let Some(ragged) = rows.iter().find(|row| row.len() != width) {
            return Err(computation_error(
                "canvas assembly",
                &format!("row of width {} in a canvas of width {width}", ragged.len()),
            ));
        }

        let data: Vec<u8> = rows
            .iter()
            .flat_map(|row| row.pixels().iter().flatten().copied())
            .collect();
        let pixels = Array3::from_shape_vec((height, width, 3), data)
            .map_err(|e| computation_error("canvas assembly", &e))?;

        Ok(Self { pixels, seed_width })
    }

    /// Padded width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Number of leading seed columns
    pub const fn seed_width(&self) -> usize {
        self.seed_width
    }

    /// Pixel at padded column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        let channel = |c: usize| self.pixels.get((y, x, c)).copied();
        Some([channel(0)?, channel(1)?, channel(2)?])
    }

    /// Drop the seed columns and return the visible image
    ///
    /// # Errors
    ///
    /// Returns an error if no columns remain after the seed region or the
    /// dimensions do not fit an image
    pub fn crop(&self) -> Result<RgbImage> {
        let visible_width = self.width().saturating_sub(self.seed_width);
        if visible_width == 0 {
            return Err(invalid_dimensions("cropped canvas", 0, self.height()));
        }

        let visible = self.pixels.slice(s![.., self.seed_width.., ..]);
        let data: Vec<u8> = visible.iter().copied().collect();

        let width = u32::try_from(visible_width)
            .map_err(|e| computation_error("canvas crop", &e))?;
        let height = u32::try_from(self.height())
            .map_err(|e| computation_error("canvas crop", &e))?;

        RgbImage::from_raw(width, height, data)
            .ok_or_else(|| computation_error("canvas crop", &"pixel buffer size mismatch"))
    }
}
