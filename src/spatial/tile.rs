//! Pattern tiles sampled with wraparound addressing

use image::RgbImage;
use image::imageops::{self, FilterType};
use ndarray::Array3;

use crate::io::error::{Result, computation_error, invalid_dimensions, invalid_parameter};

/// Immutable RGB tile indexed by (`row`, `col`, `channel`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTile {
    pixels: Array3<u8>,
}

impl PatternTile {
    /// Wrap an RGB array of shape (height, width, 3)
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the tile is empty or does not have three channels
    pub fn from_pixels(pixels: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = pixels.dim();
        if width == 0 || height == 0 || channels != 3 {
            return Err(invalid_dimensions("pattern tile", width, height));
        }
        Ok(Self { pixels })
    }

    /// Build a tile by evaluating `color(x, y)` in row-major order
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `width` or `height` is zero
    pub fn from_fn(
        width: usize,
        height: usize,
        mut color: impl FnMut(usize, usize) -> [u8; 3],
    ) -> Result<Self> {
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&color(x, y));
            }
        }

        let pixels = Array3::from_shape_vec((height, width, 3), data)
            .map_err(|e| computation_error("tile construction", &e))?;
        Self::from_pixels(pixels)
    }

    /// Build a single-color tile
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `width` or `height` is zero
    pub fn solid(width: usize, height: usize, color: [u8; 3]) -> Result<Self> {
        Self::from_fn(width, height, |_, _| color)
    }

    /// Resize a pattern image to `tile_width`, keeping its aspect ratio
    ///
    /// The tile height is `round(tile_width * height / width)`, at least one row.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pattern has zero width or height
    /// - `tile_width` is zero or does not fit an image dimension
    pub fn from_pattern(pattern: &RgbImage, tile_width: usize) -> Result<Self> {
        let (source_width, source_height) = pattern.dimensions();
        if source_width == 0 || source_height == 0 {
            return Err(invalid_dimensions(
                "pattern",
                source_width as usize,
                source_height as usize,
            ));
        }

        let width = u32::try_from(tile_width)
            .ok()
            .filter(|&w| w > 0)
            .ok_or_else(|| {
                invalid_parameter("tile_width", &tile_width, &"must be between 1 and u32::MAX")
            })?;
        let scaled_height =
            (f64::from(width) * f64::from(source_height) / f64::from(source_width)).round();
        let height = scaled_height.clamp(1.0, f64::from(u32::MAX)) as u32;

        let resized = imageops::resize(pattern, width, height, FilterType::CatmullRom);
        Self::from_fn(width as usize, height as usize, |x, y| {
            resized.get_pixel(x as u32, y as u32).0
        })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Color at (`x mod width`, `y mod height`)
    pub fn sample(&self, x: usize, y: usize) -> [u8; 3] {
        let (row, col) = (y % self.height(), x % self.width());
        let channel = |c: usize| self.pixels.get((row, col, c)).copied().unwrap_or(0);
        [channel(0), channel(1), channel(2)]
    }
}
