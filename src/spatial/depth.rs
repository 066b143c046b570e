//! Depth map storage and left padding for the seed region

use image::GrayImage;
use ndarray::{Array2, ArrayView1, ArrayView2, s};

use crate::io::configuration::MAX_DEPTH_VALUE;
use crate::io::error::{Result, computation_error, invalid_dimensions};

/// Grayscale depth values indexed by (`row`, `col`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthMap {
    values: Array2<u8>,
}

impl DepthMap {
    /// Wrap a depth array
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the array has no rows or no columns
    pub fn new(values: Array2<u8>) -> Result<Self> {
        let (height, width) = values.dim();
        if width == 0 || height == 0 {
            return Err(invalid_dimensions("depth map", width, height));
        }
        Ok(Self { values })
    }

    /// Build a depth map by evaluating `depth(x, y)` for every pixel
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `width` or `height` is zero
    pub fn from_fn(
        width: usize,
        height: usize,
        mut depth: impl FnMut(usize, usize) -> u8,
    ) -> Result<Self> {
        Self::new(Array2::from_shape_fn((height, width), |(y, x)| depth(x, y)))
    }

    /// Build a depth map of constant depth
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `width` or `height` is zero
    pub fn uniform(width: usize, height: usize, depth: u8) -> Result<Self> {
        Self::new(Array2::from_elem((height, width), depth))
    }

    /// Copy a single-channel image into a depth map
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the image is empty
    pub fn from_luma(image: &GrayImage) -> Result<Self> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        if width == 0 || height == 0 {
            return Err(invalid_dimensions("depth map", width, height));
        }
        let values = Array2::from_shape_vec((height, width), image.as_raw().clone())
            .map_err(|e| computation_error("depth map conversion", &e))?;
        Self::new(values)
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.values.nrows()
    }

    /// Depth at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.values.get((y, x)).copied()
    }

    /// Read-only view of the raw values
    pub fn values(&self) -> ArrayView2<'_, u8> {
        self.values.view()
    }

    /// Depth map with every value replaced by `255 - value`
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            values: self.values.mapv(|v| MAX_DEPTH_VALUE - v),
        }
    }
}

/// Effective depth with `padding` zero-depth columns prepended
///
/// Inversion is applied after padding, so padded columns read as 255 when
/// inverted. Those columns belong to the seed region and are never sampled.
#[derive(Debug, Clone)]
pub struct PaddedDepthMap {
    effective: Array2<u8>,
    padding: usize,
}

impl PaddedDepthMap {
    /// Pad `depth` on the left and resolve inversion
    pub fn new(depth: &DepthMap, padding: usize, invert: bool) -> Self {
        let mut effective = Array2::zeros((depth.height(), depth.width() + padding));
        effective
            .slice_mut(s![.., padding..])
            .assign(&depth.values);

        if invert {
            effective.mapv_inplace(|v| MAX_DEPTH_VALUE - v);
        }

        Self { effective, padding }
    }

    /// Padded width in pixels
    pub fn width(&self) -> usize {
        self.effective.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.effective.nrows()
    }

    /// Number of prepended columns
    pub const fn padding(&self) -> usize {
        self.padding
    }

    /// Effective depth of row `y`, or `None` past the last row
    pub fn row(&self, y: usize) -> Option<ArrayView1<'_, u8>> {
        (y < self.height()).then(|| self.effective.row(y))
    }
}
