//! Autostereogram synthesis from a depth map and an optional pattern
//!
//! Synthesis runs in two stages. The tile is prepared first, either by
//! resizing the pattern to the tile width or by drawing noise. Each row of
//! the padded canvas is then propagated independently, optionally on the
//! rayon pool, and the seed columns are cropped away.

use image::{DynamicImage, RgbImage};
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::algorithm::noise::{NoiseSource, RandomNoise};
use crate::algorithm::parameters::SynthesisParams;
use crate::algorithm::propagation::propagate_row;
use crate::io::error::{Result, computation_error};
use crate::math::luminance::to_luma_image;
use crate::math::shift::ShiftTable;
use crate::spatial::canvas::{OutputCanvas, RowBuffer};
use crate::spatial::depth::{DepthMap, PaddedDepthMap};
use crate::spatial::tile::PatternTile;

/// Turns depth maps into autostereograms
///
/// Holds the parameters and the noise source used when no pattern image is
/// given. Each call builds its own tile and canvas.
#[derive(Debug, Clone)]
pub struct StereogramSynthesizer<N = RandomNoise<StdRng>> {
    params: SynthesisParams,
    noise: N,
}

impl StereogramSynthesizer {
    /// Synthesizer with noise seeded from the operating system
    pub fn new(params: SynthesisParams) -> Self {
        Self::with_noise(params, RandomNoise::from_os_rng())
    }

    /// Synthesizer with reproducible noise
    pub fn seeded(params: SynthesisParams, seed: u64) -> Self {
        Self::with_noise(params, RandomNoise::seeded(seed))
    }
}

impl<N: NoiseSource> StereogramSynthesizer<N> {
    /// Synthesizer drawing background tiles from `noise`
    pub const fn with_noise(params: SynthesisParams, noise: N) -> Self {
        Self { params, noise }
    }

    /// Parameters used for every call
    pub const fn params(&self) -> &SynthesisParams {
        &self.params
    }

    /// Build the tile for a depth map: the resized pattern, or noise as tall as the depth map
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters do not resolve for this depth map or
    /// the pattern is empty
    pub fn prepare_tile(
        &mut self,
        depth: &DepthMap,
        pattern: Option<&RgbImage>,
    ) -> Result<PatternTile> {
        let resolved = self.params.resolve(depth.width())?;
        self.build_tile(resolved.tile_width, depth.height(), pattern)
    }

    fn build_tile(
        &mut self,
        tile_width: usize,
        height: usize,
        pattern: Option<&RgbImage>,
    ) -> Result<PatternTile> {
        match pattern {
            Some(pattern) => PatternTile::from_pattern(pattern, tile_width),
            None => self
                .noise
                .noise_tile(tile_width, height, self.params.noise_mode),
        }
    }

    /// Propagate every row and return the padded canvas, seed columns included
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile width or displacement is invalid for this depth map
    /// - A supplied pattern has zero width or height
    pub fn render(&mut self, depth: &DepthMap, pattern: Option<&RgbImage>) -> Result<OutputCanvas> {
        let resolved = self.params.resolve(depth.width())?;
        let tile_width = resolved.tile_width;

        let padded = PaddedDepthMap::new(depth, tile_width, self.params.invert_depth);
        let tile = self.build_tile(tile_width, padded.height(), pattern)?;
        let shifts = ShiftTable::new(resolved.depth_factor);

        let resolve_row = |y: usize| -> Result<RowBuffer> {
            let depth_row = padded
                .row(y)
                .ok_or_else(|| computation_error("shift propagation", &format!("no row {y}")))?;
            propagate_row(y, depth_row, &tile, &shifts, tile_width)
        };

        let rows = if self.params.parallel {
            (0..padded.height())
                .into_par_iter()
                .map(resolve_row)
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..padded.height())
                .map(resolve_row)
                .collect::<Result<Vec<_>>>()?
        };

        OutputCanvas::from_rows(&rows, tile_width)
    }

    /// Synthesize the final image, same size as the depth map
    ///
    /// Returns an RGB image, or a single-channel luminance image when
    /// grayscale output is requested.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile width or displacement is invalid for this depth map
    /// - A supplied pattern has zero width or height
    pub fn synthesize(
        &mut self,
        depth: &DepthMap,
        pattern: Option<&RgbImage>,
    ) -> Result<DynamicImage> {
        let image = self.render(depth, pattern)?.crop()?;

        Ok(if self.params.grayscale_output {
            DynamicImage::ImageLuma8(to_luma_image(&image))
        } else {
            DynamicImage::ImageRgb8(image)
        })
    }
}

/// One-shot synthesis with fresh random noise
///
/// # Errors
///
/// Returns an error if the parameters are invalid for `depth` or the pattern is empty
pub fn synthesize(
    depth: &DepthMap,
    pattern: Option<&RgbImage>,
    params: SynthesisParams,
) -> Result<DynamicImage> {
    StereogramSynthesizer::new(params).synthesize(depth, pattern)
}
