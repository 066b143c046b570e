//! Random dot tiles used when no pattern image is supplied

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::parameters::NoiseMode;
use crate::io::error::Result;
use crate::spatial::tile::PatternTile;

/// Producer of background tiles for pattern-less synthesis
pub trait NoiseSource {
    /// Build a `width` x `height` tile in the given layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `width` or `height` is zero
    fn noise_tile(&mut self, width: usize, height: usize, mode: NoiseMode) -> Result<PatternTile>;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn noise_tile(&mut self, width: usize, height: usize, mode: NoiseMode) -> Result<PatternTile> {
        (**self).noise_tile(width, height, mode)
    }
}

/// Uniform random noise over the full `0..=255` range
///
/// Values are drawn in row-major order, red then green then blue, so a
/// seeded generator always yields the same tile.
#[derive(Debug, Clone)]
pub struct RandomNoise<R> {
    rng: R,
}

impl<R: Rng> RandomNoise<R> {
    /// Draw from an existing generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNoise<StdRng> {
    /// Deterministic noise for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Noise seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> NoiseSource for RandomNoise<R> {
    fn noise_tile(&mut self, width: usize, height: usize, mode: NoiseMode) -> Result<PatternTile> {
        let rng = &mut self.rng;
        PatternTile::from_fn(width, height, |_, _| match mode {
            NoiseMode::Color => [rng.random(), rng.random(), rng.random()],
            NoiseMode::Monochrome => {
                let value = rng.random();
                [value, value, value]
            }
        })
    }
}

/// Noise source that always returns a single-color tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidNoise {
    /// Color of every generated pixel
    pub color: [u8; 3],
}

impl NoiseSource for SolidNoise {
    fn noise_tile(&mut self, width: usize, height: usize, _mode: NoiseMode) -> Result<PatternTile> {
        PatternTile::solid(width, height, self.color)
    }
}
