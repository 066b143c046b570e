//! Synthesis parameters and their resolution against a concrete depth map
//!
//! Three historical parameterizations describe the same algorithm. They differ
//! only in how the tile width is chosen and in whether the maximum displacement
//! is given in pixels or derived from the tile width.

use std::fmt;

use crate::io::configuration::{
    DEFAULT_DEPTH_STEPS, DEFAULT_TILE_WIDTH, MIN_PATTERN_DIVISIONS, PROPORTIONAL_DEPTH_RATIO,
};
use crate::io::error::{Result, invalid_parameter};

/// How the tile width is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileWidthSpec {
    /// Tile width in pixels
    Explicit(u32),
    /// Tile width is `floor(depth_width / n)`
    Divisions(u32),
    /// Eye separation in pixels, the legacy name for the tile width
    LegacySeparation(u32),
}

impl TileWidthSpec {
    /// Parameter name used in error messages
    pub const fn parameter_name(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "tile_width",
            Self::Divisions(_) => "pattern_divisions",
            Self::LegacySeparation(_) => "separation",
        }
    }

    /// Tile width for a depth map `depth_width` pixels wide
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - An explicit width or separation is zero or wider than `depth_width`
    /// - Divisions is below 2 or not smaller than `depth_width`
    pub fn resolve(&self, depth_width: usize) -> Result<usize> {
        let tile_width = match *self {
            Self::Explicit(width) | Self::LegacySeparation(width) => width as usize,
            Self::Divisions(divisions) => {
                if divisions < MIN_PATTERN_DIVISIONS {
                    return Err(invalid_parameter(
                        self.parameter_name(),
                        &divisions,
                        &format!("must be at least {MIN_PATTERN_DIVISIONS}"),
                    ));
                }
                if divisions as usize >= depth_width {
                    return Err(invalid_parameter(
                        self.parameter_name(),
                        &divisions,
                        &format!("must be smaller than the depth map width {depth_width}"),
                    ));
                }
                depth_width / divisions as usize
            }
        };

        if tile_width < 1 {
            return Err(invalid_parameter(
                self.parameter_name(),
                &self.value(),
                &"tile width must be at least 1 pixel",
            ));
        }
        if tile_width > depth_width {
            return Err(invalid_parameter(
                self.parameter_name(),
                &self.value(),
                &format!("tile width must not exceed the depth map width {depth_width}"),
            ));
        }
        Ok(tile_width)
    }

    const fn value(&self) -> u32 {
        match *self {
            Self::Explicit(v) | Self::Divisions(v) | Self::LegacySeparation(v) => v,
        }
    }
}

/// How the maximum horizontal displacement is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepthScale {
    /// Displacement in pixels at depth 255
    Steps(u32),
    /// Displacement at depth 255 is `tile_width * 0.4`
    Proportional,
}

impl DepthScale {
    /// Maximum displacement in pixels for a given tile width
    pub fn factor(&self, tile_width: usize) -> f64 {
        match *self {
            Self::Steps(steps) => f64::from(steps),
            Self::Proportional => tile_width as f64 * PROPORTIONAL_DEPTH_RATIO,
        }
    }
}

/// Channel layout of generated noise tiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoiseMode {
    /// Independent random red, green and blue per pixel
    #[default]
    Color,
    /// One random value per pixel, copied to all three channels
    Monochrome,
}

impl fmt::Display for NoiseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => write!(f, "color"),
            Self::Monochrome => write!(f, "monochrome"),
        }
    }
}

/// Full parameter set for one synthesis call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParams {
    /// Tile width selection
    pub tile_width: TileWidthSpec,
    /// Maximum displacement selection
    pub depth_scale: DepthScale,
    /// Read depth as `255 - value`
    pub invert_depth: bool,
    /// Convert the result to single-channel luminance
    pub grayscale_output: bool,
    /// Layout of random tiles when no pattern is supplied
    pub noise_mode: NoiseMode,
    /// Propagate rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self::advanced(DEFAULT_TILE_WIDTH, DEFAULT_DEPTH_STEPS)
    }
}

impl SynthesisParams {
    /// Explicit tile width and depth steps
    pub const fn advanced(tile_width: u32, depth_steps: u32) -> Self {
        Self::with_modes(
            TileWidthSpec::Explicit(tile_width),
            DepthScale::Steps(depth_steps),
        )
    }

    /// Tile width from a division count, displacement proportional to it
    pub const fn divisions(pattern_divisions: u32) -> Self {
        Self::with_modes(
            TileWidthSpec::Divisions(pattern_divisions),
            DepthScale::Proportional,
        )
    }

    /// Legacy eye separation with a depth step count
    pub const fn separation(separation: u32, depth: u32) -> Self {
        Self::with_modes(
            TileWidthSpec::LegacySeparation(separation),
            DepthScale::Steps(depth),
        )
    }

    /// Any combination of tile width and depth scale
    pub const fn with_modes(tile_width: TileWidthSpec, depth_scale: DepthScale) -> Self {
        Self {
            tile_width,
            depth_scale,
            invert_depth: false,
            grayscale_output: false,
            noise_mode: NoiseMode::Color,
            parallel: true,
        }
    }

    /// Override the depth scale with an explicit step count
    #[must_use]
    pub const fn with_depth_steps(mut self, depth_steps: u32) -> Self {
        self.depth_scale = DepthScale::Steps(depth_steps);
        self
    }

    /// Set depth inversion
    #[must_use]
    pub const fn with_invert_depth(mut self, invert_depth: bool) -> Self {
        self.invert_depth = invert_depth;
        self
    }

    /// Set grayscale output
    #[must_use]
    pub const fn with_grayscale_output(mut self, grayscale_output: bool) -> Self {
        self.grayscale_output = grayscale_output;
        self
    }

    /// Set the noise layout
    #[must_use]
    pub const fn with_noise_mode(mut self, noise_mode: NoiseMode) -> Self {
        self.noise_mode = noise_mode;
        self
    }

    /// Enable or disable row parallelism
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Resolve tile width and displacement for a depth map `depth_width` pixels wide
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - The tile width resolves to less than one pixel
    /// - The rounded maximum displacement reaches the tile width, which would
    ///   make a column sample itself or a column to its right
    pub fn resolve(&self, depth_width: usize) -> Result<ResolvedParams> {
        let tile_width = self.tile_width.resolve(depth_width)?;
        let depth_factor = self.depth_scale.factor(tile_width);

        if depth_factor.round() >= tile_width as f64 {
            return Err(invalid_parameter(
                "depth_steps",
                &depth_factor,
                &format!("must round to less than the tile width {tile_width}"),
            ));
        }

        Ok(ResolvedParams {
            tile_width,
            depth_factor,
        })
    }
}

/// Parameters resolved against a concrete depth map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParams {
    /// Tile width in pixels, also the seed region width
    pub tile_width: usize,
    /// Displacement in pixels at depth 255
    pub depth_factor: f64,
}
