//! Node-level operation: fetch inputs, synthesize, store the result

use tracing::{debug, warn};

use crate::algorithm::noise::NoiseSource;
use crate::algorithm::parameters::SynthesisParams;
use crate::algorithm::synthesizer::StereogramSynthesizer;
use crate::io::configuration::{RECOMMENDED_MIN_DEPTH_STEPS, RECOMMENDED_MIN_TILE_WIDTH};
use crate::io::error::{Result, WithParameter};
use crate::io::image::{into_luma8, into_rgb8};
use crate::io::store::{ColorMode, ImageSink, ImageSource, StoredImage};
use crate::spatial::depth::DepthMap;

/// Identifiers of the inputs plus the parameters for one stereogram
#[derive(Debug, Clone, PartialEq)]
pub struct StereogramRequest {
    /// Id of the depth map in the image source
    pub depth_map: String,
    /// Id of the pattern image; random dots when `None`
    pub pattern: Option<String>,
    /// Synthesis parameters
    pub params: SynthesisParams,
}

impl StereogramRequest {
    /// Request without a pattern image
    pub fn new(depth_map: impl Into<String>, params: SynthesisParams) -> Self {
        Self {
            depth_map: depth_map.into(),
            pattern: None,
            params,
        }
    }

    /// Use a pattern image from the same source
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// Fetch the inputs, synthesize a stereogram and store it
///
/// # Errors
///
/// Returns an error if:
/// - The depth map or pattern is missing or unreadable (`InvalidParameter`)
/// - An input cannot be converted to the required color mode
/// - Synthesis rejects the parameters or dimensions
/// - The sink fails to persist the result
pub fn invoke<S, K, N>(
    source: &S,
    sink: &mut K,
    request: &StereogramRequest,
    noise: N,
) -> Result<StoredImage>
where
    S: ImageSource + ?Sized,
    K: ImageSink + ?Sized,
    N: NoiseSource,
{
    let depth_image = source
        .fetch(&request.depth_map, ColorMode::Luma)
        .for_parameter("depth_map", &request.depth_map)?;
    let depth = DepthMap::from_luma(&into_luma8(depth_image)?)?;

    let pattern = match request.pattern.as_deref() {
        Some(pattern_id) => {
            let image = source
                .fetch(pattern_id, ColorMode::Rgb)
                .for_parameter("pattern", pattern_id)?;
            Some(into_rgb8(image)?)
        }
        None => None,
    };

    let resolved = request.params.resolve(depth.width())?;
    if resolved.tile_width <= RECOMMENDED_MIN_TILE_WIDTH {
        warn!(
            tile_width = resolved.tile_width,
            "tile width of {RECOMMENDED_MIN_TILE_WIDTH} pixels or less is hard to fuse"
        );
    }
    if resolved.depth_factor <= RECOMMENDED_MIN_DEPTH_STEPS {
        warn!(
            depth_steps = resolved.depth_factor,
            "depth steps of {RECOMMENDED_MIN_DEPTH_STEPS} or less give little visible depth"
        );
    }
    debug!(
        depth_map = %request.depth_map,
        pattern = request.pattern.as_deref().unwrap_or("<noise>"),
        width = depth.width(),
        height = depth.height(),
        tile_width = resolved.tile_width,
        depth_factor = resolved.depth_factor,
        noise_mode = %request.params.noise_mode,
        "synthesizing stereogram"
    );

    let image =
        StereogramSynthesizer::with_noise(request.params, noise).synthesize(&depth, pattern.as_ref())?;
    let stored = sink.store(&image)?;

    debug!(
        image_id = %stored.image_id,
        width = stored.width,
        height = stored.height,
        "stored stereogram"
    );
    Ok(stored)
}
