//! Autostereogram synthesis from grayscale depth maps
//!
//! A pattern tile, either a resized image or random dots, is copied into a
//! seed region and then propagated to the right. Each column copies a pixel
//! one tile width back, moved closer by an amount that grows with the depth
//! at that column. Viewed with diverged or crossed eyes, the repeating
//! pattern fuses into the scene described by the depth map.

#![deny(unsafe_code)]

/// Parameters, noise generation, shift propagation and the synthesizer
pub mod algorithm;
/// Collaborators, configuration, error handling and the command-line host
pub mod io;
/// Luminance conversion and depth quantization
pub mod math;
/// Depth maps, pattern tiles and the output canvas
pub mod spatial;

pub use algorithm::parameters::{DepthScale, NoiseMode, SynthesisParams, TileWidthSpec};
pub use algorithm::synthesizer::{StereogramSynthesizer, synthesize};
pub use io::error::{Result, StereogramError};
