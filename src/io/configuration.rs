//! Synthesis constants and runtime configuration defaults

/// Largest value a depth map pixel can hold
pub const MAX_DEPTH_VALUE: u8 = u8::MAX;

// Advanced parameterization
/// Default explicit tile width in pixels
pub const DEFAULT_TILE_WIDTH: u32 = 100;
/// Default displacement in pixels for the maximum depth value
pub const DEFAULT_DEPTH_STEPS: u32 = 50;

// Divisions parameterization
/// Smallest accepted number of pattern divisions
pub const MIN_PATTERN_DIVISIONS: u32 = 2;
/// Maximum displacement as a fraction of tile width when no depth steps are given
pub const PROPORTIONAL_DEPTH_RATIO: f64 = 0.4;

// Legacy parameterization
/// Default depth steps paired with the separation form
pub const DEFAULT_SEPARATION_DEPTH: u32 = 50;

// Below these the image still renders but is hard to fuse
/// Exclusive lower bound of the recommended tile width
pub const RECOMMENDED_MIN_TILE_WIDTH: usize = 20;
/// Exclusive lower bound of the recommended depth steps
pub const RECOMMENDED_MIN_DEPTH_STEPS: f64 = 10.0;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_stereogram";
/// File extension of generated images
pub const OUTPUT_EXTENSION: &str = "png";
/// Input extensions picked up when the target is a directory
pub const INPUT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "webp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
