//! Numeric helpers for depth quantization and luminance

/// RGB to luminance conversion
pub mod luminance;
/// Depth to displacement lookup
pub mod shift;
