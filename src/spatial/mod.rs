//! Spatial data structures for synthesis
//!
//! This module contains:
//! - Depth maps and their padded, effective form
//! - Pattern tiles with wraparound sampling
//! - Append-only rows and the output canvas

/// Append-only rows and the padded canvas
pub mod canvas;
/// Depth maps and left padding
pub mod depth;
/// Pattern tiles
pub mod tile;

pub use canvas::OutputCanvas;
pub use depth::DepthMap;
pub use tile::PatternTile;
