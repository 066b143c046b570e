//! Horizontal shift propagation within a single canvas row
//!
//! Columns left of the tile width copy the tile. Every later column copies
//! the pixel `tile_width - shift` columns to its left, where the shift grows
//! with the effective depth at that column. Because the shift is always
//! smaller than the tile width, the source column has already been resolved.

use ndarray::ArrayView1;

use crate::io::error::{Result, computation_error};
use crate::math::shift::ShiftTable;
use crate::spatial::canvas::RowBuffer;
use crate::spatial::tile::PatternTile;

/// Resolve canvas row `y` from its effective depth row
///
/// # Errors
///
/// Returns a computation error if a column's source lies at or beyond the
/// column itself, which only happens when `shifts` allows a displacement of
/// `tile_width` or more
pub fn propagate_row(
    y: usize,
    depth_row: ArrayView1<'_, u8>,
    tile: &PatternTile,
    shifts: &ShiftTable,
    tile_width: usize,
) -> Result<RowBuffer> {
    let mut row = RowBuffer::with_capacity(depth_row.len());

    for (x, &depth) in depth_row.iter().enumerate() {
        let pixel = if x < tile_width {
            tile.sample(x, y)
        } else {
            let source_x = x - tile_width + shifts.shift(depth);
            row.resolved(source_x).ok_or_else(|| {
                computation_error(
                    "shift propagation",
                    &format!("column {x} of row {y} samples unresolved column {source_x}"),
                )
            })?
        };
        row.push(pixel);
    }

    Ok(row)
}
