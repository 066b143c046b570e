//! Tests for pattern tile construction, resizing and wraparound sampling

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use ndarray::Array3;
    use stereotile::StereogramError;
    use stereotile::spatial::tile::PatternTile;

    fn gradient_tile(width: usize, height: usize) -> PatternTile {
        PatternTile::from_fn(width, height, |x, y| [x as u8, y as u8, 7]).unwrap()
    }

    // Tiles need pixels and exactly three channels
    #[test]
    fn test_from_pixels_validation() {
        assert!(PatternTile::from_pixels(Array3::zeros((2, 2, 3))).is_ok());
        assert!(matches!(
            PatternTile::from_pixels(Array3::zeros((2, 2, 4))),
            Err(StereogramError::InvalidDimensions { .. })
        ));
        assert!(PatternTile::from_pixels(Array3::zeros((0, 2, 3))).is_err());
        assert!(PatternTile::solid(3, 0, [1, 2, 3]).is_err());
    }

    // Sampling wraps both coordinates
    #[test]
    fn test_sample_wraps() {
        let tile = gradient_tile(4, 3);

        assert_eq!(tile.width(), 4);
        assert_eq!(tile.height(), 3);
        assert_eq!(tile.sample(1, 2), [1, 2, 7]);
        assert_eq!(tile.sample(5, 2), [1, 2, 7]);
        assert_eq!(tile.sample(9, 7), [1, 1, 7]);
    }

    // Resizing keeps the aspect ratio and rounds the height
    #[test]
    fn test_from_pattern_aspect_ratio() {
        let wide = RgbImage::from_pixel(40, 20, Rgb([1, 2, 3]));
        let tile = PatternTile::from_pattern(&wide, 10).unwrap();
        assert_eq!((tile.width(), tile.height()), (10, 5));

        // 10 * 20 / 30 = 6.67
        let uneven = RgbImage::from_pixel(30, 20, Rgb([1, 2, 3]));
        let tile = PatternTile::from_pattern(&uneven, 10).unwrap();
        assert_eq!((tile.width(), tile.height()), (10, 7));

        // Very wide patterns still keep one row
        let strip = RgbImage::from_pixel(500, 1, Rgb([1, 2, 3]));
        let tile = PatternTile::from_pattern(&strip, 10).unwrap();
        assert_eq!(tile.height(), 1);
    }

    // A uniform pattern stays uniform after resizing
    #[test]
    fn test_from_pattern_uniform_color() {
        let pattern = RgbImage::from_pixel(17, 9, Rgb([10, 20, 30]));
        let tile = PatternTile::from_pattern(&pattern, 25).unwrap();

        for y in 0..tile.height() {
            for x in 0..tile.width() {
                assert_eq!(tile.sample(x, y), [10, 20, 30]);
            }
        }
    }

    // Empty patterns and zero tile widths are rejected with distinct errors
    #[test]
    fn test_from_pattern_errors() {
        let empty = RgbImage::new(0, 4);
        assert!(matches!(
            PatternTile::from_pattern(&empty, 10),
            Err(StereogramError::InvalidDimensions {
                subject: "pattern",
                ..
            })
        ));

        let pattern = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        assert!(matches!(
            PatternTile::from_pattern(&pattern, 0),
            Err(StereogramError::InvalidParameter {
                parameter: "tile_width",
                ..
            })
        ));
    }
}
