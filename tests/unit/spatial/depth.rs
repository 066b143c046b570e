//! Tests for depth map construction and left padding

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use ndarray::Array2;
    use stereotile::StereogramError;
    use stereotile::spatial::depth::{DepthMap, PaddedDepthMap};

    // Depth maps without rows or columns are rejected
    #[test]
    fn test_rejects_empty_depth_map() {
        for (width, height) in [(0, 5), (5, 0), (0, 0)] {
            let result = DepthMap::new(Array2::zeros((height, width)));
            assert!(
                matches!(result, Err(StereogramError::InvalidDimensions { .. })),
                "{width}x{height} should be rejected"
            );
        }
        assert!(DepthMap::from_luma(&GrayImage::new(0, 3)).is_err());
    }

    // Images keep their orientation: x is the column, y is the row
    #[test]
    fn test_from_luma_orientation() {
        let mut image = GrayImage::new(4, 2);
        image.put_pixel(3, 0, Luma([200]));
        image.put_pixel(0, 1, Luma([17]));

        let depth = DepthMap::from_luma(&image).unwrap();

        assert_eq!((depth.width(), depth.height()), (4, 2));
        assert_eq!(depth.get(3, 0), Some(200));
        assert_eq!(depth.get(0, 1), Some(17));
        assert_eq!(depth.get(4, 0), None);
        assert_eq!(depth.values()[[1, 0]], 17);
    }

    // Inversion maps every value to 255 - value
    #[test]
    fn test_inverted() {
        let depth = DepthMap::from_fn(3, 1, |x, _| [0, 100, 255][x]).unwrap();
        let inverted = depth.inverted();

        assert_eq!(inverted.get(0, 0), Some(255));
        assert_eq!(inverted.get(1, 0), Some(155));
        assert_eq!(inverted.get(2, 0), Some(0));
        assert_eq!(inverted.inverted(), depth);
    }

    // Padding prepends zero-depth columns and keeps the height
    #[test]
    fn test_padding_prepends_zero_columns() {
        let depth = DepthMap::uniform(5, 3, 90).unwrap();
        let padded = PaddedDepthMap::new(&depth, 4, false);

        assert_eq!(padded.width(), 9);
        assert_eq!(padded.height(), 3);
        assert_eq!(padded.padding(), 4);

        let row = padded.row(2).unwrap();
        assert_eq!(row.to_vec(), vec![0, 0, 0, 0, 90, 90, 90, 90, 90]);
    }

    // Inversion is applied after padding
    #[test]
    fn test_padding_with_inversion() {
        let depth = DepthMap::uniform(2, 1, 55).unwrap();
        let padded = PaddedDepthMap::new(&depth, 2, true);

        assert_eq!(padded.row(0).unwrap().to_vec(), vec![255, 255, 200, 200]);
    }

    // Rows past the last one are absent
    #[test]
    fn test_row_out_of_range() {
        let depth = DepthMap::uniform(2, 2, 0).unwrap();
        let padded = PaddedDepthMap::new(&depth, 1, false);

        assert!(padded.row(1).is_some());
        assert!(padded.row(2).is_none());
    }
}
