//! Tests for the fetch-synthesize-store operation

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, RgbaImage, Rgba};
    use stereotile::algorithm::invocation::{StereogramRequest, invoke};
    use stereotile::algorithm::noise::{RandomNoise, SolidNoise};
    use stereotile::io::store::MemoryStore;
    use stereotile::{StereogramError, SynthesisParams};

    fn depth_store(width: u32, height: u32) -> (MemoryStore, String) {
        let mut source = MemoryStore::new();
        let depth = GrayImage::from_fn(width, height, |x, _| Luma([(x * 5 % 256) as u8]));
        let id = source.insert(DynamicImage::ImageLuma8(depth));
        (source, id)
    }

    fn rejected_parameter(error: StereogramError) -> &'static str {
        match error {
            StereogramError::InvalidParameter { parameter, .. } => parameter,
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // The result lands in the sink with the depth map's size
    #[test]
    fn test_stores_result() {
        let (source, depth_id) = depth_store(48, 12);
        let mut sink = MemoryStore::new();
        let request = StereogramRequest::new(depth_id, SynthesisParams::advanced(24, 12));

        let stored = invoke(&source, &mut sink, &request, RandomNoise::seeded(1)).unwrap();

        assert_eq!((stored.width, stored.height), (48, 12));
        let image = sink.get(&stored.image_id).unwrap();
        assert_eq!((image.width(), image.height()), (48, 12));
        assert_eq!(sink.len(), 1);
    }

    // A missing depth map is reported as an invalid parameter
    #[test]
    fn test_missing_depth_map() {
        let source = MemoryStore::new();
        let mut sink = MemoryStore::new();
        let request = StereogramRequest::new("absent", SynthesisParams::default());

        let error = invoke(&source, &mut sink, &request, RandomNoise::seeded(0)).unwrap_err();

        assert_eq!(rejected_parameter(error), "depth_map");
        assert!(sink.is_empty());
    }

    // A missing pattern is reported under its own name
    #[test]
    fn test_missing_pattern() {
        let (source, depth_id) = depth_store(60, 8);
        let mut sink = MemoryStore::new();
        let request =
            StereogramRequest::new(depth_id, SynthesisParams::advanced(30, 10)).with_pattern("gone");

        let error = invoke(&source, &mut sink, &request, RandomNoise::seeded(0)).unwrap_err();

        assert_eq!(rejected_parameter(error), "pattern");
    }

    // Color depth maps are reduced to luminance before use
    #[test]
    fn test_color_depth_map_is_accepted() {
        let mut source = MemoryStore::new();
        let depth_id = source.insert(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            40,
            6,
            Rgba([90, 90, 90, 255]),
        )));
        let mut sink = MemoryStore::new();
        let request = StereogramRequest::new(depth_id, SynthesisParams::advanced(20, 10));

        let stored = invoke(&source, &mut sink, &request, RandomNoise::seeded(2)).unwrap();

        assert_eq!((stored.width, stored.height), (40, 6));
    }

    // A solid pattern gives a solid stereogram
    #[test]
    fn test_solid_pattern() {
        let (mut source, depth_id) = depth_store(64, 10);
        let pattern_id = source.insert(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            7,
            7,
            Rgb([12, 34, 56]),
        )));
        let mut sink = MemoryStore::new();
        let request = StereogramRequest::new(depth_id, SynthesisParams::advanced(32, 16))
            .with_pattern(pattern_id);

        let stored = invoke(&source, &mut sink, &request, SolidNoise { color: [0, 0, 0] }).unwrap();

        let image = sink.get(&stored.image_id).unwrap().to_rgb8();
        assert!(image.pixels().all(|p| p.0 == [12, 34, 56]));
    }

    // Parameter errors pass through unchanged
    #[test]
    fn test_invalid_parameters_surface() {
        let (source, depth_id) = depth_store(30, 4);
        let mut sink = MemoryStore::new();
        let request = StereogramRequest::new(depth_id, SynthesisParams::divisions(1));

        let error = invoke(&source, &mut sink, &request, RandomNoise::seeded(0)).unwrap_err();

        assert_eq!(rejected_parameter(error), "pattern_divisions");
    }
}
