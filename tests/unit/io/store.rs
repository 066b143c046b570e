//! Tests for image sources and sinks

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
    use stereotile::StereogramError;
    use stereotile::io::image::save_image;
    use stereotile::io::store::{
        ColorMode, FileSink, FileSystemSource, ImageSink, ImageSource, MemoryStore,
    };
    use tempfile::TempDir;

    fn gray(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
    }

    // Generated ids are unique and sequential
    #[test]
    fn test_memory_store_ids() {
        let mut store = MemoryStore::new();
        let first = store.insert(gray(1, 1, 0));
        let second = store.insert(gray(1, 1, 0));

        assert_eq!(first, "image-0");
        assert_eq!(second, "image-1");
        assert_eq!(store.len(), 2);
    }

    // Fetching converts to the requested layout
    #[test]
    fn test_memory_store_fetch_converts() {
        let mut store = MemoryStore::new();
        store.insert_named("depth", gray(2, 2, 99));

        let image = store.fetch("depth", ColorMode::Rgb).unwrap();
        assert_eq!(image.to_rgb8().get_pixel(1, 1).0, [99, 99, 99]);
        assert!(matches!(image, DynamicImage::ImageRgb8(_)));
    }

    // Unknown ids are reported as not found
    #[test]
    fn test_memory_store_missing() {
        let store = MemoryStore::new();

        assert!(matches!(
            store.fetch("nothing", ColorMode::Luma),
            Err(StereogramError::ImageNotFound { .. })
        ));
    }

    // Storing reports the new id and size
    #[test]
    fn test_memory_store_sink() {
        let mut store = MemoryStore::new();
        let stored = store.store(&gray(6, 4, 1)).unwrap();

        assert_eq!((stored.width, stored.height), (6, 4));
        assert!(store.get(&stored.image_id).is_some());
    }

    // File ids resolve against the root directory
    #[test]
    fn test_file_source() {
        let temp_dir = TempDir::new().unwrap();
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([0, 0, 255])));
        save_image(&image, &temp_dir.path().join("depth.png")).unwrap();

        let source = FileSystemSource::new(temp_dir.path());
        let fetched = source.fetch("depth.png", ColorMode::Luma).unwrap();

        assert_eq!(fetched.to_luma8().get_pixel(0, 0).0, [29]);
        assert!(matches!(
            source.fetch("missing.png", ColorMode::Luma),
            Err(StereogramError::ImageNotFound { .. })
        ));
    }

    // The file sink writes to its fixed path and uses it as id
    #[test]
    fn test_file_sink() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("result.png");
        let mut sink = FileSink::new(&path);

        let stored = sink.store(&gray(5, 5, 200)).unwrap();

        assert!(path.is_file());
        assert_eq!(sink.path(), path.as_path());
        assert_eq!(stored.image_id, path.display().to_string());
    }
}
