//! Tests for random and solid background tiles

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use stereotile::algorithm::noise::{NoiseSource, RandomNoise, SolidNoise};
    use stereotile::algorithm::parameters::NoiseMode;

    // The same seed always yields the same tile
    #[test]
    fn test_seeded_noise_is_reproducible() {
        let first = RandomNoise::seeded(7)
            .noise_tile(16, 9, NoiseMode::Color)
            .unwrap();
        let second = RandomNoise::new(StdRng::seed_from_u64(7))
            .noise_tile(16, 9, NoiseMode::Color)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!((first.width(), first.height()), (16, 9));
    }

    // Different seeds give different tiles
    #[test]
    fn test_different_seeds_differ() {
        let first = RandomNoise::seeded(1)
            .noise_tile(16, 16, NoiseMode::Color)
            .unwrap();
        let second = RandomNoise::seeded(2)
            .noise_tile(16, 16, NoiseMode::Color)
            .unwrap();

        assert_ne!(first, second);
    }

    // Monochrome noise repeats one value across the channels
    #[test]
    fn test_monochrome_channels_match() {
        let tile = RandomNoise::seeded(3)
            .noise_tile(20, 20, NoiseMode::Monochrome)
            .unwrap();

        for y in 0..20 {
            for x in 0..20 {
                let [r, g, b] = tile.sample(x, y);
                assert_eq!(r, g);
                assert_eq!(g, b);
            }
        }
    }

    // Color noise draws channels independently
    #[test]
    fn test_color_channels_vary() {
        let tile = RandomNoise::seeded(4)
            .noise_tile(20, 20, NoiseMode::Color)
            .unwrap();

        let gray_pixels = (0..20)
            .flat_map(|y| (0..20).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                let [r, g, b] = tile.sample(x, y);
                r == g && g == b
            })
            .count();
        assert!(gray_pixels < 10, "{gray_pixels} of 400 pixels were gray");
    }

    // Solid noise ignores the mode and fills one color
    #[test]
    fn test_solid_noise() {
        let mut noise = SolidNoise {
            color: [10, 20, 30],
        };
        let tile = noise.noise_tile(5, 2, NoiseMode::Monochrome).unwrap();

        assert_eq!(tile.sample(4, 1), [10, 20, 30]);
    }

    // Mutable references forward to the underlying source
    #[test]
    fn test_mut_reference_forwarding() {
        let mut noise = RandomNoise::seeded(5);
        let via_reference = (&mut noise).noise_tile(3, 3, NoiseMode::Color).unwrap();
        let next = noise.noise_tile(3, 3, NoiseMode::Color).unwrap();

        // The reference advanced the same generator
        assert_ne!(via_reference, next);
    }

    // Empty tiles are rejected
    #[test]
    fn test_zero_size_noise() {
        assert!(
            RandomNoise::seeded(0)
                .noise_tile(0, 4, NoiseMode::Color)
                .is_err()
        );
    }
}
