//! Tests for per-rhombus sampling and fill decisions

#[cfg(test)]
mod tests {
    use penrose_frames::io::configuration::{BLACK_FILL, WHITE_FILL};
    use penrose_frames::math::geometry::{Vec2, approx_eq};
    use penrose_frames::sampling::luminance::{BoundsPolicy, LuminanceFrame};
    use penrose_frames::sampling::normalizer::{Extent, PixelMapping};
    use penrose_frames::sampling::sampler::{
        Fill, SAMPLES_PER_RHOMBUS, Sampler, mean_luminance, sample_points,
    };
    use penrose_frames::tiling::pairing::rhombi_per_triangle;
    use penrose_frames::tiling::substitution::generate;
    use penrose_frames::tiling::{Triangle, TriangleColor};

    fn square() -> Triangle {
        Triangle::new(
            TriangleColor::Red,
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(-0.5, 0.5),
        )
    }

    // Tests only a mean strictly above the threshold is white
    // Verified by using >= in the comparison
    #[test]
    fn test_fill_threshold() {
        assert_eq!(Fill::from_mean(128.0, 128.0), Fill::Black);
        assert_eq!(Fill::from_mean(128.01, 128.0), Fill::White);
        assert_eq!(Fill::from_mean(0.0, 128.0), Fill::Black);
        assert_eq!(Fill::White.rgba(), WHITE_FILL);
        assert_eq!(Fill::Black.rgba(), BLACK_FILL);
    }

    // Tests the 3×3 grid with u varying slowest
    // Verified by iterating v in the outer loop
    #[test]
    fn test_sample_points() {
        let rhombus = square().rhombus();
        let points = sample_points(&rhombus);

        assert_eq!(points.len(), SAMPLES_PER_RHOMBUS);
        assert!(approx_eq(points[0], Vec2::new(-0.25, -0.25), 1e-12));
        assert!(approx_eq(points[1], Vec2::new(-0.25, 0.0), 1e-12));
        assert!(approx_eq(points[3], Vec2::new(0.0, -0.25), 1e-12));
        assert!(approx_eq(points[4], rhombus.centroid(), 1e-12));
        assert!(approx_eq(points[8], Vec2::new(0.25, 0.25), 1e-12));
    }

    // Tests the arithmetic mean
    // Verified by summing in u8
    #[test]
    fn test_mean_luminance() {
        assert_eq!(mean_luminance(&[]), None);
        assert_eq!(mean_luminance(&[255; 9]), Some(255.0));
        assert_eq!(mean_luminance(&[0, 255]), Some(127.5));
    }

    // Tests uniform bright and dark frames
    // Verified by inverting the decision
    #[test]
    fn test_uniform_sources() {
        let tiling = generate(3).expect("depth within limit");
        let extent = Extent::of(&tiling).expect("non-empty tiling");
        let mapping = PixelMapping::new(extent, 64, 64);
        let bright = LuminanceFrame::uniform(64, 64, 200).expect("non-empty frame");
        let dark = LuminanceFrame::uniform(64, 64, 50).expect("non-empty frame");
        let grey = LuminanceFrame::uniform(64, 64, 128).expect("non-empty frame");

        for rhombus in rhombi_per_triangle(&tiling) {
            let on_bright = Sampler::with_defaults(&bright, mapping, BoundsPolicy::Clamp);
            let on_dark = Sampler::with_defaults(&dark, mapping, BoundsPolicy::Clamp);
            let on_grey = Sampler::with_defaults(&grey, mapping, BoundsPolicy::Clamp);
            assert_eq!(on_bright.decide(&rhombus).ok(), Some(Fill::White));
            assert_eq!(on_dark.decide(&rhombus).ok(), Some(Fill::Black));
            assert_eq!(on_grey.decide(&rhombus).ok(), Some(Fill::Black));
        }
    }

    // Tests the readings come from the pixels under each sample point
    // Verified by sampling at the rhombus corners
    #[test]
    fn test_samples_follow_source() {
        // Left half dark, right half bright
        let pixels = ndarray::Array2::from_shape_fn((8, 8), |(_, col)| if col < 4 { 0 } else { 255 });
        let frame = LuminanceFrame::from_array(pixels).expect("non-empty frame");
        let extent = Extent::from_max_dim(1.0).expect("positive extent");
        let mapping = PixelMapping::new(extent, 8, 8);
        let sampler = Sampler::new(&frame, mapping, BoundsPolicy::Strict, 100.0);

        let values = sampler.samples(&square().rhombus()).expect("in bounds");
        // u = 0.25 maps to x = 3, u = 0.5 and 0.75 map to x = 4 and 5
        assert_eq!(&values[..3], &[0, 0, 0]);
        assert_eq!(&values[3..], &[255; 6]);
        let mean = sampler.mean(&square().rhombus()).expect("in bounds");
        assert!((mean - 170.0).abs() < 1e-9);
        assert_eq!(sampler.decide(&square().rhombus()).ok(), Some(Fill::White));
    }

    // Tests strict sampling propagates out-of-bounds reads
    // Verified by clamping under the strict policy
    #[test]
    fn test_strict_out_of_bounds() {
        let frame = LuminanceFrame::uniform(8, 8, 200).expect("non-empty frame");
        // Extent too small for the rhombus, pushing samples off the image
        let extent = Extent::from_max_dim(0.1).expect("positive extent");
        let mapping = PixelMapping::new(extent, 8, 8);

        let strict = Sampler::with_defaults(&frame, mapping, BoundsPolicy::Strict);
        assert!(strict.decide(&square().rhombus()).is_err());
        let clamped = Sampler::with_defaults(&frame, mapping, BoundsPolicy::Clamp);
        assert_eq!(clamped.decide(&square().rhombus()).ok(), Some(Fill::White));
    }
}
