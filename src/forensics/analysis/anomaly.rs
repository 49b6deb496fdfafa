use tracing::debug;

use crate::forensics::analysis::types::{AnomalyClass, AnomalyVerdict};
use crate::forensics::input::types::{ImageSample, Rgb};

/// Mean of `|p(x, y) - p(x, y - 1)|` over every channel of every pixel
/// that has a pixel above it. Zero when the image has fewer than two rows.
pub fn mean_vertical_difference(sample: &ImageSample) -> f64 {
    let mut total: u64 = 0;
    let mut count: u64 = 0;

    let rows: Vec<&[Rgb]> = sample.rows().collect();
    for pair in rows.windows(2) {
        for (above, below) in pair[0].iter().zip(pair[1]) {
            total += u64::from(above.r.abs_diff(below.r))
                + u64::from(above.g.abs_diff(below.g))
                + u64::from(above.b.abs_diff(below.b));
            count += 3;
        }
    }

    if count == 0 {
        return 0.0;
    }
    total as f64 / count as f64
}

/// Flags the image when the mean vertical difference exceeds `threshold`.
pub fn estimate_anomaly(sample: &ImageSample, threshold: f64) -> AnomalyVerdict {
    let mean_difference = mean_vertical_difference(sample);
    let class = if mean_difference > threshold {
        AnomalyClass::PossibleHiddenImage
    } else {
        AnomalyClass::NoObviousPattern
    };
    debug!("Mean vertical difference {:.3}: {:?}", mean_difference, class);

    AnomalyVerdict {
        mean_difference,
        threshold,
        class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn striped(width: usize, height: usize, base: u8, delta: u8) -> ImageSample {
        let pixels = (0..height)
            .flat_map(|y| {
                let v = if y % 2 == 0 { base } else { base.saturating_add(delta) };
                std::iter::repeat(Rgb::new(v, v, v)).take(width)
            })
            .collect();
        ImageSample::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_flat_image_has_no_anomaly() {
        let verdict = estimate_anomaly(&ImageSample::filled(8, 8, Rgb::new(90, 12, 200)), 50.0);
        assert_eq!(verdict.mean_difference, 0.0);
        assert_eq!(verdict.class, AnomalyClass::NoObviousPattern);
        assert_eq!(verdict.to_string(), "No obvious hidden image patterns.");
    }

    #[test]
    fn test_high_contrast_stripes_flagged() {
        let verdict = estimate_anomaly(&striped(4, 4, 0, 255), 50.0);
        assert_eq!(verdict.mean_difference, 255.0);
        assert!(verdict.is_anomalous());
        assert_eq!(verdict.to_string(), "Possible hidden image");
    }

    #[test]
    fn test_threshold_is_strict() {
        let verdict = estimate_anomaly(&striped(3, 2, 10, 50), 50.0);
        assert_eq!(verdict.mean_difference, 50.0);
        assert!(!verdict.is_anomalous());
    }

    #[test]
    fn test_difference_is_absolute_in_both_directions() {
        let down = ImageSample::new(1, 2, vec![Rgb::new(10, 0, 0), Rgb::new(0, 0, 0)]).unwrap();
        let up = ImageSample::new(1, 2, vec![Rgb::new(0, 0, 0), Rgb::new(10, 0, 0)]).unwrap();
        assert_eq!(mean_vertical_difference(&down), mean_vertical_difference(&up));
    }

    #[test]
    fn test_single_row_has_zero_difference() {
        let sample = ImageSample::new(3, 1, vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)]).unwrap();
        assert_eq!(mean_vertical_difference(&sample), 0.0);
    }

    #[test]
    fn test_horizontal_changes_are_ignored() {
        let sample = ImageSample::new(2, 2, vec![
            Rgb::new(0, 0, 0), Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0), Rgb::new(255, 255, 255),
        ]).unwrap();
        assert_eq!(mean_vertical_difference(&sample), 0.0);
    }

    proptest! {
        #[test]
        fn prop_more_row_variance_never_lowers_the_metric(
            base in 0u8..=255,
            low in 0u8..=255,
            extra in 0u8..=255,
            height in 2usize..12,
        ) {
            let high = low.saturating_add(extra);
            let calm = mean_vertical_difference(&striped(5, height, base, low));
            let rough = mean_vertical_difference(&striped(5, height, base, high));
            prop_assert!(rough >= calm);
        }
    }
}
