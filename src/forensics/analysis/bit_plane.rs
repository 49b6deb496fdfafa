use tracing::debug;

use crate::forensics::input::types::{ImageSample, Rgb};

/// Renders the red LSB plane: red becomes 255 where its LSB is set and 0
/// elsewhere. Green and blue are copied unchanged.
pub fn render_bit_plane(sample: &ImageSample) -> ImageSample {
    debug!("Rendering red bit-plane for {}x{} image", sample.width, sample.height);

    let pixels = sample
        .pixels
        .iter()
        .map(|p| Rgb::new(if p.r & 1 == 1 { u8::MAX } else { 0 }, p.g, p.b))
        .collect();

    ImageSample {
        width: sample.width,
        height: sample.height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_red_amplified_other_channels_kept() {
        let sample = ImageSample::new(2, 1, vec![Rgb::new(7, 8, 9), Rgb::new(254, 3, 250)]).unwrap();
        let plane = render_bit_plane(&sample);
        assert_eq!(plane.pixels, vec![Rgb::new(255, 8, 9), Rgb::new(0, 3, 250)]);
        // the source is untouched
        assert_eq!(sample.pixels[0], Rgb::new(7, 8, 9));
    }

    proptest! {
        #[test]
        fn prop_shape_and_channel_invariants(
            width in 1usize..16,
            height in 1usize..16,
            seed in proptest::collection::vec(any::<(u8, u8, u8)>(), 256),
        ) {
            let pixels = (0..width * height)
                .map(|i| {
                    let (r, g, b) = seed[i % seed.len()];
                    Rgb::new(r, g, b)
                })
                .collect();
            let sample = ImageSample::new(width, height, pixels).unwrap();
            let plane = render_bit_plane(&sample);

            prop_assert_eq!(plane.width, sample.width);
            prop_assert_eq!(plane.height, sample.height);
            for (out, src) in plane.pixels.iter().zip(&sample.pixels) {
                prop_assert!(out.r == 0 || out.r == 255);
                prop_assert_eq!(out.r == 255, src.r & 1 == 1);
                prop_assert_eq!(out.g, src.g);
                prop_assert_eq!(out.b, src.b);
            }
        }
    }
}
