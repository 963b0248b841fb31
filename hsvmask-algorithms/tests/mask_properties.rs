#![allow(clippy::cast_possible_truncation)]
use hsvmask_algorithms::{
    in_range, rgb_to_hsv, selected_pixels, threshold, Channel, ChannelRange, HsvImage, MASK_MAX,
    MASK_MIN,
};
use image::{Rgb, RgbImage};

/// Small deterministic generator so the test images are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_u8(&mut self) -> u8 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 56) as u8
    }
}

fn noise_image(seed: u64, width: u32, height: u32) -> RgbImage {
    let mut rng = Lcg(seed);
    RgbImage::from_fn(width, height, |_, _| {
        Rgb([rng.next_u8(), rng.next_u8(), rng.next_u8()])
    })
}

fn sample_ranges() -> Vec<ChannelRange> {
    vec![
        ChannelRange::new([0, 0, 0], [179, 255, 255]),
        ChannelRange::new([35, 50, 50], [85, 255, 255]),
        ChannelRange::new([0, 0, 200], [179, 40, 255]),
        ChannelRange::new([100, 10, 10], [140, 200, 220]),
        ChannelRange::new([90, 90, 90], [90, 90, 90]),
    ]
}

#[test]
fn test_membership_matches_per_pixel_bounds() {
    let img = noise_image(7, 32, 24);
    let hsv = HsvImage::from_rgb(&img);

    for range in sample_ranges() {
        let mask = in_range(&hsv, &range);
        for (x, y, px) in img.enumerate_pixels() {
            let [h, s, v] = rgb_to_hsv(px[0], px[1], px[2]);
            let inside = Channel::ALL.iter().all(|&ch| {
                let value = [h, s, v][ch.index()];
                range.lower(ch) <= value && value <= range.upper(ch)
            });
            let expected = if inside { MASK_MAX } else { MASK_MIN };
            assert_eq!(
                mask.get_pixel(x, y)[0],
                expected,
                "pixel ({x}, {y}) hsv ({h}, {s}, {v}) range {range}"
            );
        }
    }
}

#[test]
fn test_mask_is_pure_function_of_inputs() {
    let img = noise_image(11, 20, 20);
    for range in sample_ranges() {
        let (mask_a, preview_a) = threshold(&img, &range).unwrap();
        let (mask_b, preview_b) = threshold(&img, &range).unwrap();
        assert_eq!(mask_a, mask_b);
        assert_eq!(preview_a, preview_b);
    }
}

#[test]
fn test_full_range_includes_everything() {
    let img = noise_image(3, 40, 30);
    let (mask, preview) = threshold(&img, &ChannelRange::full()).unwrap();
    assert_eq!(selected_pixels(&mask), 40 * 30);
    assert_eq!(preview, img);
}

#[test]
fn test_any_inverted_bound_excludes_everything() {
    let img = noise_image(5, 25, 25);
    for channel in Channel::ALL {
        let mut range = ChannelRange::full();
        range.set_lower(channel, 60);
        range.set_upper(channel, 59);
        let (mask, preview) = threshold(&img, &range).unwrap();
        assert_eq!(selected_pixels(&mask), 0, "channel {channel}");
        assert!(preview.as_raw().iter().all(|&c| c == 0));
    }
}

#[test]
fn test_mask_values_are_binary() {
    let img = noise_image(13, 16, 16);
    let range = ChannelRange::new([20, 20, 20], [160, 230, 230]);
    let (mask, _) = threshold(&img, &range).unwrap();
    assert!(mask
        .as_raw()
        .iter()
        .all(|&v| v == MASK_MIN || v == MASK_MAX));
}
