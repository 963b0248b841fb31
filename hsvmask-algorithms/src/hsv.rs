//! RGB to HSV conversion.
//!
//! Uses the common 8-bit convention: hue is stored as degrees / 2 so it
//! fits in `0..=179`, saturation and value span `0..=255`. Divisions go
//! through reciprocal tables scaled by `1 << HSV_SHIFT` and rounded on the
//! shift, the same way OpenCV's 8-bit `BGR2HSV` does, so a range tuned here
//! selects the same pixels there.

use image::RgbImage;
use rayon::prelude::*;

const HSV_SHIFT: u32 = 12;
const HALF: i32 = 1 << (HSV_SHIFT - 1);

/// `round((255 << HSV_SHIFT) / v)`, indexed by value.
const SAT_DIV: [i32; 256] = reciprocal_table(255 << HSV_SHIFT);

/// `round((180 << HSV_SHIFT) / (6 * diff))`, indexed by chroma.
const HUE_DIV: [i32; 256] = reciprocal_table((180 << HSV_SHIFT) / 6);

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn reciprocal_table(numerator: i32) -> [i32; 256] {
    let mut table = [0; 256];
    let mut i = 1;
    while i < 256 {
        let d = i as i32;
        table[i] = (2 * numerator + d) / (2 * d);
        i += 1;
    }
    table
}

/// Converts one RGB pixel to `[h, s, v]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = (diff * SAT_DIV[v as usize] + HALF) >> HSV_SHIFT;

    // Offset of the hue within its sextant pair, in units of `diff`.
    let raw = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    // Arithmetic shift floors, so slightly negative hues land on -1 and wrap.
    let h = (raw * HUE_DIV[diff as usize] + HALF) >> HSV_SHIFT;
    let h = if h < 0 { h + 180 } else { h };

    [h as u8, s as u8, v as u8]
}

/// An image in 8-bit HSV space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl HsvImage {
    /// Converts an RGB image, row-major, in parallel.
    #[must_use]
    pub fn from_rgb(image: &RgbImage) -> Self {
        let pixels = image
            .as_raw()
            .par_chunks_exact(3)
            .map(|px| rgb_to_hsv(px[0], px[1], px[2]))
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            pixels,
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All pixels in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` if out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsv(255, 0, 0), [0, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 255, 0), [60, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 0, 255), [120, 255, 255]);
    }

    #[test]
    fn test_secondaries() {
        assert_eq!(rgb_to_hsv(255, 255, 0), [30, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 255, 255), [90, 255, 255]);
        assert_eq!(rgb_to_hsv(255, 0, 255), [150, 255, 255]);
    }

    #[test]
    fn test_greys_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv(0, 0, 0), [0, 0, 0]);
        assert_eq!(rgb_to_hsv(128, 128, 128), [0, 0, 128]);
        assert_eq!(rgb_to_hsv(255, 255, 255), [0, 0, 255]);
    }

    #[test]
    fn test_partial_saturation() {
        // 100 * SAT_DIV[200] lands just under 128 << 12
        let [h, s, v] = rgb_to_hsv(200, 100, 100);
        assert_eq!((h, s, v), (0, 127, 200));
    }

    #[test]
    fn test_table_rounding_on_dark_blue() {
        // Exact rounding would give s = 247 here.
        assert_eq!(rgb_to_hsv(3, 3, 90), [120, 246, 90]);
    }

    #[test]
    fn test_reciprocal_tables() {
        assert_eq!(SAT_DIV[0], 0);
        assert_eq!(HUE_DIV[0], 0);
        assert_eq!(SAT_DIV[255], 4096);
        assert_eq!(SAT_DIV[200], 5222);
        assert_eq!(HUE_DIV[255], 482);
        assert_eq!(HUE_DIV[1], 122_880);
    }

    #[test]
    fn test_hue_just_below_red_wraps_high() {
        // Slightly magenta-leaning red: negative hue wraps into 150..180
        let [h, _, _] = rgb_to_hsv(255, 0, 10);
        assert_eq!(h, 179);
    }

    #[test]
    fn test_hue_never_exceeds_179() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let [h, _, _] = rgb_to_hsv(r as u8, g as u8, b as u8);
                    assert!(h <= 179, "hue {h} for ({r}, {g}, {b})");
                }
            }
        }
    }

    #[test]
    fn test_image_conversion_layout() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([0, 255, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 255]));

        let hsv = HsvImage::from_rgb(&img);
        assert_eq!(hsv.dimensions(), (2, 1));
        assert_eq!(hsv.get_pixel(0, 0), Some([60, 255, 255]));
        assert_eq!(hsv.get_pixel(1, 0), Some([120, 255, 255]));
        assert_eq!(hsv.get_pixel(2, 0), None);
        assert_eq!(hsv.pixels().len(), 2);
    }
}
