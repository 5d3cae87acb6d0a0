//! Hue rotation and saturation/value scaling in HSV.
//!
//! ```text
//! h' = (h + hue_shift) mod 180
//! s' = clamp(s × saturation_scale, 0, 255)
//! v' = clamp(v × brightness_scale, 0, 255)
//! ```

use crate::color::{HUE_RANGE, clamp_sample, clamp_to_u8, hsv8_to_rgb, rgb_to_hsv8};
use crate::image::MoodImage;

/// Adjust a single pixel in HSV and convert it back to 8-bit RGB.
///
/// Hue is circular and never clamped. Work stays in `f32` until the final
/// RGB sample is rounded.
pub fn adjust_hsv_pixel(
    rgb: [u8; 3],
    hue_shift: i32,
    saturation_scale: f32,
    brightness_scale: f32,
) -> [u8; 3] {
    let [h, s, v] = rgb_to_hsv8(rgb);

    let h = (h + hue_shift as f32).rem_euclid(HUE_RANGE);
    let s = clamp_sample(s * saturation_scale);
    let v = clamp_sample(v * brightness_scale);

    hsv8_to_rgb([h, s, v]).map(clamp_to_u8)
}

/// Apply the HSV adjustment to every pixel.
///
/// `hue_shift = 0`, `saturation_scale = 1.0`, `brightness_scale = 1.0`
/// produce no change.
pub fn apply_hsv_adjustment(
    image: &MoodImage,
    hue_shift: i32,
    saturation_scale: f32,
    brightness_scale: f32,
) -> MoodImage {
    image.map_pixels(|px| adjust_hsv_pixel(px, hue_shift, saturation_scale, brightness_scale))
}
