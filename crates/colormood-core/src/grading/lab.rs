//! Additive shifts in CIE L*a*b*.

use crate::color::{clamp_sample, clamp_to_u8, lab8_to_rgb, rgb_to_lab8};
use crate::image::MoodImage;

/// Shift a single pixel in Lab and convert it back to 8-bit RGB.
///
/// Channels are widened to `f32` in the 8-bit convention, shifted, clamped
/// into `[0, 255]`, converted back, and clamped once more after rounding.
pub fn shift_lab_pixel(rgb: [u8; 3], l_shift: i32, a_shift: i32, b_shift: i32) -> [u8; 3] {
    let [l, a, b] = rgb_to_lab8(rgb);

    let shifted = [
        clamp_sample(l + l_shift as f32),
        clamp_sample(a + a_shift as f32),
        clamp_sample(b + b_shift as f32),
    ];

    lab8_to_rgb(shifted).map(clamp_to_u8)
}

/// Apply the Lab shift to every pixel. All shifts at 0 produce no change.
pub fn apply_lab_shift(image: &MoodImage, l_shift: i32, a_shift: i32, b_shift: i32) -> MoodImage {
    image.map_pixels(|px| shift_lab_pixel(px, l_shift, a_shift, b_shift))
}
