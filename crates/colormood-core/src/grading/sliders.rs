//! Per-sample RGB adjustments: contrast stretch and color temperature.

use crate::color::{clamp_i16_to_u8, clamp_to_u8};
use crate::image::MoodImage;

/// Mid-gray pivot for the contrast stretch.
pub const CONTRAST_PIVOT: f32 = 128.0;

/// Any warm shift beyond this already saturates both channels.
const MAX_EFFECTIVE_SHIFT: i32 = 255;

/// Scale each sample's deviation from mid-gray.
///
/// ```text
/// out = clamp(128 + contrast × (in − 128), 0, 255)
/// ```
///
/// Samples at 128 are unchanged. `contrast = 1.0` produces no change.
pub fn apply_contrast(image: &MoodImage, contrast: f32) -> MoodImage {
    image.map_pixels(|px| {
        px.map(|x| clamp_to_u8(CONTRAST_PIVOT + contrast * (f32::from(x) - CONTRAST_PIVOT)))
    })
}

/// Push the image warmer (positive) or cooler (negative).
///
/// Red gains `warm_shift`, blue loses it, green is untouched. Arithmetic is
/// widened to `i16` and clamped back into `[0, 255]`.
pub fn apply_temperature(image: &MoodImage, warm_shift: i32) -> MoodImage {
    if warm_shift == 0 {
        return image.clone();
    }

    let shift = warm_shift.clamp(-MAX_EFFECTIVE_SHIFT, MAX_EFFECTIVE_SHIFT) as i16;
    image.map_pixels(|[r, g, b]| {
        [
            clamp_i16_to_u8(i16::from(r) + shift),
            g,
            clamp_i16_to_u8(i16::from(b) - shift),
        ]
    })
}
