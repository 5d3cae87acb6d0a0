//! sRGB ↔ HSV in the 8-bit convention (H = degrees / 2).

use palette::{FromColor, Hsv, Srgb};

use super::{MAX_SAMPLE, clamp_sample};

/// Hue is circular over `[0, HUE_RANGE)`, half a degree per unit.
pub const HUE_RANGE: f32 = 180.0;

/// Convert an 8-bit RGB pixel to `[h, s, v]` with `h ∈ [0, 180)` and
/// `s, v ∈ [0, 255]`.
///
/// Achromatic pixels report a hue of 0.
pub fn rgb_to_hsv8(rgb: [u8; 3]) -> [f32; 3] {
    let srgb = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format::<f32>();
    let hsv: Hsv = Hsv::from_color(srgb);

    let hue = (hsv.hue.into_positive_degrees() / 2.0).rem_euclid(HUE_RANGE);
    [hue, hsv.saturation * MAX_SAMPLE, hsv.value * MAX_SAMPLE]
}

/// Convert `[h, s, v]` in the 8-bit convention back to RGB on the
/// `[0, 255]` float scale.
///
/// Saturation and value are clamped first; hue wraps.
pub fn hsv8_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let hue = hsv[0].rem_euclid(HUE_RANGE) * 2.0;
    let saturation = clamp_sample(hsv[1]) / MAX_SAMPLE;
    let value = clamp_sample(hsv[2]) / MAX_SAMPLE;

    let hsv: Hsv = Hsv::new(hue, saturation, value);
    let rgb: Srgb = Srgb::from_color(hsv);
    [
        rgb.red * MAX_SAMPLE,
        rgb.green * MAX_SAMPLE,
        rgb.blue * MAX_SAMPLE,
    ]
}
