//! sRGB ↔ CIE L*a*b* (D65) in the 8-bit convention.
//!
//! ```text
//! L8 = L* × 255 / 100
//! a8 = a* + 128
//! b8 = b* + 128
//! ```

use palette::{FromColor, Lab, Srgb};

use super::MAX_SAMPLE;

/// Offset applied to the opponent axes so neutral sits at 128.
const OPPONENT_OFFSET: f32 = 128.0;
/// Scale from L* (0–100) to the 8-bit lightness range.
const LIGHTNESS_SCALE: f32 = MAX_SAMPLE / 100.0;

/// Convert an 8-bit RGB pixel to `[L, a, b]` in the 8-bit convention.
pub fn rgb_to_lab8(rgb: [u8; 3]) -> [f32; 3] {
    let srgb = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format::<f32>();
    let lab: Lab = Lab::from_color(srgb);
    [
        lab.l * LIGHTNESS_SCALE,
        lab.a + OPPONENT_OFFSET,
        lab.b + OPPONENT_OFFSET,
    ]
}

/// Convert `[L, a, b]` in the 8-bit convention back to RGB on the
/// `[0, 255]` float scale. Out-of-gamut results are clamped by `palette`.
pub fn lab8_to_rgb(lab: [f32; 3]) -> [f32; 3] {
    let lab: Lab = Lab::new(
        lab[0] / LIGHTNESS_SCALE,
        lab[1] - OPPONENT_OFFSET,
        lab[2] - OPPONENT_OFFSET,
    );
    let rgb: Srgb = Srgb::from_color(lab);
    [
        rgb.red * MAX_SAMPLE,
        rgb.green * MAX_SAMPLE,
        rgb.blue * MAX_SAMPLE,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_full_lightness_and_neutral() {
        let lab = rgb_to_lab8([255, 255, 255]);
        assert!((lab[0] - 255.0).abs() < 0.1, "L: {}", lab[0]);
        assert!((lab[1] - 128.0).abs() < 0.1, "a: {}", lab[1]);
        assert!((lab[2] - 128.0).abs() < 0.1, "b: {}", lab[2]);
    }

    #[test]
    fn test_red_is_positive_on_a_axis() {
        let lab = rgb_to_lab8([255, 0, 0]);
        assert!(lab[1] > 128.0 + 50.0, "a: {}", lab[1]);
    }

    #[test]
    fn test_round_trip_within_rounding() {
        for rgb in [[12, 200, 99], [255, 255, 255], [0, 0, 0], [64, 128, 32]] {
            let back = lab8_to_rgb(rgb_to_lab8(rgb));
            for c in 0..3 {
                let diff = (back[c] - f32::from(rgb[c])).abs();
                assert!(diff < 0.5, "{rgb:?} channel {c}: got {}", back[c]);
            }
        }
    }
}
