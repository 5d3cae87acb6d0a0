//! Color space conversions used by the filter pipelines.
//!
//! HSV and Lab are carried in the conventional 8-bit encoding (every channel
//! spans `[0, 255]`, hue spans `[0, 180)`) but as `f32`, so adjustments can be
//! applied before anything is quantized.

pub mod hsv;
pub mod lab;

pub use hsv::{HUE_RANGE, hsv8_to_rgb, rgb_to_hsv8};
pub use lab::{lab8_to_rgb, rgb_to_lab8};

/// Largest 8-bit sample value, as a float.
pub const MAX_SAMPLE: f32 = 255.0;

/// Round a sample to the nearest integer and clamp it into `[0, 255]`.
///
/// NaN maps to 0. This is the only place floats become `u8`.
#[inline]
pub fn clamp_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, MAX_SAMPLE) as u8
}

/// Clamp a widened integer sample into `[0, 255]`.
#[inline]
pub fn clamp_i16_to_u8(value: i16) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamp an 8-bit-scale float channel into `[0, 255]` without quantizing.
#[inline]
pub fn clamp_sample(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_SAMPLE)
}
