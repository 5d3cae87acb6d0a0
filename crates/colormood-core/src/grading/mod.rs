//! Grading stages. Each takes an image and returns a new one of the same
//! shape, with every sample clamped into `[0, 255]`.

pub mod hsv;
pub mod lab;
pub mod sliders;

pub use hsv::apply_hsv_adjustment;
pub use lab::apply_lab_shift;
pub use sliders::{CONTRAST_PIVOT, apply_contrast, apply_temperature};
