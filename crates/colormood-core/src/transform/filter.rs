//! The `Filter` capability and its two pipelines.
//!
//! Both pipelines share the same shape: resolve parameters, transform,
//! clamp, hand off. Callers pick one with [`Pipeline`].

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::error::ColorMoodError;
use crate::grading::{apply_contrast, apply_hsv_adjustment, apply_lab_shift, apply_temperature};
use crate::image::MoodImage;
use crate::transform::params::{HsvTemperatureParams, LabShiftParams, MoodParams};

/// A pure image-to-image color filter.
///
/// Implementations must return an image with the input's dimensions and
/// must never let a sample escape `[0, 255]`.
pub trait Filter {
    /// Parameter set consumed by this filter.
    type Params;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Produce a filtered copy of `image`.
    fn apply(&self, image: &MoodImage, params: &Self::Params) -> MoodImage;
}

/// HSV adjustment → contrast stretch → color temperature, in that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsvTemperatureFilter;

impl Filter for HsvTemperatureFilter {
    type Params = HsvTemperatureParams;

    fn name(&self) -> &'static str {
        "hsv-temperature"
    }

    fn apply(&self, image: &MoodImage, params: &HsvTemperatureParams) -> MoodImage {
        let adjusted = apply_hsv_adjustment(
            image,
            params.hue_shift,
            params.saturation_scale,
            params.brightness_scale,
        );
        let contrasted = apply_contrast(&adjusted, params.contrast_scale);
        apply_temperature(&contrasted, params.warm_shift)
    }
}

/// Additive L/a/b shift with conversion back to RGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabShiftFilter;

impl Filter for LabShiftFilter {
    type Params = LabShiftParams;

    fn name(&self) -> &'static str {
        "lab-shift"
    }

    fn apply(&self, image: &MoodImage, params: &LabShiftParams) -> MoodImage {
        apply_lab_shift(image, params.l_shift, params.a_shift, params.b_shift)
    }
}

/// Selects which of the two alternate pipelines a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pipeline {
    /// HSV + contrast + temperature.
    #[default]
    HsvTemperature,
    /// Lab channel shift.
    LabShift,
}

impl Pipeline {
    /// Human-readable label for menus and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HsvTemperature => "HSV + temperature",
            Self::LabShift => "Lab shift",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::HsvTemperature, Self::LabShift]
    }

    /// Run the selected filter with its half of `params`.
    pub fn run(&self, image: &MoodImage, params: &MoodParams) -> MoodImage {
        match self {
            Self::HsvTemperature => run_filter(&HsvTemperatureFilter, image, &params.hsv),
            Self::LabShift => run_filter(&LabShiftFilter, image, &params.lab),
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pipeline {
    type Err = ColorMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsv" | "hsv_temperature" | "hsv-temperature" => Ok(Self::HsvTemperature),
            "lab" | "lab_shift" | "lab-shift" => Ok(Self::LabShift),
            other => Err(ColorMoodError::UnknownPipeline(other.to_string())),
        }
    }
}

fn run_filter<F>(filter: &F, image: &MoodImage, params: &F::Params) -> MoodImage
where
    F: Filter,
    F::Params: fmt::Debug,
{
    let started = Instant::now();
    let output = filter.apply(image, params);
    debug_assert_eq!(output.dimensions(), image.dimensions());
    tracing::debug!(
        "{} applied to {}x{} in {:.2?}: {params:?}",
        filter.name(),
        image.width,
        image.height,
        started.elapsed()
    );
    output
}
