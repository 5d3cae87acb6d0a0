//! Parameter sets for the two filter pipelines.
//!
//! Each struct's `Default` is the identity transform. The `*_RANGE`
//! constants are the interactive control ranges; values outside them still
//! work because every stage clamps at the pixel level.

use crate::error::{ColorMoodError, Result};

/// Control range for the hue shift (8-bit hue units, half degrees).
pub const HUE_SHIFT_RANGE: (i32, i32) = (-90, 90);
/// Control range for the saturation and brightness multipliers.
pub const SCALE_RANGE: (f32, f32) = (0.0, 2.0);
/// Control range for the contrast multiplier.
pub const CONTRAST_RANGE: (f32, f32) = (0.5, 2.0);
/// Control range for the warm/cool shift.
pub const WARM_SHIFT_RANGE: (i32, i32) = (-50, 50);
/// Control range for each Lab channel shift.
pub const LAB_SHIFT_RANGE: (i32, i32) = (-50, 50);

/// Parameters for the HSV + temperature pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvTemperatureParams {
    /// Additive hue shift, wraps modulo 180. Default: 0.
    pub hue_shift: i32,
    /// Saturation multiplier. Default: 1.0.
    pub saturation_scale: f32,
    /// Value (brightness) multiplier. Default: 1.0.
    pub brightness_scale: f32,
    /// Contrast multiplier around mid-gray 128. Default: 1.0.
    pub contrast_scale: f32,
    /// Added to red, subtracted from blue. Positive warms. Default: 0.
    pub warm_shift: i32,
}

impl Default for HsvTemperatureParams {
    /// Produces an identity (no-op) transform.
    fn default() -> Self {
        Self {
            hue_shift: 0,
            saturation_scale: 1.0,
            brightness_scale: 1.0,
            contrast_scale: 1.0,
            warm_shift: 0,
        }
    }
}

impl HsvTemperatureParams {
    /// Report the first parameter outside its control range.
    pub fn check_ranges(&self) -> Result<()> {
        check_int("hue_shift", self.hue_shift, HUE_SHIFT_RANGE)?;
        check_float("saturation_scale", self.saturation_scale, SCALE_RANGE)?;
        check_float("brightness_scale", self.brightness_scale, SCALE_RANGE)?;
        check_float("contrast_scale", self.contrast_scale, CONTRAST_RANGE)?;
        check_int("warm_shift", self.warm_shift, WARM_SHIFT_RANGE)
    }

    /// Copy with every field pulled into its control range.
    pub fn clamped(&self) -> Self {
        Self {
            hue_shift: self.hue_shift.clamp(HUE_SHIFT_RANGE.0, HUE_SHIFT_RANGE.1),
            saturation_scale: clamp_float(self.saturation_scale, SCALE_RANGE),
            brightness_scale: clamp_float(self.brightness_scale, SCALE_RANGE),
            contrast_scale: clamp_float(self.contrast_scale, CONTRAST_RANGE),
            warm_shift: self.warm_shift.clamp(WARM_SHIFT_RANGE.0, WARM_SHIFT_RANGE.1),
        }
    }
}

/// Parameters for the Lab shift pipeline. Default is all zeros (identity).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabShiftParams {
    /// Added to lightness (8-bit scale).
    pub l_shift: i32,
    /// Added to the red-green axis.
    pub a_shift: i32,
    /// Added to the blue-yellow axis.
    pub b_shift: i32,
}

impl LabShiftParams {
    /// Report the first shift outside its control range.
    pub fn check_ranges(&self) -> Result<()> {
        check_int("l_shift", self.l_shift, LAB_SHIFT_RANGE)?;
        check_int("a_shift", self.a_shift, LAB_SHIFT_RANGE)?;
        check_int("b_shift", self.b_shift, LAB_SHIFT_RANGE)
    }

    /// Copy with every shift pulled into its control range.
    pub fn clamped(&self) -> Self {
        let (min, max) = LAB_SHIFT_RANGE;
        Self {
            l_shift: self.l_shift.clamp(min, max),
            a_shift: self.a_shift.clamp(min, max),
            b_shift: self.b_shift.clamp(min, max),
        }
    }
}

/// The effective parameters for one filter run, covering both pipelines.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoodParams {
    pub hsv: HsvTemperatureParams,
    pub lab: LabShiftParams,
}

impl MoodParams {
    pub fn check_ranges(&self) -> Result<()> {
        self.hsv.check_ranges()?;
        self.lab.check_ranges()
    }

    pub fn clamped(&self) -> Self {
        Self {
            hsv: self.hsv.clamped(),
            lab: self.lab.clamped(),
        }
    }
}

fn check_int(name: &'static str, value: i32, (min, max): (i32, i32)) -> Result<()> {
    check_float(name, value as f32, (min as f32, max as f32))
}

fn check_float(name: &'static str, value: f32, (min, max): (f32, f32)) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ColorMoodError::ParameterOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

fn clamp_float(value: f32, (min, max): (f32, f32)) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}
