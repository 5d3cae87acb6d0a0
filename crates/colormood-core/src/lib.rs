//! ColorMood Core — mood-driven color filters for still photos.
//!
//! This crate contains the color conversions, the per-stage grading math,
//! the two filter pipelines, preset handling, per-session control state,
//! and the in-memory export path. No UI or framework dependencies.

pub mod color;
pub mod compare;
pub mod error;
pub mod export;
pub mod grading;
pub mod image;
pub mod preset;
pub mod session;
pub mod transform;

// Re-exports for convenience.
pub use error::{ColorMoodError, Result};
pub use export::{DEFAULT_DOWNLOAD_FILENAME, DownloadLink, encode_png, escape_html};
pub use image::MoodImage;
pub use preset::{Preset, PresetCatalog};
pub use session::MoodSession;
pub use transform::filter::{Filter, HsvTemperatureFilter, LabShiftFilter, Pipeline};
pub use transform::params::{HsvTemperatureParams, LabShiftParams, MoodParams};
