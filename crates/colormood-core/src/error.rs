use std::path::PathBuf;

/// Errors produced by the ColorMood core.
#[derive(Debug, thiserror::Error)]
pub enum ColorMoodError {
    /// The preset file is missing, unreadable, or not a valid catalog.
    #[error("failed to load preset catalog {}: {reason}", path.display())]
    PresetCatalogLoad { path: PathBuf, reason: String },
    /// Input bytes or buffers are not a decodable 3-channel 8-bit raster.
    #[error("invalid image format: {0}")]
    InvalidImageFormat(String),
    #[error("parameter `{name}` = {value} is outside [{min}, {max}]")]
    ParameterOutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("unknown pipeline: {0} (expected `hsv` or `lab`)")]
    UnknownPipeline(String),
    #[error("unknown mood: {0}")]
    UnknownMood(String),
    #[error("image dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch { left: (u32, u32), right: (u32, u32) },
    #[error("failed to encode image: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, ColorMoodError>;
