//! Image loading for the demo application.

use std::path::{Path, PathBuf};

use colormood_core::MoodImage;

/// Read an uploaded JPEG or PNG from disk.
pub fn load_image(path: &Path) -> Result<MoodImage, ImageLoadError> {
    let bytes = std::fs::read(path).map_err(|source| ImageLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = MoodImage::decode(&bytes)?;
    tracing::info!(
        "Image loaded: {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(image)
}

/// Errors that can occur during image loading.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] colormood_core::ColorMoodError),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
