//! Image representation for the filter pipelines.

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::error::{ColorMoodError, Result};

/// Number of samples per pixel. Images are always 8-bit RGB.
pub const CHANNELS: usize = 3;

/// An 8-bit RGB raster, shape `(height, width, 3)`.
///
/// Pixels are stored row-major. Every filter stage consumes a `&MoodImage`
/// and returns a new one of the same dimensions; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Row-major RGB samples. Length = `width * height`.
    pub pixels: Vec<[u8; 3]>,
}

impl MoodImage {
    /// A uniform image where every pixel is `rgb`.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgb; width as usize * height as usize],
        }
    }

    /// Build an image from interleaved RGB bytes.
    ///
    /// Fails with [`ColorMoodError::InvalidImageFormat`] unless the buffer
    /// holds exactly `width * height * 3` samples.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                ColorMoodError::InvalidImageFormat(format!("{width}x{height} is too large"))
            })?;
        if data.len() != expected {
            return Err(ColorMoodError::InvalidImageFormat(format!(
                "expected {expected} samples for {width}x{height} RGB, got {}",
                data.len()
            )));
        }

        let pixels = data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode JPEG or PNG bytes into an RGB image.
    ///
    /// The container format is sniffed from the bytes; anything other than
    /// JPEG or PNG is rejected. Grayscale and alpha sources are flattened to
    /// 8-bit RGB.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let format = image::guess_format(bytes)
            .map_err(|e| ColorMoodError::InvalidImageFormat(e.to_string()))?;
        if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
            return Err(ColorMoodError::InvalidImageFormat(format!(
                "unsupported format {format:?}, expected JPEG or PNG"
            )));
        }

        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| ColorMoodError::InvalidImageFormat(e.to_string()))?;
        if !matches!(decoded, DynamicImage::ImageRgb8(_)) {
            tracing::debug!("converting {:?} source to RGB8", decoded.color());
        }

        let image = Self::from(&decoded.to_rgb8());
        tracing::info!(
            "decoded {format:?} image ({}x{})",
            image.width,
            image.height
        );
        Ok(image)
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Array shape as `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Produce a new image of the same shape by mapping every pixel.
    pub fn map_pixels(&self, f: impl FnMut([u8; 3]) -> [u8; 3]) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// Interleaved RGB bytes, row-major.
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Convert to an `image` crate buffer for encoding.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut buffer = RgbImage::new(self.width, self.height);
        for (dst, src) in buffer.pixels_mut().zip(&self.pixels) {
            dst.0 = *src;
        }
        buffer
    }
}

impl From<&RgbImage> for MoodImage {
    fn from(buffer: &RgbImage) -> Self {
        let (width, height) = buffer.dimensions();
        Self {
            width,
            height,
            pixels: buffer.pixels().map(|p| p.0).collect(),
        }
    }
}
