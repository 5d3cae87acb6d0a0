//! In-memory PNG export and self-contained download links.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

use crate::error::{ColorMoodError, Result};
use crate::image::MoodImage;

/// Filename suggested for downloads unless the caller overrides it.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "colormood_output.png";

const PNG_MIME: &str = "image/png";

/// Encode `image` as a lossless PNG byte buffer.
pub fn encode_png(image: &MoodImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .to_rgb_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ColorMoodError::Encode(e.to_string()))?;
    Ok(bytes)
}

/// A base64-encoded PNG plus the filename a browser should save it as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub filename: String,
    pub mime_type: &'static str,
    pub payload_base64: String,
}

impl DownloadLink {
    /// Encode `image` with the default filename.
    pub fn from_image(image: &MoodImage) -> Result<Self> {
        Self::with_filename(image, DEFAULT_DOWNLOAD_FILENAME)
    }

    /// Encode `image` with a caller-chosen filename.
    pub fn with_filename(image: &MoodImage, filename: &str) -> Result<Self> {
        let png = encode_png(image)?;
        tracing::debug!(
            "encoded {}x{} PNG ({} bytes) as {filename}",
            image.width,
            image.height,
            png.len()
        );
        Ok(Self::from_png_bytes(&png, filename))
    }

    /// Wrap already-encoded PNG bytes.
    pub fn from_png_bytes(png: &[u8], filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            mime_type: PNG_MIME,
            payload_base64: STANDARD.encode(png),
        }
    }

    /// `data:` URI carrying the whole payload.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.payload_base64)
    }

    /// HTML anchor that downloads the payload when clicked.
    pub fn to_html_anchor(&self, label: &str) -> String {
        format!(
            "<a href=\"{}\" download=\"{}\">{}</a>",
            self.data_uri(),
            escape_html(&self.filename),
            escape_html(label)
        )
    }

    /// Decode the payload back to PNG bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.payload_base64)
            .map_err(|e| ColorMoodError::Encode(e.to_string()))
    }
}

/// Escape text for use inside HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_is_lossless() {
        let image = MoodImage::from_raw(2, 1, vec![1, 2, 3, 250, 251, 252]).unwrap();
        let png = encode_png(&image).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(MoodImage::decode(&png).unwrap(), image);
    }

    #[test]
    fn test_default_filename() {
        let link = DownloadLink::from_image(&MoodImage::filled(1, 1, [0, 0, 0])).unwrap();
        assert_eq!(link.filename, "colormood_output.png");
        assert!(link.data_uri().starts_with("data:image/png;base64,iVBOR"));
    }

    #[test]
    fn test_payload_decodes_to_original_png() {
        let image = MoodImage::filled(3, 3, [10, 20, 30]);
        let link = DownloadLink::with_filename(&image, "custom.png").unwrap();
        assert_eq!(link.filename, "custom.png");
        assert_eq!(link.png_bytes().unwrap(), encode_png(&image).unwrap());
    }

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html("<a href='x'>&\"</a>"),
            "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain mood"), "plain mood");
    }

    #[test]
    fn test_anchor_escapes_filename_and_label() {
        let link = DownloadLink::from_png_bytes(b"png", "a\"b.png");
        let html = link.to_html_anchor("<save>");
        assert!(html.contains("download=\"a&quot;b.png\""), "{html}");
        assert!(html.contains("&lt;save&gt;</a>"), "{html}");
        assert!(html.starts_with("<a href=\"data:image/png;base64,cG5n\""), "{html}");
    }
}
