//! Before/after comparison composite.

use crate::error::{ColorMoodError, Result};
use crate::image::MoodImage;

/// Divider color between the two halves.
pub const DIVIDER_COLOR: [u8; 3] = [255, 255, 255];

/// Place `before` and `after` next to each other, separated by a vertical
/// divider `divider_width` pixels wide.
///
/// Both images must have the same height.
pub fn side_by_side(
    before: &MoodImage,
    after: &MoodImage,
    divider_width: u32,
) -> Result<MoodImage> {
    let mismatch = || ColorMoodError::DimensionMismatch {
        left: before.dimensions(),
        right: after.dimensions(),
    };
    if before.height != after.height {
        return Err(mismatch());
    }

    // The composite width must still fit in a u32.
    let width = before
        .width
        .checked_add(divider_width)
        .and_then(|w| w.checked_add(after.width))
        .ok_or_else(mismatch)?;
    let height = before.height;
    let divider = vec![DIVIDER_COLOR; divider_width as usize];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        pixels.extend_from_slice(row(before, y));
        pixels.extend_from_slice(&divider);
        pixels.extend_from_slice(row(after, y));
    }

    Ok(MoodImage {
        width,
        height,
        pixels,
    })
}

fn row(image: &MoodImage, y: u32) -> &[[u8; 3]] {
    let width = image.width as usize;
    let start = y as usize * width;
    &image.pixels[start..start + width]
}
