//! Saving rendered plots to image files.

use std::path::Path;

use image::RgbaImage;

use crate::error::{PlotError, PlotResult};

/// Saves an RGBA image to a file.
///
/// The format follows the extension: `.png`, or `.jpg`/`.jpeg` (alpha dropped).
///
/// # Errors
/// Returns an error if the file cannot be written or the format is unsupported.
pub fn save_image(path: impl AsRef<Path>, image: &RgbaImage) -> PlotResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => {
            image.save_with_format(path, image::ImageFormat::Png)?;
        }
        "jpg" | "jpeg" => {
            // Convert to RGB for JPEG (no alpha)
            let rgb = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            rgb.save_with_format(path, image::ImageFormat::Jpeg)?;
        }
        _ => {
            return Err(PlotError::UnsupportedFormat(extension));
        }
    }

    log::info!("saved plot to {}", path.display());
    Ok(())
}
