//! Implements ImageSaver with the `image` crate.
//! Output format follows the file extension; the bitmap is rescaled to the target resolution.

use crate::domain::{Bitmap, DomainError, MAX_BITMAP_PIXELS, Resolution};
use crate::ports::ImageSaver;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::fs;
use std::path::Path;
use tracing::info;

/// Resampling filter used when the bitmap and target resolution differ.
const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// File-system image saver.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageSaver;

impl FsImageSaver {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSaver for FsImageSaver {
    fn save_image(
        &self,
        path: &Path,
        bitmap: &Bitmap,
        resolution: Resolution,
    ) -> Result<(), DomainError> {
        if bitmap.is_empty() {
            return Err(DomainError::ImageSave("bitmap is empty".to_string()));
        }
        let format = ImageFormat::from_path(path)
            .map_err(|e| DomainError::ImageSave(format!("{}: {}", path.display(), e)))?;

        let buffer = RgbaImage::from_raw(bitmap.width(), bitmap.height(), bitmap.to_rgba_bytes())
            .ok_or_else(|| DomainError::ImageSave("bitmap buffer size mismatch".to_string()))?;
        let (width, height) = resolution.as_u32_tuple();
        if (width as u64) * (height as u64) > MAX_BITMAP_PIXELS as u64 {
            return Err(DomainError::ImageSave(format!(
                "target {} exceeds {} pixels",
                resolution, MAX_BITMAP_PIXELS
            )));
        }
        let buffer = if buffer.dimensions() == (width, height) {
            buffer
        } else {
            image::imageops::resize(&buffer, width, height, RESIZE_FILTER)
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| DomainError::ImageSave(format!("create {}: {}", parent.display(), e)))?;
        }

        let image = DynamicImage::ImageRgba8(buffer);
        // JPEG has no alpha channel
        let image = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
            _ => image,
        };
        image
            .save_with_format(path, format)
            .map_err(|e| DomainError::ImageSave(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), %resolution, ?format, "image saved");
        Ok(())
    }
}
