//! Domain entities. Pure data structures for the core business.
//!
//! No CLI, filesystem or codec types here; adapters map into these.

use crate::domain::{Brush, Color, DomainError, Pen, Resolution};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw, unvalidated options as produced by the CLI/config layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub input_path: String,
    pub output_path: String,
    pub rectangle_color: String,
    pub background_color: String,
    pub rectangle_border_color: String,
    pub font_color: String,
    /// `"<width>x<height>"`
    pub resolution: String,
    pub font_name: String,
    pub excluded_words_path: String,
    pub excluded_parts_of_speech_path: String,
}

/// Resolved drawing primitives. All four are always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColoringOptions {
    pub rectangle_fill: Brush,
    pub background_fill: Brush,
    pub rectangle_border: Pen,
    pub text: Brush,
}

/// Fully resolved, immutable settings for the rendering pipeline.
///
/// Only the settings pipeline constructs this; fields are read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    input_path: String,
    output_path: String,
    coloring_options: ColoringOptions,
    excluded_words: BTreeSet<String>,
    excluded_parts_of_speech: BTreeSet<String>,
    resolution: Resolution,
    font_name: String,
}

impl Settings {
    pub(crate) fn new(
        input_path: String,
        output_path: String,
        coloring_options: ColoringOptions,
        excluded_words: BTreeSet<String>,
        excluded_parts_of_speech: BTreeSet<String>,
        resolution: Resolution,
        font_name: String,
    ) -> Self {
        Self {
            input_path,
            output_path,
            coloring_options,
            excluded_words,
            excluded_parts_of_speech,
            resolution,
            font_name,
        }
    }

    pub fn input_path(&self) -> &str {
        &self.input_path
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    pub fn coloring_options(&self) -> &ColoringOptions {
        &self.coloring_options
    }

    pub fn excluded_words(&self) -> &BTreeSet<String> {
        &self.excluded_words
    }

    pub fn excluded_parts_of_speech(&self) -> &BTreeSet<String> {
        &self.excluded_parts_of_speech
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }
}

/// Largest canvas `Bitmap::filled` allocates (16384 x 16384).
pub const MAX_BITMAP_PIXELS: usize = 1 << 28;

/// Row-major ARGB pixel buffer handed to the image saver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Canvas of `resolution` filled with one color.
    ///
    /// # Errors
    /// Returns `DomainError::ImageSave` when the canvas exceeds
    /// [`MAX_BITMAP_PIXELS`] or cannot be allocated.
    pub fn filled(resolution: Resolution, color: Color) -> Result<Self, DomainError> {
        let width = resolution.width_u32();
        let height = resolution.height_u32();
        let count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= MAX_BITMAP_PIXELS)
            .ok_or_else(|| {
                DomainError::ImageSave(format!(
                    "canvas {}x{} exceeds {} pixels",
                    width, height, MAX_BITMAP_PIXELS
                ))
            })?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(count).map_err(|e| {
            DomainError::ImageSave(format!("canvas {}x{}: {}", width, height, e))
        })?;
        pixels.resize(count, color);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap existing pixels. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, DomainError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(DomainError::ImageSave(format!(
                "bitmap {}x{} needs {} pixels, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Flatten to RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba()).collect()
    }
}
