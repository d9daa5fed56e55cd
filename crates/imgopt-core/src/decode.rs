//! Decode downloaded bytes and normalize the color mode.
//!
//! After normalization every image is 8-bit RGB or 8-bit RGBA; sources with
//! any alpha channel (RGBA, luma+alpha, palette with transparency) become RGBA.

use image::DynamicImage;

use crate::error::ProcessError;

/// Color layout of a normalized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
}

/// Decoded image whose pixels are `Rgb8` or `Rgba8`.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
}

impl DecodedImage {
    /// Wraps `image`, converting it to `Rgba8` if it carries alpha and to `Rgb8` otherwise.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let image = match image {
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => image,
            other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        };
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn mode(&self) -> ColorMode {
        match self.image {
            DynamicImage::ImageRgba8(_) => ColorMode::Rgba,
            _ => ColorMode::Rgb,
        }
    }

    /// Raw interleaved pixel bytes (3 or 4 per pixel depending on [`mode`](Self::mode)).
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_bytes()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }
}

/// Decodes `bytes` (format sniffed from content) and normalizes the color mode.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ProcessError> {
    let format = image::guess_format(bytes).ok();
    let raw = image::load_from_memory(bytes)?;
    let source_color = raw.color();
    let decoded = DecodedImage::from_dynamic(raw);
    tracing::debug!(
        ?format,
        ?source_color,
        mode = ?decoded.mode(),
        width = decoded.width(),
        height = decoded.height(),
        "decoded image"
    );
    Ok(decoded)
}
