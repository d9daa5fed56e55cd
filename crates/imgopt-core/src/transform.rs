//! Resize to the requested dimensions.

use image::imageops::FilterType;

use crate::decode::DecodedImage;
use crate::error::ProcessError;
use crate::storage::WEBP_MAX_DIMENSION;

/// Resampling filter used for both down- and upscaling.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Output size for a source of `(src_width, src_height)`.
///
/// Without `height`, keeps the aspect ratio:
/// `round(width * src_height / src_width)`, never less than 1.
/// Either side above [`WEBP_MAX_DIMENSION`] is rejected before any pixel
/// buffer is allocated.
pub fn target_dimensions(
    (src_width, src_height): (u32, u32),
    width: u32,
    height: Option<u32>,
) -> Result<(u32, u32), ProcessError> {
    if src_width == 0 || src_height == 0 || width == 0 || height == Some(0) {
        return Err(ProcessError::Dimensions {
            width: src_width,
            height: src_height,
        });
    }
    let scaled = match height {
        Some(h) => h as f64,
        None => (width as f64 * src_height as f64 / src_width as f64)
            .round()
            .max(1.0),
    };
    let limit = WEBP_MAX_DIMENSION as f64;
    if width > WEBP_MAX_DIMENSION || scaled > limit {
        return Err(ProcessError::Dimensions {
            width,
            height: scaled.min(u32::MAX as f64) as u32,
        });
    }
    Ok((width, scaled as u32))
}

/// Returns a new image of exactly `width` x (`height` or the aspect-preserving height).
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: Option<u32>,
) -> Result<DecodedImage, ProcessError> {
    let (w, h) = target_dimensions(image.dimensions(), width, height)?;
    let resized = image.as_dynamic().resize_exact(w, h, RESIZE_FILTER);
    tracing::debug!(from = ?image.dimensions(), to = ?(w, h), "resized image");
    Ok(DecodedImage::from_dynamic(resized))
}
