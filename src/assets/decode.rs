use std::path::Path;

use image::{ImageReader, RgbaImage, imageops::FilterType};

use crate::foundation::{
    core::Size2,
    error::{LayerStackError, LayerStackResult},
};

/// Resampling filter used when a component's image is not already at its target size.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Open and decode the image at `path` as straight-alpha RGBA8.
///
/// A path that is not a readable file yields [`LayerStackError::ImageNotFound`];
/// bytes the `image` crate cannot decode yield [`LayerStackError::UnsupportedFormat`].
pub fn load_image(path: &Path) -> LayerStackResult<RgbaImage> {
    if !path.is_file() {
        return Err(LayerStackError::ImageNotFound(path.to_path_buf()));
    }
    let reader = ImageReader::open(path)
        .map_err(|_| LayerStackError::ImageNotFound(path.to_path_buf()))?
        .with_guessed_format()
        .map_err(|_| LayerStackError::ImageNotFound(path.to_path_buf()))?;
    let decoded = reader
        .decode()
        .map_err(|e| LayerStackError::unsupported_format(path, e.to_string()))?;
    Ok(decoded.to_rgba8())
}

/// Decode in-memory encoded image bytes as straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> LayerStackResult<RgbaImage> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| LayerStackError::unsupported_format("<memory>", e.to_string()))?;
    Ok(decoded.to_rgba8())
}

/// Resample `img` to `size`, returning it untouched when it already matches.
pub fn fit_to_size(img: RgbaImage, size: Size2) -> RgbaImage {
    if img.dimensions() == size.as_tuple() {
        tracing::trace!(width = size.width, height = size.height, "resize skipped");
        return img;
    }
    tracing::trace!(
        from_w = img.width(),
        from_h = img.height(),
        to_w = size.width,
        to_h = size.height,
        "resize"
    );
    image::imageops::resize(&img, size.width, size.height, RESIZE_FILTER)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
