//! Image preparation for the image-to-image path.
//!
//! Uploads are decoded, stretched to a fixed square and re-encoded as JPEG.
//! Alpha is dropped since the provider works on RGB input.
use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::error::{AppError, AppResult};

/// Side length of the square the provider expects.
pub const TARGET_SIZE: u32 = 1024;

pub fn decode_image(bytes: &[u8]) -> AppResult<DynamicImage> {
    if bytes.is_empty() {
        return Err(AppError::InvalidRequest("Uploaded image is empty".to_string()));
    }
    Ok(image::load_from_memory(bytes)?)
}

/// Stretch to `size`×`size` regardless of aspect ratio.
pub fn resize_to_square(img: &DynamicImage, size: u32) -> DynamicImage {
    let resized = img.resize_exact(size, size, FilterType::Triangle);
    DynamicImage::ImageRgb8(resized.to_rgb8())
}

pub fn encode_jpeg(img: &DynamicImage) -> AppResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg)?;
    Ok(buf.into_inner())
}

/// Decode, resize to [`TARGET_SIZE`] and re-encode an uploaded image.
pub fn prepare_init_image(bytes: &[u8]) -> AppResult<Vec<u8>> {
    let img = decode_image(bytes)?;
    tracing::debug!(
        width = img.width(),
        height = img.height(),
        "Resizing uploaded image to {}x{}", TARGET_SIZE, TARGET_SIZE
    );
    encode_jpeg(&resize_to_square(&img, TARGET_SIZE))
}
