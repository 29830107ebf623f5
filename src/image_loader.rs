//! Image decoding and scaling for the display surface.
//!
//! Decoding is blocking and meant to run on a worker thread; only the
//! resulting [`Bitmap`] crosses back to the UI thread, where
//! [`create_slint_image`] turns it into something Slint can draw.

use crate::error::{AppError, Result};
use image::imageops::FilterType;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Pixel dimensions of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AppError::InvalidSurface { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Decoded RGB8 pixels, already scaled to the surface.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes `path` and stretches it to exactly `size`, ignoring aspect ratio.
pub fn load_scaled_blocking(path: &Path, size: SurfaceSize) -> Result<Bitmap> {
    if size.width == 0 || size.height == 0 {
        return Err(AppError::InvalidSurface {
            width: size.width,
            height: size.height,
        });
    }

    let img = image::ImageReader::open(path)
        .map_err(|e| AppError::image_load(path, e))?
        .with_guessed_format()
        .map_err(|e| AppError::image_load(path, e))?
        .decode()
        .map_err(|e| AppError::image_load(path, e))?;

    // Triangle is the bilinear filter.
    let scaled = img
        .resize_exact(size.width, size.height, FilterType::Triangle)
        .to_rgb8();

    Ok(Bitmap {
        width: scaled.width(),
        height: scaled.height(),
        data: scaled.into_raw(),
    })
}

/// Creates a Slint Image from a decoded bitmap.
pub fn create_slint_image(bitmap: Bitmap) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&bitmap.data, bitmap.width, bitmap.height);
    Image::from_rgb8(buffer)
}
