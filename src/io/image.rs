//! Color-mode coercion and image file access

use std::path::Path;

use image::{DynamicImage, GrayImage, RgbImage};

use crate::io::error::{Result, StereogramError};
use crate::io::store::ColorMode;
use crate::math::luminance::to_luma_image;

const fn is_luma_layout(image: &DynamicImage) -> bool {
    matches!(
        image,
        DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
    )
}

const fn is_rgb_layout(image: &DynamicImage) -> bool {
    matches!(
        image,
        DynamicImage::ImageRgb8(_)
            | DynamicImage::ImageRgba8(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_)
            | DynamicImage::ImageRgb32F(_)
            | DynamicImage::ImageRgba32F(_)
    )
}

fn unsupported(requested: ColorMode, image: &DynamicImage) -> StereogramError {
    StereogramError::UnsupportedColorMode {
        requested,
        found: format!("{:?}", image.color()),
    }
}

/// Convert to 8-bit single-channel luminance
///
/// Color images go through the ITU-R 601-2 luma transform and lose their
/// alpha channel. Grayscale images are narrowed to 8 bits.
///
/// # Errors
///
/// Returns `UnsupportedColorMode` for pixel layouts without a known conversion
pub fn into_luma8(image: DynamicImage) -> Result<GrayImage> {
    match image {
        DynamicImage::ImageLuma8(gray) => Ok(gray),
        DynamicImage::ImageRgb8(rgb) => Ok(to_luma_image(&rgb)),
        other if is_luma_layout(&other) => Ok(other.to_luma8()),
        other if is_rgb_layout(&other) => Ok(to_luma_image(&other.to_rgb8())),
        other => Err(unsupported(ColorMode::Luma, &other)),
    }
}

/// Convert to 8-bit RGB, dropping any alpha channel
///
/// # Errors
///
/// Returns `UnsupportedColorMode` for pixel layouts without a known conversion
pub fn into_rgb8(image: DynamicImage) -> Result<RgbImage> {
    match image {
        DynamicImage::ImageRgb8(rgb) => Ok(rgb),
        other if is_luma_layout(&other) || is_rgb_layout(&other) => Ok(other.to_rgb8()),
        other => Err(unsupported(ColorMode::Rgb, &other)),
    }
}

/// Convert to the layout a collaborator was asked for
///
/// # Errors
///
/// Returns `UnsupportedColorMode` for pixel layouts without a known conversion
pub fn coerce(image: DynamicImage, mode: ColorMode) -> Result<DynamicImage> {
    match mode {
        ColorMode::Luma => into_luma8(image).map(DynamicImage::ImageLuma8),
        ColorMode::Rgb => into_rgb8(image).map(DynamicImage::ImageRgb8),
    }
}

/// Decode an image file
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| StereogramError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode an image to disk, creating parent directories as needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StereogramError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| StereogramError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
