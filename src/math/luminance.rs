//! ITU-R 601-2 luma transform for RGB to grayscale conversion

use image::{GrayImage, Luma, RgbImage};

// 16.16 fixed-point weights; they sum to exactly 1 << 16
const RED_WEIGHT: u32 = 19_595;
const GREEN_WEIGHT: u32 = 38_470;
const BLUE_WEIGHT: u32 = 7_471;
const ROUNDING: u32 = 1 << 15;

/// Luminance of one RGB pixel
///
/// `L = R * 299/1000 + G * 587/1000 + B * 114/1000`, rounded to nearest.
pub const fn luma(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb;
    let weighted =
        r as u32 * RED_WEIGHT + g as u32 * GREEN_WEIGHT + b as u32 * BLUE_WEIGHT + ROUNDING;
    (weighted >> 16) as u8
}

/// Convert an RGB image to single-channel luminance
pub fn to_luma_image(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(image.get_pixel(x, y).0)])
    })
}
