//! Fixed-grid resampling.

use image::{imageops::FilterType, DynamicImage, RgbaImage};

/// Side length of the normalized grid every image is reduced to
pub const GRID_SIZE: u32 = 32;

/// Stretch an image onto the fixed 32x32 grid.
///
/// Both axes scale independently: aspect ratio is deliberately not preserved,
/// so signatures stay comparable across arbitrary source shapes. Lanczos3
/// keeps downsampling aliasing out of the low-frequency coefficients the
/// signature is built from.
pub fn normalize(img: &DynamicImage) -> RgbaImage {
    debug_assert!(
        img.width() > 0 && img.height() > 0,
        "zero-dimension surface"
    );
    img.resize_exact(GRID_SIZE, GRID_SIZE, FilterType::Lanczos3)
        .to_rgba8()
}
