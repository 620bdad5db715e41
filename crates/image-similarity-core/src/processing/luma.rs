//! Grayscale reduction.

use image::RgbaImage;

use super::resample::GRID_SIZE;

/// Number of cells in the normalized grid
pub const GRID_LEN: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Pluggable RGB-to-luminance mapping.
///
/// Exactly one strategy ships. The seam exists so an alternative weighting
/// can be swapped in without touching the rest of the pipeline; a
/// gamma-corrected variant existed historically but produced visible
/// artifacting and is not carried.
pub trait LumaStrategy: Send + Sync {
    /// Map one pixel's RGB channels to a luminance value in [0, 255].
    /// Must be pure and independent of neighboring pixels.
    fn luma(&self, r: u8, g: u8, b: u8) -> f64;
}

/// ITU-R BT.601 weighted luma: 0.299 R + 0.587 G + 0.114 B. Alpha is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rec601;

impl LumaStrategy for Rec601 {
    fn luma(&self, r: u8, g: u8, b: u8) -> f64 {
        0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
    }
}

/// Collapse the normalized grid to a row-major luminance matrix
pub fn luma_matrix(grid: &RgbaImage, strategy: &dyn LumaStrategy) -> [f64; GRID_LEN] {
    let mut matrix = [0.0; GRID_LEN];
    for (x, y, pixel) in grid.enumerate_pixels() {
        matrix[(y * GRID_SIZE + x) as usize] = strategy.luma(pixel[0], pixel[1], pixel[2]);
    }
    matrix
}
