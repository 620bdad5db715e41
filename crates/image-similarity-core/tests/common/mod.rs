//! Deterministic image fixtures for the integration tests.
//!
//! Everything is synthesized in-process so the suite has no checked-in
//! binaries: a smooth "photo-like" scene with correlated channels, plus the
//! controlled variants (resized, grayscale, re-encoded) a duplicate detector
//! has to treat as the same picture.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use image::{imageops::FilterType, DynamicImage, ImageBuffer, ImageFormat, Rgb};

fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// A smooth, low-frequency scene: diagonal sky gradient, a soft horizon band,
/// and a bright disc. Channels follow the same structure at different gains,
/// like a real photograph.
pub fn sample_photo() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(320, 240, |x, y| {
        let fx = x as f64 / 320.0;
        let fy = y as f64 / 240.0;

        let mut base = 150.0 - 70.0 * fy + 40.0 * (fx * PI).sin();
        let (dx, dy) = (fx - 0.3, fy - 0.35);
        if dx * dx + dy * dy < 0.04 {
            base += 70.0;
        }
        if fy > 0.75 {
            base -= 50.0;
        }

        Rgb([
            clamp_channel(base),
            clamp_channel(base * 0.85 + 20.0),
            clamp_channel(base * 0.7 + 10.0),
        ])
    }))
}

/// A structurally different scene: vertical bands with inverted brightness
/// ordering relative to `sample_photo`
pub fn other_photo() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(320, 240, |x, y| {
        let fx = x as f64 / 320.0;
        let fy = y as f64 / 240.0;

        let base = 60.0 + 70.0 * fy + 120.0 * if (fx * 4.0) as u32 % 2 == 0 { 1.0 } else { 0.0 };

        Rgb([
            clamp_channel(base * 0.6),
            clamp_channel(base),
            clamp_channel(255.0 - base),
        ])
    }))
}

/// Same visual content at a different resolution
pub fn resized_variant(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    img.resize_exact(width, height, FilterType::Lanczos3)
}

/// Grayscale counterpart with preserved structure
pub fn grayscale_variant(img: &DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma8(img.to_luma8())
}

pub fn write_png(dir: &Path, name: &str, img: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

pub fn write_jpeg(dir: &Path, name: &str, img: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Jpeg).unwrap();
    path
}
