//! Perceptual similarity scoring for raster images.
//!
//! This library answers one question: are these two images visually the same?
//! The score it produces is robust to format re-encoding, resizing, and minor
//! recompression, but sensitive to genuine content differences — the right
//! tradeoff for duplicate detection, near-duplicate search, and cache-key
//! collapsing.
//!
//! Each image runs through a fixed pipeline:
//! - decode (PNG or JPEG, chosen by content sniffing with an extension hint)
//! - resample to a 32x32 grid (Lanczos3, aspect ratio deliberately ignored)
//! - reduce to BT.601 luminance
//! - 2D DCT-II
//! - threshold the 8x8 low-frequency block into a 64-bit signature
//!
//! Two signatures compare by Hamming distance, mapped to an integer score in
//! [0, 100]. The signature is intentionally lossy and collision-prone; it is
//! not a cryptographic hash and carries no tamper evidence.
//!
//! ```no_run
//! let score = image_similarity_core::image_similarity("a.jpg", "b.png")?;
//! if score >= 90 {
//!     println!("visually the same");
//! }
//! # Ok::<(), image_similarity_core::Error>(())
//! ```

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use error::{Error, Result};
pub use processing::{
    compute_signature, score, Hasher, LumaStrategy, Rec601, Signature, SIGNATURE_BITS,
};

// -- Public Modules --
pub mod decode;
pub mod processing;

use std::path::Path;

use log::debug;

/// Compute the perceptual signature of an image file
pub fn signature_from_file<P: AsRef<Path>>(path: P) -> Result<Signature> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let img = decode::decode_bytes(&bytes, decode::format_from_extension(path))?;
    Ok(compute_signature(&img))
}

/// Compute the perceptual signature of an in-memory encoded image
pub fn signature_from_bytes(bytes: &[u8]) -> Result<Signature> {
    let img = decode::decode_bytes(bytes, None)?;
    Ok(compute_signature(&img))
}

/// Score the visual similarity of two image files on a 0-100 scale.
///
/// The two per-image pipelines share no state, so they run on parallel
/// workers. 100 means identical signatures; 0 means every bit differs.
pub fn image_similarity<P: AsRef<Path>, Q: AsRef<Path>>(path_a: P, path_b: Q) -> Result<u8> {
    let (path_a, path_b) = (path_a.as_ref(), path_b.as_ref());
    let (sig_a, sig_b) = rayon::join(
        || signature_from_file(path_a),
        || signature_from_file(path_b),
    );
    let (sig_a, sig_b) = (sig_a?, sig_b?);
    let similarity = score(&sig_a, &sig_b)?;
    debug!(
        "{} ({sig_a}) vs {} ({sig_b}): {similarity}",
        path_a.display(),
        path_b.display()
    );
    Ok(similarity)
}

/// Score the visual similarity of two in-memory encoded images
pub fn image_similarity_from_bytes(bytes_a: &[u8], bytes_b: &[u8]) -> Result<u8> {
    let (sig_a, sig_b) = rayon::join(
        || signature_from_bytes(bytes_a),
        || signature_from_bytes(bytes_b),
    );
    score(&sig_a?, &sig_b?)
}
