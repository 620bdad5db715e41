//! Codec selection and byte-stream decoding.
//!
//! The pipeline never touches codec internals; it only decides which decoder
//! of the `image` crate to hand the bytes to. Selection is content-first:
//! magic-byte sniffing, then the file-extension hint, and a single retry with
//! the alternate codec so mislabeled files (JPEG bytes under a `.png` name)
//! still decode.

use std::path::Path;

use image::DynamicImage;
use log::{debug, warn};

use crate::error::{Error, Result};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Source encodings the pipeline accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Jpeg,
}

impl SourceFormat {
    /// The other supported codec, used for the mismatch retry
    pub fn alternate(self) -> SourceFormat {
        match self {
            SourceFormat::Png => SourceFormat::Jpeg,
            SourceFormat::Jpeg => SourceFormat::Png,
        }
    }

    fn image_format(self) -> image::ImageFormat {
        match self {
            SourceFormat::Png => image::ImageFormat::Png,
            SourceFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }

    fn name(self) -> &'static str {
        match self {
            SourceFormat::Png => "PNG",
            SourceFormat::Jpeg => "JPEG",
        }
    }
}

/// Identify the codec from the leading bytes of the stream
pub fn sniff_format(bytes: &[u8]) -> Option<SourceFormat> {
    if bytes.starts_with(PNG_MAGIC) {
        Some(SourceFormat::Png)
    } else if bytes.starts_with(JPEG_MAGIC) {
        Some(SourceFormat::Jpeg)
    } else {
        None
    }
}

/// Codec hint taken from the file extension, case-insensitive
pub fn format_from_extension<P: AsRef<Path>>(path: P) -> Option<SourceFormat> {
    let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some(SourceFormat::Png),
        "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
        _ => None,
    }
}

/// Decode an in-memory byte stream into a pixel surface.
///
/// The primary codec is the sniffed format, falling back to the extension
/// hint, falling back to PNG. A failed first decode is retried exactly once
/// with the alternate codec before the error is surfaced: corruption when the
/// magic bytes committed us to a codec, an unsupported format otherwise.
pub fn decode_bytes(bytes: &[u8], hint: Option<SourceFormat>) -> Result<DynamicImage> {
    let sniffed = sniff_format(bytes);
    let primary = sniffed.or(hint).unwrap_or(SourceFormat::Png);

    match image::load_from_memory_with_format(bytes, primary.image_format()) {
        Ok(img) => Ok(img),
        Err(first_err) => {
            let alternate = primary.alternate();
            debug!(
                "{} decode failed ({}), retrying as {}",
                primary.name(),
                first_err,
                alternate.name()
            );
            match image::load_from_memory_with_format(bytes, alternate.image_format()) {
                Ok(img) => {
                    warn!(
                        "Input labeled {} decoded as {}; treating as mislabeled",
                        primary.name(),
                        alternate.name()
                    );
                    Ok(img)
                }
                Err(_) if sniffed.is_some() => Err(Error::Decode(first_err)),
                Err(_) => Err(Error::UnsupportedFormat(
                    "neither PNG nor JPEG could decode the input".to_string(),
                )),
            }
        }
    }
}

/// Read a file and decode it, using the extension as the codec hint
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    decode_bytes(&bytes, format_from_extension(path))
}
