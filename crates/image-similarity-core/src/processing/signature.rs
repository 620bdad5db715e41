//! Low-frequency thresholding and signature comparison.

use std::fmt;

use crate::error::{Error, Result};

use super::luma::GRID_LEN;
use super::resample::GRID_SIZE;

/// Side of the low-frequency block read from the coefficient matrix
const BLOCK_SIZE: usize = 8;

/// Number of bits in a pipeline-produced signature
pub const SIGNATURE_BITS: usize = BLOCK_SIZE * BLOCK_SIZE;

/// A perceptual signature: one bit per low-frequency DCT coefficient.
///
/// Bit `i * 8 + j` of `bits` corresponds to cell `(i, j)` of the 8x8 block,
/// set when the coefficient is at or above the block mean. The pipeline only
/// ever produces 64-bit signatures; the length travels with the bits so the
/// comparator can check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    bits: u64,
    len: usize,
}

impl Signature {
    /// Threshold the 8x8 low-frequency block of a coefficient matrix.
    /// The mean includes the DC term.
    pub fn from_coefficients(coeffs: &[f64; GRID_LEN]) -> Signature {
        let n = GRID_SIZE as usize;

        let mut sum = 0.0;
        for i in 0..BLOCK_SIZE {
            for j in 0..BLOCK_SIZE {
                sum += coeffs[i * n + j];
            }
        }
        let mean = sum / SIGNATURE_BITS as f64;

        let mut bits: u64 = 0;
        for i in 0..BLOCK_SIZE {
            for j in 0..BLOCK_SIZE {
                if coeffs[i * n + j] >= mean {
                    bits |= 1 << (i * BLOCK_SIZE + j);
                }
            }
        }

        Signature {
            bits,
            len: SIGNATURE_BITS,
        }
    }

    /// Rebuild a signature from raw bits.
    ///
    /// `len` is the number of meaningful low-order bits and must not exceed
    /// 64; higher bits are masked off.
    pub fn from_bits(bits: u64, len: usize) -> Signature {
        assert!(len <= 64, "signature length {len} exceeds storage");
        let mask = if len == 64 { u64::MAX } else { (1 << len) - 1 };
        Signature {
            bits: bits & mask,
            len,
        }
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Hamming distance to another signature.
    ///
    /// Signatures of unequal length are not comparable and yield a
    /// `DimensionMismatch` error rather than a panic.
    pub fn distance(&self, other: &Signature) -> Result<u32> {
        if self.len != other.len {
            return Err(Error::DimensionMismatch {
                left: self.len,
                right: other.len,
            });
        }
        Ok((self.bits ^ other.bits).count_ones())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.bits)
    }
}

/// Map two signatures to a similarity score in [0, 100].
///
/// `((64 - distance) * 100) / 64` with truncating integer division:
/// identical signatures score 100, signatures differing in every bit score 0.
pub fn score(a: &Signature, b: &Signature) -> Result<u8> {
    if a.len() != SIGNATURE_BITS || b.len() != SIGNATURE_BITS {
        return Err(Error::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let distance = a.distance(b)? as usize;
    Ok((((SIGNATURE_BITS - distance) * 100) / SIGNATURE_BITS) as u8)
}
