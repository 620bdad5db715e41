//! The signature pipeline: resample, reduce to luma, transform, threshold.

pub mod dct;
pub mod luma;
pub mod resample;
pub mod signature;

pub use luma::{LumaStrategy, Rec601};
pub use signature::{score, Signature, SIGNATURE_BITS};

use image::DynamicImage;

/// Configurable signature pipeline.
///
/// The only knob is the luma strategy; everything else about the pipeline is
/// fixed so that signatures from different call sites stay comparable.
pub struct Hasher {
    luma: Box<dyn LumaStrategy>,
}

impl Default for Hasher {
    fn default() -> Self {
        Self {
            luma: Box::new(Rec601),
        }
    }
}

impl Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_luma_strategy(strategy: Box<dyn LumaStrategy>) -> Self {
        Self { luma: strategy }
    }

    /// Run the full pipeline on a decoded image
    pub fn signature(&self, img: &DynamicImage) -> Signature {
        let grid = resample::normalize(img);
        let mut matrix = luma::luma_matrix(&grid, self.luma.as_ref());
        dct::forward_dct_2d(&mut matrix);
        Signature::from_coefficients(&matrix)
    }
}

/// Run the pipeline with the default (BT.601) luma strategy
pub fn compute_signature(img: &DynamicImage) -> Signature {
    Hasher::default().signature(img)
}
