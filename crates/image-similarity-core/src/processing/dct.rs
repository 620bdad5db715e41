//! 2D forward DCT-II over the luminance grid.
//!
//! Computes `C[u][v] = sum_ij M[i][j] * cos(pi/N*(i+0.5)*u) * cos(pi/N*(j+0.5)*v)`
//! with no orthonormal scaling: the signature thresholds coefficients against
//! their own mean, so a global scale factor cancels out. Evaluated as two
//! separable 1D passes (rows, then columns) over a precomputed cosine basis.

use std::f64::consts::PI;

use once_cell::sync::Lazy;

use super::luma::GRID_LEN;
use super::resample::GRID_SIZE;

const N: usize = GRID_SIZE as usize;

/// Cosine basis: `BASIS[k][n] = cos(pi/N * (n + 0.5) * k)`
static BASIS: Lazy<[[f64; N]; N]> = Lazy::new(|| {
    let mut basis = [[0.0; N]; N];
    for (k, row) in basis.iter_mut().enumerate() {
        for (n, value) in row.iter_mut().enumerate() {
            *value = (PI / N as f64 * (n as f64 + 0.5) * k as f64).cos();
        }
    }
    basis
});

fn dct_1d(input: &[f64], output: &mut [f64]) {
    for (k, out) in output.iter_mut().enumerate() {
        let mut acc = 0.0;
        for (n, &value) in input.iter().enumerate() {
            acc += value * BASIS[k][n];
        }
        *out = acc;
    }
}

/// In-place 2D DCT-II of the row-major 32x32 matrix
pub fn forward_dct_2d(matrix: &mut [f64; GRID_LEN]) {
    let mut row_pass = [0.0; GRID_LEN];
    for (row_in, row_out) in matrix
        .chunks_exact(N)
        .zip(row_pass.chunks_exact_mut(N))
    {
        dct_1d(row_in, row_out);
    }

    let mut column = [0.0; N];
    let mut transformed = [0.0; N];
    for x in 0..N {
        for y in 0..N {
            column[y] = row_pass[y * N + x];
        }
        dct_1d(&column, &mut transformed);
        for y in 0..N {
            matrix[y * N + x] = transformed[y];
        }
    }
}
