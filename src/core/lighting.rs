//! The precomputed lighting table and the per-frame rotation pipeline.
//!
//! The offline precompute pass projects incident lighting onto 9 SH basis
//! functions per color channel and hands us the result as a 9×3 table
//! (rows = basis index 0..=8, columns = R, G, B). At render time the table
//! is rotated band by band and packed into three 3×3 matrices, one per
//! channel, for the shader's quadratic-form irradiance evaluation.

use nalgebra::{Matrix3, Matrix4, SMatrix};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rotation::{band1_operator, band2_operator};
use super::sh::SH_COEFF_COUNT;

/// Errors that can occur when building a coefficient table from raw data.
#[derive(Debug, Error)]
pub enum ShTableError {
    #[error("expected 9 coefficient rows (bands 0..=2), got {0}")]
    WrongRowCount(usize),

    #[error("expected 27 values (9 rows x 3 channels), got {0}")]
    WrongLength(usize),
}

/// A 9×3 table of SH lighting coefficients (basis index × color channel).
///
/// Produced once by the offline precompute step and treated as immutable
/// here; rotation returns a fresh table. Row 0 is the band-0 constant term,
/// rows 1..=3 are band 1, rows 4..=8 are band 2.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShTable {
    coeffs: SMatrix<f32, 9, 3>,
}

impl ShTable {
    /// Build a table from 9 rows of [R, G, B] coefficients.
    pub fn from_rows(rows: [[f32; 3]; SH_COEFF_COUNT]) -> Self {
        Self {
            coeffs: SMatrix::from_fn(|row, col| rows[row][col]),
        }
    }

    /// Build a table from a slice of rows, failing fast on a row-count
    /// mismatch instead of reading out of bounds.
    pub fn try_from_rows(rows: &[[f32; 3]]) -> Result<Self, ShTableError> {
        if rows.len() != SH_COEFF_COUNT {
            return Err(ShTableError::WrongRowCount(rows.len()));
        }
        Ok(Self {
            coeffs: SMatrix::from_fn(|row, col| rows[row][col]),
        })
    }

    /// Build a table from 27 row-major values (r0 R,G,B, r1 R,G,B, ...),
    /// the flat layout the precompute step emits.
    pub fn try_from_slice(values: &[f32]) -> Result<Self, ShTableError> {
        if values.len() != SH_COEFF_COUNT * 3 {
            return Err(ShTableError::WrongLength(values.len()));
        }
        Ok(Self {
            coeffs: SMatrix::from_fn(|row, col| values[row * 3 + col]),
        })
    }

    /// The underlying 9×3 coefficient matrix.
    pub fn as_matrix(&self) -> &SMatrix<f32, 9, 3> {
        &self.coeffs
    }

    /// A single coefficient by basis index (0..=8) and channel (0..=2).
    pub fn coefficient(&self, index: usize, channel: usize) -> f32 {
        self.coeffs[(index, channel)]
    }

    /// Rotate the lighting by a 4×4 pure-rotation matrix.
    ///
    /// Row 0 is copied unchanged (the constant term is rotation-invariant);
    /// rows 1..=3 and 4..=8 go through the band-1 and band-2 operators. Each
    /// operator is applied to the whole 3-column block at once, since the
    /// rotation is channel-independent.
    ///
    /// The orthonormality of `rotation` is a caller precondition, not
    /// validated here (see `core::rotation`).
    pub fn rotated(&self, rotation: &Matrix4<f32>) -> Self {
        let mut coeffs = self.coeffs;

        let m3 = band1_operator(rotation);
        let band1 = self.coeffs.fixed_view::<3, 3>(1, 0).into_owned();
        coeffs.fixed_view_mut::<3, 3>(1, 0).copy_from(&(m3 * band1));

        let m5 = band2_operator(rotation);
        let band2 = self.coeffs.fixed_view::<5, 3>(4, 0).into_owned();
        coeffs.fixed_view_mut::<5, 3>(4, 0).copy_from(&(m5 * band2));

        Self { coeffs }
    }

    /// Pack the table into three 3×3 matrices, one per color channel.
    ///
    /// Channel c is laid out row-major as
    ///
    /// ```text
    /// | L[0][c] L[1][c] L[2][c] |
    /// | L[3][c] L[4][c] L[5][c] |
    /// | L[6][c] L[7][c] L[8][c] |
    /// ```
    ///
    /// The shader evaluates irradiance as `n · M[c] · n` with the surface
    /// normal in homogeneous form, so this exact layout is a correctness
    /// contract with the shader, not a convention choice.
    pub fn channel_matrices(&self) -> [Matrix3<f32>; 3] {
        std::array::from_fn(|c| {
            Matrix3::new(
                self.coeffs[(0, c)],
                self.coeffs[(1, c)],
                self.coeffs[(2, c)],
                self.coeffs[(3, c)],
                self.coeffs[(4, c)],
                self.coeffs[(5, c)],
                self.coeffs[(6, c)],
                self.coeffs[(7, c)],
                self.coeffs[(8, c)],
            )
        })
    }

    /// The full per-frame pipeline: rotate, then pack for the shader.
    pub fn rotated_channel_matrices(&self, rotation: &Matrix4<f32>) -> [Matrix3<f32>; 3] {
        self.rotated(rotation).channel_matrices()
    }
}
