//! Per-band SH rotation operators.
//!
//! Each SH band is closed under rotation: rotating the represented signal
//! maps band-1 coefficients through some 3×3 matrix and band-2 coefficients
//! through some 5×5 matrix (band 0 is rotation-invariant). Rather than the
//! closed-form Wigner-D expressions, the operators are derived by basis
//! substitution:
//!
//! 1. pick a fixed set of probe directions n_i (one per basis function),
//! 2. project each probe into the band: A has P(n_i) as column i,
//! 3. project each *rotated* probe: S has P(R n_i) as column i,
//! 4. the operator is S · A⁻¹.
//!
//! For band 1 the probes are coordinate axes, so A is invertible by
//! construction and an ordinary inverse is used. For band 2 the probe
//! matrix is not provably well-conditioned, so a Moore-Penrose
//! pseudo-inverse keeps the operator defined (least-squares) instead of
//! failing.
//!
//! Preconditions: the supplied 4×4 must be a pure rotation (orthogonal
//! 3×3 block, determinant +1, no translation applied to directions). This
//! is not validated; a non-orthonormal input silently degrades the output.

use nalgebra::{Matrix3, Matrix4, SMatrix, Vector3};
use std::f32::consts::FRAC_1_SQRT_2;

use super::sh::sh_basis;

/// 5×5 matrix, the shape of the band-2 operator.
pub type Matrix5 = SMatrix<f32, 5, 5>;

/// Singular values below this are treated as zero by the pseudo-inverse.
const PINV_EPS: f32 = 1e-6;

/// Probe directions for band 1: the coordinate axes, in the engine's
/// x, z, y order.
fn band1_probes() -> [Vector3<f32>; 3] {
    [Vector3::x(), Vector3::z(), Vector3::y()]
}

/// Probe directions for band 2: two axes plus three diagonals, enough to
/// span the 5 quadratic basis functions.
fn band2_probes() -> [Vector3<f32>; 5] {
    let k = FRAC_1_SQRT_2;
    [
        Vector3::x(),
        Vector3::z(),
        Vector3::new(k, k, 0.0),
        Vector3::new(k, 0.0, k),
        Vector3::new(0.0, k, k),
    ]
}

/// Compute the 3×3 operator that maps band-1 coefficients under `rotation`.
///
/// Only the upper-left 3×3 block of the 4×4 input is used.
pub fn band1_operator(rotation: &Matrix4<f32>) -> Matrix3<f32> {
    let r = rotation.fixed_view::<3, 3>(0, 0).into_owned();

    let mut a = Matrix3::zeros();
    let mut s = Matrix3::zeros();
    for (col, probe) in band1_probes().iter().enumerate() {
        let before = sh_basis(probe);
        let after = sh_basis(&(r * probe));
        for row in 0..3 {
            a[(row, col)] = before[1 + row];
            s[(row, col)] = after[1 + row];
        }
    }

    // With axis probes, A is a signed permutation scaled by the band-1
    // normalization constant; the inverse always exists.
    let a_inv = a.try_inverse().unwrap_or_else(|| a.transpose());
    s * a_inv
}

/// Compute the 5×5 operator that maps band-2 coefficients under `rotation`.
///
/// Uses a pseudo-inverse of the probe matrix, so the result stays finite
/// and defined even if the probe projections turn out rank-deficient.
pub fn band2_operator(rotation: &Matrix4<f32>) -> Matrix5 {
    let r = rotation.fixed_view::<3, 3>(0, 0).into_owned();

    let mut a = Matrix5::zeros();
    let mut s = Matrix5::zeros();
    for (col, probe) in band2_probes().iter().enumerate() {
        let before = sh_basis(probe);
        let after = sh_basis(&(r * probe));
        for row in 0..5 {
            a[(row, col)] = before[4 + row];
            s[(row, col)] = after[4 + row];
        }
    }

    // SVD convergence failure is the only error path; the transpose keeps
    // the result defined in that case.
    let a_pinv = a.pseudo_inverse(PINV_EPS).unwrap_or_else(|_| a.transpose());
    s * a_pinv
}
