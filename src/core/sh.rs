//! Spherical harmonics basis evaluation.
//!
//! The precomputed lighting is stored in the real SH basis up to band 2,
//! which is 9 coefficients per color channel. This module evaluates those
//! 9 basis functions at a direction using the standard closed-form
//! polynomials in (x, y, z).
//!
//! Ordering is (band, function-within-band):
//! - Band 0 (1 function): index 0
//! - Band 1 (3 functions): indices 1..=3, i.e. Y_1^{-1}, Y_1^0, Y_1^1
//! - Band 2 (5 functions): indices 4..=8, i.e. Y_2^{-2} .. Y_2^2
//!
//! Signs follow the Condon-Shortley convention, matching the offline
//! projection pass that produced the coefficient table.

use nalgebra::{Vector3, Vector4};

/// Number of SH basis functions through band 2.
pub const SH_COEFF_COUNT: usize = 9;

// Normalization constants of the real SH basis:
// Y_0^0       = 1/2 * sqrt(1/pi)
// Y_1^m       = sqrt(3/(4 pi))  * {-y, z, -x}
// Y_2^{-2,±1} = 1/2 * sqrt(15/pi) * {xy, -yz, -xz}
// Y_2^0       = 1/4 * sqrt(5/pi) * (3z^2 - 1)
// Y_2^2       = 1/4 * sqrt(15/pi) * (x^2 - y^2)
const C0: f32 = 0.282_094_79;
const C1: f32 = 0.488_602_51;
const C2: f32 = 1.092_548_4;
const C3: f32 = 0.315_391_57;
const C4: f32 = 0.546_274_2;

/// Evaluate the 9 real SH basis functions at a direction.
///
/// The direction must be a unit vector; no normalization is performed here,
/// so a non-unit input yields a scaled (but deterministic) result. Pure
/// function, stable for components in [-1, 1].
pub fn sh_basis(direction: &Vector3<f32>) -> [f32; SH_COEFF_COUNT] {
    let (x, y, z) = (direction.x, direction.y, direction.z);

    [
        C0,
        -C1 * y,
        C1 * z,
        -C1 * x,
        C2 * x * y,
        -C2 * y * z,
        C3 * (3.0 * z * z - 1.0),
        -C2 * x * z,
        C4 * (x * x - y * y),
    ]
}

/// Evaluate the SH basis at a homogeneous direction, ignoring the w component.
///
/// The renderer carries directions as 4-vectors so they can be multiplied by
/// 4×4 transforms; only the xyz part is meaningful here.
pub fn sh_basis_homogeneous(direction: &Vector4<f32>) -> [f32; SH_COEFF_COUNT] {
    sh_basis(&direction.xyz())
}
