//! Unit tests for the SH rotation invariants the renderer relies on.
//!
//! Each test checks one property with simple numbers: identity is a no-op,
//! the constant band never moves, rotations invert and compose the way the
//! underlying 3D rotations do, and degenerate inputs stay finite.

use approx::assert_relative_eq;
use nalgebra::{Matrix3, Matrix4, UnitQuaternion};
use prt_rs::{band2_operator, ShTable, SH_COEFF_COUNT};

fn euler_rotation(roll: f32, pitch: f32, yaw: f32) -> Matrix4<f32> {
    UnitQuaternion::from_euler_angles(roll, pitch, yaw).to_homogeneous()
}

/// A lighting table with every slot distinct, loosely shaped like a real
/// environment projection (large constant term, smaller higher bands).
fn sample_table() -> ShTable {
    ShTable::from_rows([
        [1.20, 1.10, 0.95],
        [0.30, 0.25, 0.20],
        [-0.15, -0.10, -0.05],
        [0.05, 0.08, 0.12],
        [0.02, -0.03, 0.04],
        [-0.07, 0.06, -0.05],
        [0.10, 0.09, 0.08],
        [0.01, -0.02, 0.03],
        [-0.04, 0.05, -0.06],
    ])
}

fn assert_tables_close(a: &ShTable, b: &ShTable, epsilon: f32) {
    for row in 0..SH_COEFF_COUNT {
        for channel in 0..3 {
            assert_relative_eq!(
                a.coefficient(row, channel),
                b.coefficient(row, channel),
                epsilon = epsilon
            );
        }
    }
}

#[test]
fn test_identity_rotation_is_a_noop() {
    let table = sample_table();
    let rotated = table.rotated(&Matrix4::identity());
    assert_tables_close(&table, &rotated, 1e-5);
}

#[test]
fn test_band0_row_is_never_transformed() {
    let table = sample_table();
    let rotated = table.rotated(&euler_rotation(1.1, -0.7, 2.3));

    // The constant term is copied, not recomputed, so equality is exact.
    for channel in 0..3 {
        assert_eq!(
            table.coefficient(0, channel),
            rotated.coefficient(0, channel)
        );
    }
}

#[test]
fn test_rotation_round_trips_through_transpose() {
    let table = sample_table();
    let rot = euler_rotation(0.5, 1.2, -0.8);

    // R is orthonormal, so its transpose is its inverse.
    let back = table.rotated(&rot).rotated(&rot.transpose());
    assert_tables_close(&table, &back, 1e-4);
}

#[test]
fn test_rotations_compose() {
    let table = sample_table();
    let r1 = euler_rotation(0.3, -0.4, 0.9);
    let r2 = euler_rotation(-1.0, 0.2, 0.6);

    let stepwise = table.rotated(&r1).rotated(&r2);
    let composed = table.rotated(&(r2 * r1));
    assert_tables_close(&stepwise, &composed, 1e-4);
}

#[test]
fn test_constant_only_lighting_packs_to_constant_matrices() {
    // Only the rotation-invariant term is non-zero, so any rotation must
    // produce the same three matrices: 1 in the top-left corner, 0 elsewhere.
    let mut rows = [[0.0f32; 3]; SH_COEFF_COUNT];
    rows[0] = [1.0, 1.0, 1.0];
    let table = ShTable::from_rows(rows);

    let expected = Matrix3::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    for rot in [
        Matrix4::identity(),
        euler_rotation(0.1, 0.2, 0.3),
        euler_rotation(-2.8, 1.5, 0.0),
    ] {
        let mats = table.rotated_channel_matrices(&rot);
        for mat in &mats {
            assert_relative_eq!(*mat, expected, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_channel_matrices_follow_the_shader_layout() {
    let table = sample_table();
    let mats = table.channel_matrices();

    for channel in 0..3 {
        for index in 0..SH_COEFF_COUNT {
            assert_relative_eq!(
                mats[channel][(index / 3, index % 3)],
                table.coefficient(index, channel),
                epsilon = 1e-6
            );
        }
    }
}

#[test]
fn test_degenerate_matrix_yields_finite_output() {
    // A rank-deficient 4×4 (every probe collapses onto one line) is not a
    // valid rotation, but the pseudo-inverse path must keep the numbers
    // finite rather than propagating NaN into the uniforms.
    let mut degenerate = Matrix4::<f32>::zeros();
    degenerate[(0, 0)] = 1.0;
    degenerate[(0, 1)] = 1.0;
    degenerate[(0, 2)] = 1.0;

    let m5 = band2_operator(&degenerate);
    assert!(m5.iter().all(|v| v.is_finite()));

    let rotated = sample_table().rotated(&degenerate);
    for row in 0..SH_COEFF_COUNT {
        for channel in 0..3 {
            assert!(rotated.coefficient(row, channel).is_finite());
        }
    }
}
