//! Core math for rotating precomputed SH lighting.
//!
//! This module contains the whole numeric pipeline:
//! - `sh`: real SH basis evaluation (bands 0..=2)
//! - `rotation`: per-band rotation operators via basis substitution
//! - `lighting`: the 9×3 coefficient table and per-channel shader matrices
//!
//! All types here are "pure data" - no I/O, no rendering logic.

mod lighting;
mod rotation;
mod sh;

// Re-export public types
pub use lighting::{ShTable, ShTableError};
pub use rotation::{band1_operator, band2_operator, Matrix5};
pub use sh::{sh_basis, sh_basis_homogeneous, SH_COEFF_COUNT};
