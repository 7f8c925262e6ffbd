//! # prt-rs: SH irradiance rotation for precomputed radiance transfer
//!
//! In a PRT renderer, incident lighting is projected onto the first three
//! spherical-harmonic bands (9 coefficients per color channel) once, at load
//! time, by an expensive Monte-Carlo pass. When the environment rotates at
//! render time we do not want to redo that pass: each SH band is closed
//! under rotation, so the stored coefficients can be re-derived with two
//! small linear solves per frame.
//!
//! ## Architecture
//!
//! Everything lives in `core`, leaves first:
//!
//! - `core::sh`: closed-form real SH basis evaluation up to band 2
//! - `core::rotation`: per-band rotation operators (3×3 and 5×5), derived by
//!   basis substitution rather than Wigner-D formulas
//! - `core::lighting`: the 9×3 coefficient table, the rotation pipeline, and
//!   the packing into three 3×3 per-channel shader matrices
//!
//! The crate is pure math: no I/O, no GPU state, no shared mutable state.
//! The renderer hands us a coefficient table and a 4×4 rotation each frame
//! and gets back three matrices to bind as uniforms.
//!
//! ## Usage
//!
//! ```
//! use nalgebra::Matrix4;
//! use prt_rs::ShTable;
//!
//! let table = ShTable::from_rows([[0.8, 0.7, 0.6]; 9]);
//! let mats = table.rotated_channel_matrices(&Matrix4::identity());
//! assert_eq!(mats.len(), 3);
//! ```

// Core math: SH basis, band operators, coefficient table
pub mod core;

// Re-export commonly used items at crate root for convenience
pub use core::{
    band1_operator, band2_operator, sh_basis, sh_basis_homogeneous, Matrix5, ShTable,
    ShTableError, SH_COEFF_COUNT,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
