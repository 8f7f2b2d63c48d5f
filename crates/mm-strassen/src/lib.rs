//! `mm-strassen` - Strassen's divide-and-conquer matrix multiplication.
//!
//! This crate provides:
//! - `MatrixMultiplier`, a `MatmulBackend` computing `C = A @ B` with seven
//!   recursive half-size products per level instead of eight
//! - `StrassenConfig` for the size policy, leaf cutoff and fork-join depth
//! - A `multiply` shortcut using the default configuration
//!
//! Dimensions that are not a power of two are rejected by default; with
//! `SizePolicy::Pad` the operands are zero-padded and the product cropped.
//! With the `parallel` feature, the seven products of shallow frames run on
//! the rayon thread pool.

pub mod config;
pub mod multiplier;
mod strassen;

pub use config::{SizePolicy, StrassenConfig};
pub use multiplier::{multiply, MatrixMultiplier};
