//! `mm-matrix` - Dense square matrices for the Strassen workspace.
//!
//! This crate provides:
//! - A `Matrix<T>` type holding row-major `n x n` data
//! - The `Element` trait and `DType` tags for supported element types
//! - Elementwise add/sub and block split/join, the building blocks of
//!   divide-and-conquer multiplication
//! - A `MatmulBackend` trait for pluggable multiplication kernels
//! - A reference `NaiveBackend` implementation

pub mod backend;
pub mod block;
pub mod dtype;
pub mod error;
pub mod matrix;
pub mod naive;
pub mod ops;

// Re-export primary types at the crate root for convenience.
pub use backend::MatmulBackend;
pub use dtype::{DType, Element};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use naive::NaiveBackend;
