use std::fmt::Debug;

use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::Matrix;

/// Trait for pluggable square matrix multiplication kernels.
///
/// Implementations receive two matrices of equal dimension and return a
/// freshly allocated product. Neither operand is modified.
pub trait MatmulBackend<T: Element>: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "naive", "strassen").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `a` and `b` differ in dimension, plus
    /// whatever size restrictions the backend imposes.
    fn matmul(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>>;
}
