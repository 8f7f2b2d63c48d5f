use crate::backend::MatmulBackend;
use crate::dtype::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Reference backend using the canonical triple loop.
///
/// `C[i][j] = sum_k A[i][k] * B[k][j]` in i-j-k order. Accepts any
/// dimension, including zero.
#[derive(Debug, Clone)]
pub struct NaiveBackend;

impl NaiveBackend {
    pub fn new() -> Self {
        NaiveBackend
    }
}

impl Default for NaiveBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> MatmulBackend<T> for NaiveBackend {
    fn name(&self) -> &str {
        "naive"
    }

    fn matmul(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        if a.n != b.n {
            return Err(MatrixError::DimensionMismatch {
                expected: a.n,
                got: b.n,
            });
        }

        let n = a.n;
        let mut c = vec![T::zero(); a.data.len()];
        for i in 0..n {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum.radd(a.data[i * n + k].rmul(b.data[k * n + j]));
                }
                c[i * n + j] = sum;
            }
        }
        Ok(Matrix { data: c, n })
    }
}
