use mm_matrix::{Element, MatmulBackend, Matrix, MatrixError, Result};
use tracing::{debug, warn};

use crate::config::{SizePolicy, StrassenConfig};
use crate::strassen::{strassen, Recursion};

/// Square matrix multiplication by Strassen's seven-product recursion.
///
/// Operands must share a positive dimension. Dimensions that are not a power
/// of two are handled according to [`StrassenConfig::size_policy`].
#[derive(Debug, Clone, Default)]
pub struct MatrixMultiplier {
    config: StrassenConfig,
}

impl MatrixMultiplier {
    /// Create a multiplier after validating `config`.
    pub fn new(config: StrassenConfig) -> Result<Self> {
        config.validate()?;
        if config.parallel_depth > 0 && !cfg!(feature = "parallel") {
            warn!(
                parallel_depth = config.parallel_depth,
                "built without the `parallel` feature; products will run sequentially"
            );
        }
        Ok(MatrixMultiplier { config })
    }

    pub fn config(&self) -> &StrassenConfig {
        &self.config
    }

    /// Compute `a @ b`.
    ///
    /// # Errors
    /// - `DimensionMismatch` if `a` and `b` differ in dimension
    /// - `InvalidSize` if the dimension is zero, or is not a power of two
    ///   under [`SizePolicy::Reject`]
    pub fn multiply<T: Element>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        let n = a.dim();
        if n != b.dim() {
            return Err(MatrixError::DimensionMismatch {
                expected: n,
                got: b.dim(),
            });
        }
        if n == 0 {
            return Err(MatrixError::InvalidSize {
                n,
                reason: "cannot multiply empty matrices".to_string(),
            });
        }

        let rec = Recursion {
            leaf_size: self.config.leaf_size,
            parallel_depth: self.config.parallel_depth,
        };

        if n.is_power_of_two() {
            debug!(
                n,
                dtype = %T::DTYPE,
                leaf_size = rec.leaf_size,
                parallel_depth = rec.parallel_depth,
                "strassen multiply"
            );
            return strassen(a, b, 0, rec);
        }

        match self.config.size_policy {
            SizePolicy::Reject => Err(MatrixError::InvalidSize {
                n,
                reason: "dimension is not a power of two".to_string(),
            }),
            SizePolicy::Pad => {
                let padded = n.next_power_of_two();
                debug!(
                    n,
                    padded,
                    dtype = %T::DTYPE,
                    leaf_size = rec.leaf_size,
                    parallel_depth = rec.parallel_depth,
                    "strassen multiply with zero padding"
                );
                let product = strassen(&a.zero_padded(padded)?, &b.zero_padded(padded)?, 0, rec)?;
                product.split(0, 0, n)
            }
        }
    }
}

impl<T: Element> MatmulBackend<T> for MatrixMultiplier {
    fn name(&self) -> &str {
        "strassen"
    }

    fn matmul(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        self.multiply(a, b)
    }
}

/// Multiply with the default configuration (reject non-power-of-two sizes,
/// recurse to scalars, single-threaded).
pub fn multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    MatrixMultiplier::default().multiply(a, b)
}
