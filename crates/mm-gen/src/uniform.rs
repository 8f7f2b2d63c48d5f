use std::cmp::Ordering;

use mm_matrix::{Element, Matrix, MatrixError, Result};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::generator::MatrixGenerator;

/// Fills matrices with values drawn uniformly from `[low, high)`.
///
/// Seeded, so the same seed always produces the same sequence of matrices.
pub struct UniformGenerator<T: SampleUniform> {
    rng: StdRng,
    dist: Uniform<T>,
}

impl<T: Element + SampleUniform + PartialOrd> UniformGenerator<T> {
    /// Create a generator with the given seed and half-open value range.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `low >= high`.
    pub fn new(seed: u64, low: T, high: T) -> Result<Self> {
        if low.partial_cmp(&high) != Some(Ordering::Less) {
            return Err(MatrixError::InvalidConfig(format!(
                "empty value range [{:?}, {:?})",
                low, high
            )));
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new(low, high),
        })
    }
}

impl<T: Element + SampleUniform> MatrixGenerator<T> for UniformGenerator<T> {
    fn name(&self) -> &str {
        "uniform"
    }

    fn generate(&mut self, n: usize) -> Matrix<T> {
        Matrix::from_fn(n, |_, _| self.dist.sample(&mut self.rng))
    }
}
