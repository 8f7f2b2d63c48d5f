use mm_matrix::{Element, Matrix};

use crate::generator::MatrixGenerator;

/// Always yields the identity matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityGenerator;

impl<T: Element> MatrixGenerator<T> for IdentityGenerator {
    fn name(&self) -> &str {
        "identity"
    }

    fn generate(&mut self, n: usize) -> Matrix<T> {
        Matrix::identity(n)
    }
}

/// Always yields the zero matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroGenerator;

impl<T: Element> MatrixGenerator<T> for ZeroGenerator {
    fn name(&self) -> &str {
        "zero"
    }

    fn generate(&mut self, n: usize) -> Matrix<T> {
        Matrix::zeros(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let m: Matrix<i32> = IdentityGenerator.generate(3);
        assert_eq!(m, Matrix::identity(3));
        assert_eq!(MatrixGenerator::<i32>::name(&IdentityGenerator), "identity");
    }

    #[test]
    fn test_zero_pair() {
        let (a, b): (Matrix<f64>, Matrix<f64>) = ZeroGenerator.generate_pair(2);
        assert_eq!(a.as_slice(), &[0.0; 4]);
        assert_eq!(a, b);
    }
}
