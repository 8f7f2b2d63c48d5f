//! Elementwise arithmetic on matrices of equal dimension.

use crate::dtype::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// Elementwise sum: `result[i][j] = self[i][j] + other[i][j]`.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, T::radd)
    }

    /// Elementwise difference: `result[i][j] = self[i][j] - other[i][j]`.
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, T::rsub)
    }

    fn zip_with(&self, other: &Matrix<T>, f: impl Fn(T, T) -> T) -> Result<Matrix<T>> {
        if self.n != other.n {
            return Err(MatrixError::DimensionMismatch {
                expected: self.n,
                got: other.n,
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&x, &y)| f(x, y))
            .collect();
        Ok(Matrix { data, n: self.n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add() {
        let a = Matrix::new(2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::new(2, vec![10, 20, 30, 40]).unwrap();
        assert_eq!(a.add(&b).unwrap().as_slice(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_sub() {
        let a = Matrix::new(2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::new(2, vec![10, 20, 30, 40]).unwrap();
        assert_eq!(a.sub(&b).unwrap().as_slice(), &[-9, -18, -27, -36]);
    }

    #[test]
    fn test_add_does_not_mutate_inputs() {
        let a = Matrix::new(2, vec![1i64, 1, 1, 1]).unwrap();
        let b = a.clone();
        let _ = a.add(&b).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_integer_overflow_wraps() {
        let a = Matrix::new(1, vec![i32::MAX]).unwrap();
        let one = Matrix::new(1, vec![1]).unwrap();
        let wrapped = a.add(&one).unwrap();
        assert_eq!(wrapped[(0, 0)], i32::MIN);
        assert_eq!(wrapped.sub(&one).unwrap(), a);
    }

    #[test]
    fn test_float_add_sub() {
        let a = Matrix::new(1, vec![0.1f64]).unwrap();
        let b = Matrix::new(1, vec![0.2f64]).unwrap();
        assert_relative_eq!(a.add(&b).unwrap()[(0, 0)], 0.3, epsilon = 1e-12);
        assert_relative_eq!(a.sub(&b).unwrap()[(0, 0)], -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::<i32>::zeros(2);
        let b = Matrix::<i32>::zeros(4);
        assert_eq!(
            a.add(&b).unwrap_err(),
            MatrixError::DimensionMismatch {
                expected: 2,
                got: 4
            }
        );
        assert!(b.sub(&a).is_err());
    }
}
