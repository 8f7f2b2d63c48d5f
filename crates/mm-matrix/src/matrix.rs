use std::fmt;
use std::ops::Index;

use crate::backend::MatmulBackend;
use crate::dtype::{DType, Element};
use crate::error::{MatrixError, Result};

/// A dense square matrix.
///
/// Holds `n * n` elements in contiguous row-major order. Multiplication is
/// dispatched to a `MatmulBackend`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) n: usize,
}

impl<T: Element> Matrix<T> {
    /// Create an `n x n` matrix from row-major data.
    ///
    /// # Errors
    /// Returns `InvalidSize` if `n * n` overflows `usize` or
    /// `data.len() != n * n`.
    pub fn new(n: usize, data: Vec<T>) -> Result<Self> {
        let len = element_count(n)?;
        if data.len() != len {
            return Err(MatrixError::InvalidSize {
                n,
                reason: format!("expected {} elements, got {}", len, data.len()),
            });
        }
        Ok(Matrix { data, n })
    }

    /// Create a matrix from a list of rows.
    ///
    /// Every row must have as many elements as there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(element_count(n)?);
        for row in rows {
            if row.len() != n {
                return Err(MatrixError::DimensionMismatch {
                    expected: n,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Matrix { data, n })
    }

    /// Create a matrix by evaluating `f(row, col)` for every position.
    ///
    /// # Panics
    /// Panics if `n * n` overflows `usize`.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(expect_count(n));
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Matrix { data, n }
    }

    /// Create a zero-filled `n x n` matrix.
    ///
    /// # Panics
    /// Panics if `n * n` overflows `usize`. See [`Matrix::try_zeros`].
    pub fn zeros(n: usize) -> Self {
        Matrix {
            data: vec![T::zero(); expect_count(n)],
            n,
        }
    }

    /// Create a zero-filled `n x n` matrix.
    ///
    /// # Errors
    /// Returns `InvalidSize` if `n * n` overflows `usize`.
    pub fn try_zeros(n: usize) -> Result<Self> {
        Ok(Matrix {
            data: vec![T::zero(); element_count(n)?],
            n,
        })
    }

    /// Create the `n x n` identity matrix.
    ///
    /// # Panics
    /// Panics if `n * n` overflows `usize`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Dimension `n` of this `n x n` matrix.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns true for the empty `0 x 0` matrix.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Returns the element at (`row`, `col`), or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.n && col < self.n {
            Some(self.data[row * self.n + col])
        } else {
            None
        }
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= dim()`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Returns the underlying row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }

    /// Matrix product `self @ other` computed by the given backend.
    pub fn matmul(&self, other: &Matrix<T>, backend: &dyn MatmulBackend<T>) -> Result<Matrix<T>> {
        if self.n != other.n {
            return Err(MatrixError::DimensionMismatch {
                expected: self.n,
                got: other.n,
            });
        }
        backend.matmul(self, other)
    }
}

/// Number of elements in an `n x n` matrix.
fn element_count(n: usize) -> Result<usize> {
    n.checked_mul(n).ok_or_else(|| MatrixError::InvalidSize {
        n,
        reason: "element count overflows usize".to_string(),
    })
}

fn expect_count(n: usize) -> usize {
    match element_count(n) {
        Ok(len) => len,
        Err(e) => panic!("{}", e),
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.n && col < self.n,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.n,
            self.n
        );
        &self.data[row * self.n + col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.n {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.n {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[i * self.n + j])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::NaiveBackend;

    #[test]
    fn test_new_matrix() {
        let m = Matrix::new(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.dtype(), DType::I32);
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_new_length_mismatch() {
        let err = Matrix::new(2, vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidSize { n: 2, .. }));
    }

    /// Smallest dimension whose square does not fit in `usize`.
    const OVERFLOWING_DIM: usize = 1 << (usize::BITS / 2);

    #[test]
    fn test_new_overflowing_dimension() {
        let err = Matrix::<i32>::new(OVERFLOWING_DIM, vec![]).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidSize { n, .. } if n == OVERFLOWING_DIM));
    }

    #[test]
    fn test_try_zeros_overflowing_dimension() {
        assert!(matches!(
            Matrix::<i64>::try_zeros(OVERFLOWING_DIM),
            Err(MatrixError::InvalidSize { .. })
        ));
        assert_eq!(Matrix::<i64>::try_zeros(2).unwrap(), Matrix::zeros(2));
    }

    #[test]
    #[should_panic(expected = "element count overflows usize")]
    fn test_zeros_overflowing_dimension_panics() {
        let _ = Matrix::<i32>::zeros(OVERFLOWING_DIM);
    }

    #[test]
    #[should_panic(expected = "element count overflows usize")]
    fn test_from_fn_overflowing_dimension_panics() {
        let _ = Matrix::from_fn(OVERFLOWING_DIM, |_, _| 0i32);
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.row(1), &[3, 4]);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_empty() {
        let m = Matrix::<i32>::from_rows(vec![]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.to_string(), "[]");
    }

    #[test]
    fn test_zeros_identity() {
        let z = Matrix::<i64>::zeros(3);
        assert!(z.as_slice().iter().all(|&v| v == 0));

        let i = Matrix::<i64>::identity(3);
        assert_eq!(i.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_from_fn() {
        let m = Matrix::from_fn(2, |i, j| (i * 10 + j) as i32);
        assert_eq!(m.as_slice(), &[0, 1, 10, 11]);
    }

    #[test]
    fn test_get() {
        let m = Matrix::new(2, vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.get(1, 1), Some(4.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let m = Matrix::<i32>::zeros(2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_display() {
        let m = Matrix::new(2, vec![19, 22, 43, 50]).unwrap();
        assert_eq!(m.to_string(), "[[19, 22], [43, 50]]");
    }

    #[test]
    fn test_matmul() {
        let backend = NaiveBackend::new();
        let a = Matrix::new(2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::new(2, vec![5, 6, 7, 8]).unwrap();
        let c = a.matmul(&b, &backend).unwrap();
        assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let backend = NaiveBackend::new();
        let a = Matrix::<i32>::zeros(2);
        let b = Matrix::<i32>::zeros(4);
        assert!(a.matmul(&b, &backend).is_err());
    }
}
