//! Block copies between a matrix and its submatrices.
//!
//! `split` extracts an axis-aligned block into a freshly allocated matrix,
//! `join` writes a block back. Both are plain row-by-row copies; no views
//! are shared between a parent and its blocks.

use crate::dtype::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// Copy the `m x m` block starting at (`row_offset`, `col_offset`).
    ///
    /// # Errors
    /// Returns `OutOfBounds` if the block does not fit inside `self`.
    pub fn split(&self, row_offset: usize, col_offset: usize, m: usize) -> Result<Matrix<T>> {
        self.check_block(row_offset, col_offset, m)?;

        let mut data = Vec::with_capacity(m * m);
        for i in 0..m {
            let start = (row_offset + i) * self.n + col_offset;
            data.extend_from_slice(&self.data[start..start + m]);
        }
        Ok(Matrix { data, n: m })
    }

    /// Overwrite the block at (`row_offset`, `col_offset`) with `child`.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if `child` does not fit at that offset.
    pub fn join(&mut self, child: &Matrix<T>, row_offset: usize, col_offset: usize) -> Result<()> {
        let m = child.n;
        self.check_block(row_offset, col_offset, m)?;

        for i in 0..m {
            let start = (row_offset + i) * self.n + col_offset;
            self.data[start..start + m].copy_from_slice(child.row(i));
        }
        Ok(())
    }

    /// Split into the four quadrants `[top-left, top-right, bottom-left, bottom-right]`.
    ///
    /// # Errors
    /// Returns `InvalidSize` if the dimension is zero or odd.
    pub fn quadrants(&self) -> Result<[Matrix<T>; 4]> {
        if self.n == 0 || self.n % 2 != 0 {
            return Err(MatrixError::InvalidSize {
                n: self.n,
                reason: "quadrants require a positive even dimension".to_string(),
            });
        }
        let m = self.n / 2;
        Ok([
            self.split(0, 0, m)?,
            self.split(0, m, m)?,
            self.split(m, 0, m)?,
            self.split(m, m, m)?,
        ])
    }

    /// Assemble a `2m x 2m` matrix from four `m x m` quadrants, in the same
    /// order `quadrants` returns them.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the quadrants differ in size.
    pub fn from_quadrants(quads: [&Matrix<T>; 4]) -> Result<Matrix<T>> {
        let m = quads[0].n;
        if let Some(q) = quads.iter().find(|q| q.n != m) {
            return Err(MatrixError::DimensionMismatch {
                expected: m,
                got: q.n,
            });
        }

        let mut result = Matrix::try_zeros(2 * m)?;
        result.join(quads[0], 0, 0)?;
        result.join(quads[1], 0, m)?;
        result.join(quads[2], m, 0)?;
        result.join(quads[3], m, m)?;
        Ok(result)
    }

    /// Embed `self` in the top-left corner of a zero-filled `target x target`
    /// matrix.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if `target` is smaller than the current dimension.
    pub fn zero_padded(&self, target: usize) -> Result<Matrix<T>> {
        let mut padded = Matrix::try_zeros(target)?;
        padded.join(self, 0, 0)?;
        Ok(padded)
    }

    fn check_block(&self, row_offset: usize, col_offset: usize, m: usize) -> Result<()> {
        let fits = |offset: usize| offset.checked_add(m).is_some_and(|end| end <= self.n);
        if fits(row_offset) && fits(col_offset) {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds {
                row_offset,
                col_offset,
                block: m,
                n: self.n,
            })
        }
    }
}
