use mm_matrix::{Element, Matrix};

/// Trait for sources of `n x n` matrices.
pub trait MatrixGenerator<T: Element> {
    /// Returns the name of this generator.
    fn name(&self) -> &str;

    /// Produce the next `n x n` matrix.
    fn generate(&mut self, n: usize) -> Matrix<T>;

    /// Produce two matrices of the same dimension, in generation order.
    fn generate_pair(&mut self, n: usize) -> (Matrix<T>, Matrix<T>) {
        let a = self.generate(n);
        let b = self.generate(n);
        (a, b)
    }
}
