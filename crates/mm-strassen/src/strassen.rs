//! The recursive Strassen driver.
//!
//! Each frame splits both operands into quadrants, forms seven products of
//! quadrant sums and differences, and recombines them:
//!
//! ```text
//! p1 = (a11 + a22)(b11 + b22)     c11 = p1 + p4 - p5 + p7
//! p2 = (a21 + a22) b11            c12 = p3 + p5
//! p3 = a11 (b12 - b22)            c21 = p2 + p4
//! p4 = a22 (b21 - b11)            c22 = p1 + p3 - p2 + p6
//! p5 = (a11 + a12) b22
//! p6 = (a21 - a11)(b11 + b12)
//! p7 = (a12 - a22)(b21 + b22)
//! ```
//!
//! Seven half-size products plus O(n^2) additions give
//! T(n) = 7 T(n/2) + O(n^2), i.e. O(n^log2(7)) ~ O(n^2.807).

use std::borrow::Cow;

use mm_matrix::{Element, MatmulBackend, Matrix, NaiveBackend, Result};
use tracing::trace;

/// Settings shared by every frame of a single multiply call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Recursion {
    pub leaf_size: usize,
    pub parallel_depth: usize,
}

type Operands<'a, T> = (Cow<'a, Matrix<T>>, Cow<'a, Matrix<T>>);

/// Multiply two `n x n` matrices, `n` a power of two, at recursion `depth`.
pub(crate) fn strassen<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    depth: usize,
    rec: Recursion,
) -> Result<Matrix<T>> {
    let n = a.dim();
    debug_assert!(n.is_power_of_two(), "strassen called with n={}", n);
    debug_assert_eq!(n, b.dim());

    if n == 1 {
        return Matrix::new(1, vec![a[(0, 0)].rmul(b[(0, 0)])]);
    }
    if n <= rec.leaf_size {
        return NaiveBackend::new().matmul(a, b);
    }

    trace!(n, depth, "strassen frame");

    let [a11, a12, a21, a22] = a.quadrants()?;
    let [b11, b12, b21, b22] = b.quadrants()?;

    // Every combination is materialized before any product consumes it.
    let operands: [Operands<'_, T>; 7] = [
        (Cow::Owned(a11.add(&a22)?), Cow::Owned(b11.add(&b22)?)),
        (Cow::Owned(a21.add(&a22)?), Cow::Borrowed(&b11)),
        (Cow::Borrowed(&a11), Cow::Owned(b12.sub(&b22)?)),
        (Cow::Borrowed(&a22), Cow::Owned(b21.sub(&b11)?)),
        (Cow::Owned(a11.add(&a12)?), Cow::Borrowed(&b22)),
        (Cow::Owned(a21.sub(&a11)?), Cow::Owned(b11.add(&b12)?)),
        (Cow::Owned(a12.sub(&a22)?), Cow::Owned(b21.add(&b22)?)),
    ];

    let products = fan_out(&operands, depth, rec)?;
    let [p1, p2, p3, p4, p5, p6, p7] = products.as_slice() else {
        unreachable!("seven operand pairs yield seven products");
    };

    let c11 = p1.add(p4)?.sub(p5)?.add(p7)?;
    let c12 = p3.add(p5)?;
    let c21 = p2.add(p4)?;
    let c22 = p1.add(p3)?.sub(p2)?.add(p6)?;

    Matrix::from_quadrants([&c11, &c12, &c21, &c22])
}

/// Recursively multiply each operand pair, in order.
///
/// Frames shallower than `parallel_depth` hand the pairs to the rayon pool
/// and wait for all seven before returning.
fn fan_out<T: Element>(
    operands: &[Operands<'_, T>],
    depth: usize,
    rec: Recursion,
) -> Result<Vec<Matrix<T>>> {
    #[cfg(feature = "parallel")]
    {
        if depth < rec.parallel_depth {
            use rayon::prelude::*;

            return operands
                .par_iter()
                .map(|(l, r)| strassen(l, r, depth + 1, rec))
                .collect();
        }
    }

    operands
        .iter()
        .map(|(l, r)| strassen(l, r, depth + 1, rec))
        .collect()
}
