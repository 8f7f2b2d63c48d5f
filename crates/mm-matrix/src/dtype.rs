use std::fmt::{self, Debug};
use std::ops::{Add, Mul, Sub};

use half::f16;
use num_traits::{One, WrappingAdd, WrappingMul, WrappingSub, Zero};

/// Element types a `Matrix` can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 16-bit floating point (IEEE 754 half-precision, via the `half` crate).
    F16,
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    F64,
}

impl DType {
    pub fn name(&self) -> &'static str {
        match self {
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::F16 => "f16",
            DType::F32 => "f32",
            DType::F64 => "f64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric ring element: closed under `+`, `-` and `*`, with `0` and `1`.
///
/// Kernels combine elements through `radd`, `rsub` and `rmul` rather than the
/// operators. Integers wrap, so arithmetic is exact modulo 2^bits and a
/// product that fits the type comes out exact even when Strassen's
/// intermediate sums do not fit. Floats use the plain operators.
pub trait Element:
    Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + 'static
{
    const DTYPE: DType;

    fn radd(self, rhs: Self) -> Self;

    fn rsub(self, rhs: Self) -> Self;

    fn rmul(self, rhs: Self) -> Self;
}

macro_rules! impl_wrapping_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn radd(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }

                #[inline]
                fn rsub(self, rhs: Self) -> Self {
                    WrappingSub::wrapping_sub(&self, &rhs)
                }

                #[inline]
                fn rmul(self, rhs: Self) -> Self {
                    WrappingMul::wrapping_mul(&self, &rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn radd(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn rsub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn rmul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_wrapping_element! {
    i32 => I32,
    i64 => I64,
}

impl_float_element! {
    f16 => F16,
    f32 => F32,
    f64 => F64,
}
