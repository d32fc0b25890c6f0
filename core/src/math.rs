// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Exact integer arithmetic that fails instead of wrapping.
//!
//! Every arithmetic method of the amount types goes through these helpers so
//! that overflow is always reported as [`ArithmeticError::Overflow`].

use crate::error::{ArithmeticError, Result};

/// Checked arithmetic returning [`ArithmeticError`] on failure.
pub trait Exact: Sized + Copy {
    /// `self + rhs`, failing on overflow.
    fn add_exact(self, rhs: Self) -> Result<Self>;

    /// `self - rhs`, failing on overflow.
    fn subtract_exact(self, rhs: Self) -> Result<Self>;

    /// `self * rhs`, failing on overflow.
    fn multiply_exact(self, rhs: Self) -> Result<Self>;

    /// `-self`, failing for the minimum value.
    fn negate_exact(self) -> Result<Self>;

    /// `|self|`, failing for the minimum value.
    fn abs_exact(self) -> Result<Self>;

    /// `self / rhs` truncated toward zero, failing on a zero divisor or on
    /// `MIN / -1`.
    fn divide(self, rhs: Self) -> Result<Self>;
}

macro_rules! impl_exact {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Exact for $t {
                #[inline]
                fn add_exact(self, rhs: Self) -> Result<Self> {
                    self.checked_add(rhs).ok_or(ArithmeticError::Overflow.into())
                }

                #[inline]
                fn subtract_exact(self, rhs: Self) -> Result<Self> {
                    self.checked_sub(rhs).ok_or(ArithmeticError::Overflow.into())
                }

                #[inline]
                fn multiply_exact(self, rhs: Self) -> Result<Self> {
                    self.checked_mul(rhs).ok_or(ArithmeticError::Overflow.into())
                }

                #[inline]
                fn negate_exact(self) -> Result<Self> {
                    self.checked_neg().ok_or(ArithmeticError::Overflow.into())
                }

                #[inline]
                fn abs_exact(self) -> Result<Self> {
                    self.checked_abs().ok_or(ArithmeticError::Overflow.into())
                }

                #[inline]
                fn divide(self, rhs: Self) -> Result<Self> {
                    if rhs == 0 {
                        return Err(ArithmeticError::DivisionByZero.into());
                    }
                    self.checked_div(rhs).ok_or(ArithmeticError::Overflow.into())
                }
            }
        )+
    };
}

impl_exact!(i32, i64, i128);

/// Narrow an `i64` to `i32`, failing when it does not fit.
pub fn to_int_exact(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| ArithmeticError::Overflow.into())
}

/// Narrow an `i128` to `i64`, failing when it does not fit.
pub(crate) fn to_long_exact(value: i128) -> Result<i64> {
    i64::try_from(value).map_err(|_| ArithmeticError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn adds_and_subtracts_exactly() {
        assert_eq!(1_i32.add_exact(2).unwrap(), 3);
        assert_eq!((-5_i64).subtract_exact(7).unwrap(), -12);
        assert_eq!(
            i32::MAX.add_exact(1),
            Err(Error::Arithmetic(ArithmeticError::Overflow))
        );
        assert_eq!(
            i64::MIN.subtract_exact(1),
            Err(Error::Arithmetic(ArithmeticError::Overflow))
        );
    }

    #[test]
    fn multiplies_exactly() {
        assert_eq!(12_i32.multiply_exact(-3).unwrap(), -36);
        assert!(i32::MAX.multiply_exact(2).unwrap_err().is_arithmetic());
        assert!((i32::MIN).multiply_exact(-1).is_err());
    }

    #[test]
    fn negates_and_abs_fail_on_min() {
        assert_eq!(5_i32.negate_exact().unwrap(), -5);
        assert_eq!((-5_i32).abs_exact().unwrap(), 5);
        assert!(i32::MIN.negate_exact().is_err());
        assert!(i32::MIN.abs_exact().is_err());
        assert!(i64::MIN.abs_exact().is_err());
    }

    #[test]
    fn divides_toward_zero() {
        #[rustfmt::skip]
        let cases = [
            (12, -3, -4),
            (-4, -3, 1),
            (-7, 2, -3),
            (7, 2, 3),
            (0, 5, 0),
        ];
        for (a, b, expected) in cases {
            assert_eq!(a.divide(b).unwrap(), expected, "{a} / {b}");
        }

        assert_eq!(
            1_i32.divide(0),
            Err(Error::Arithmetic(ArithmeticError::DivisionByZero))
        );
        assert_eq!(
            i32::MIN.divide(-1),
            Err(Error::Arithmetic(ArithmeticError::Overflow))
        );
    }

    #[test]
    fn narrows_exactly() {
        assert_eq!(to_int_exact(42).unwrap(), 42);
        assert!(to_int_exact(i64::from(i32::MAX) + 1).is_err());
        assert!(to_long_exact(i128::from(i64::MIN) - 1).is_err());
    }
}
