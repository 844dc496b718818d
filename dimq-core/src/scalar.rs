//! Numeric payloads of a quantity.
//!
//! [`Scalar`] is implemented for the signed integer types and for `f32`/`f64`. It bundles what the
//! quantity arithmetic needs from a payload:
//!
//! - checked `+ - * /` and negation, reporting [`QuantityError::Overflow`] and
//!   [`QuantityError::DivisionByZero`] instead of wrapping or panicking;
//! - multiplication by a [`Ratio`] (numerator first, then denominator);
//! - equality at machine epsilon ([`approx_eq`]).
//!
//! Floating-point payloads follow IEEE-754 for overflow (the result becomes infinite) but still reject
//! division by zero.

use crate::error::{QuantityError, QuantityResult};
use crate::ratio::Ratio;
use core::fmt::{Debug, Display};
use num_traits::{NumCast, One, Zero};

/// Backing numeric type of a [`Quantity`](crate::Quantity).
pub trait Scalar:
    Copy + PartialEq + PartialOrd + Debug + Display + Zero + One + NumCast + Send + Sync + 'static
{
    /// Equality tolerance: machine epsilon for floats, zero for integers.
    const EPSILON: Self;

    /// Equality at [`Self::EPSILON`]: `|self - other| < EPSILON` for floats, `==` for integers.
    fn approx_eq(self, other: Self) -> bool;

    /// Checked addition.
    fn try_add(self, rhs: Self) -> QuantityResult<Self>;

    /// Checked subtraction.
    fn try_sub(self, rhs: Self) -> QuantityResult<Self>;

    /// Checked multiplication.
    fn try_mul(self, rhs: Self) -> QuantityResult<Self>;

    /// Checked division; a zero divisor is always an error.
    fn try_div(self, rhs: Self) -> QuantityResult<Self>;

    /// Checked negation.
    fn try_neg(self) -> QuantityResult<Self>;

    /// `true` if `self / rhs` has no remainder. Always `true` for floats.
    fn divides_exactly(self, rhs: Self) -> bool;

    /// Converts a ratio part into this type.
    ///
    /// # Errors
    ///
    /// [`QuantityError::Overflow`] if `part` is out of range (e.g. `1000` for `i8`).
    #[inline]
    fn from_part(part: i64) -> QuantityResult<Self> {
        <Self as NumCast>::from(part).ok_or(QuantityError::Overflow)
    }

    /// `self * factor`, multiplying by the numerator before dividing by the denominator.
    ///
    /// Integer payloads truncate toward zero when the factor does not divide evenly; use
    /// [`Scalar::scale_exact`] to reject that instead.
    #[inline]
    fn scale(self, factor: Ratio) -> QuantityResult<Self> {
        if factor.is_one() {
            return Ok(self);
        }
        let num = Self::from_part(factor.num())?;
        let den = Self::from_part(factor.den())?;
        self.try_mul(num)?.try_div(den)
    }

    /// Like [`Scalar::scale`], but fails with [`QuantityError::PrecisionLoss`] instead of truncating.
    #[inline]
    fn scale_exact(self, factor: Ratio) -> QuantityResult<Self> {
        if factor.is_one() {
            return Ok(self);
        }
        let num = Self::from_part(factor.num())?;
        let den = Self::from_part(factor.den())?;
        let product = self.try_mul(num)?;
        if !product.divides_exactly(den) {
            return Err(QuantityError::PrecisionLoss {
                num: factor.num(),
                den: factor.den(),
            });
        }
        product.try_div(den)
    }
}

/// Epsilon-bounded equality for floats, exact equality for integers.
///
/// ```rust
/// use dimq_core::approx_eq;
///
/// assert!(approx_eq(0.0_f64, f64::EPSILON / 2.0));
/// assert!(!approx_eq(0.0_f64, f64::EPSILON));
/// assert!(approx_eq(7_i64, 7));
/// ```
#[inline]
pub fn approx_eq<N: Scalar>(x: N, y: N) -> bool {
    x.approx_eq(y)
}

#[cold]
fn division_by_zero<N: Debug>(lhs: N) -> QuantityError {
    log::debug!("division of {lhs:?} by zero");
    QuantityError::DivisionByZero
}

#[cold]
fn overflow<N: Debug>(lhs: N, rhs: N, op: &str) -> QuantityError {
    log::debug!("scalar overflow: {lhs:?} {op} {rhs:?}");
    QuantityError::Overflow
}

macro_rules! impl_scalar_int {
    ($($t:ty),+ $(,)?) => {$(
        impl Scalar for $t {
            const EPSILON: Self = 0;

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn try_add(self, rhs: Self) -> QuantityResult<Self> {
                <$t>::checked_add(self, rhs).ok_or_else(|| overflow(self, rhs, "+"))
            }

            #[inline]
            fn try_sub(self, rhs: Self) -> QuantityResult<Self> {
                <$t>::checked_sub(self, rhs).ok_or_else(|| overflow(self, rhs, "-"))
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> QuantityResult<Self> {
                <$t>::checked_mul(self, rhs).ok_or_else(|| overflow(self, rhs, "*"))
            }

            #[inline]
            fn try_div(self, rhs: Self) -> QuantityResult<Self> {
                if rhs == 0 {
                    return Err(division_by_zero(self));
                }
                // MIN / -1 is the only remaining failure.
                <$t>::checked_div(self, rhs).ok_or_else(|| overflow(self, rhs, "/"))
            }

            #[inline]
            fn try_neg(self) -> QuantityResult<Self> {
                <$t>::checked_neg(self).ok_or_else(|| overflow(0, self, "-"))
            }

            #[inline]
            fn divides_exactly(self, rhs: Self) -> bool {
                rhs != 0 && <$t>::checked_rem(self, rhs) == Some(0)
            }
        }
    )+};
}

macro_rules! impl_scalar_float {
    ($($t:ty => $fabs:path),+ $(,)?) => {$(
        impl Scalar for $t {
            const EPSILON: Self = <$t>::EPSILON;

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                let diff = self - other;
                #[cfg(feature = "std")]
                let diff = diff.abs();
                #[cfg(not(feature = "std"))]
                let diff = $fabs(diff);
                diff < <$t>::EPSILON
            }

            #[inline]
            fn try_add(self, rhs: Self) -> QuantityResult<Self> {
                Ok(self + rhs)
            }

            #[inline]
            fn try_sub(self, rhs: Self) -> QuantityResult<Self> {
                Ok(self - rhs)
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> QuantityResult<Self> {
                Ok(self * rhs)
            }

            #[inline]
            fn try_div(self, rhs: Self) -> QuantityResult<Self> {
                if rhs == 0.0 {
                    return Err(division_by_zero(self));
                }
                Ok(self / rhs)
            }

            #[inline]
            fn try_neg(self) -> QuantityResult<Self> {
                Ok(-self)
            }

            #[inline]
            fn divides_exactly(self, _rhs: Self) -> bool {
                true
            }
        }
    )+};
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_float!(f32 => libm::fabsf, f64 => libm::fabs);
