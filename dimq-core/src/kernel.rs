//! Arithmetic on raw `(value, ratio)` pairs.
//!
//! These are the scale rules shared by the statically tagged [`Quantity`](crate::Quantity) and the
//! runtime-tagged [`DynQuantity`](crate::DynQuantity); dimension and exponent checks happen in the
//! callers.

use crate::error::{QuantityError, QuantityResult};
use crate::ratio::Ratio;
use crate::scalar::Scalar;
use core::cmp::Ordering;

/// A raw value together with the ratio it is expressed in.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scaled<N> {
    pub(crate) value: N,
    pub(crate) ratio: Ratio,
}

impl<N: Scalar> Scaled<N> {
    #[inline]
    pub(crate) const fn new(value: N, ratio: Ratio) -> Self {
        Self { value, ratio }
    }
}

/// Re-expresses both operands on their common ratio.
///
/// The factors `ratio / common` are integers, so this is exact for integral payloads unless the
/// multiplication overflows.
pub(crate) fn normalize<N: Scalar>(lhs: Scaled<N>, rhs: Scaled<N>) -> QuantityResult<(N, N, Ratio)> {
    if lhs.ratio == rhs.ratio {
        return Ok((lhs.value, rhs.value, lhs.ratio));
    }
    let common = lhs.ratio.common(rhs.ratio)?;
    let a = lhs.value.scale(lhs.ratio.checked_div(common)?)?;
    let b = rhs.value.scale(rhs.ratio.checked_div(common)?)?;
    Ok((a, b, common))
}

/// `value` re-expressed in units of `target`.
#[inline]
pub(crate) fn cast<N: Scalar>(from: Scaled<N>, target: Ratio) -> QuantityResult<N> {
    from.value.scale(from.ratio.checked_div(target)?)
}

/// Like [`cast`], rejecting integral truncation.
#[inline]
pub(crate) fn cast_exact<N: Scalar>(from: Scaled<N>, target: Ratio) -> QuantityResult<N> {
    from.value.scale_exact(from.ratio.checked_div(target)?)
}

/// Product on the common ratio; the result ratio is the common ratio squared.
pub(crate) fn product<N: Scalar>(lhs: Scaled<N>, rhs: Scaled<N>) -> QuantityResult<Scaled<N>> {
    let (a, b, common) = normalize(lhs, rhs)?;
    Ok(Scaled::new(a.try_mul(b)?, common.checked_square()?))
}

/// Quotient of two operands whose exponents cancel: a bare number.
pub(crate) fn collapsed_quotient<N: Scalar>(lhs: Scaled<N>, rhs: Scaled<N>) -> QuantityResult<N> {
    let (a, b, _) = normalize(lhs, rhs)?;
    a.try_div(b)
}

/// Quotient expressed at the divisor's ratio.
///
/// The true magnitude `(v1 * r1) / (v2 * r2)` is re-expressed in units of `r2`, i.e. the raw value is
/// `v1 * (r1 / r2²) / v2`. The rational factor is reduced first and the numerator product is formed
/// before the (possibly truncating) integral division.
pub(crate) fn quotient<N: Scalar>(lhs: Scaled<N>, rhs: Scaled<N>) -> QuantityResult<Scaled<N>> {
    if rhs.value.is_zero() {
        log::debug!("quotient by a zero quantity");
        return Err(QuantityError::DivisionByZero);
    }
    let factor = lhs.ratio.checked_div(rhs.ratio.checked_square()?)?;
    let numerator = lhs.value.try_mul(N::from_part(factor.num())?)?;
    let denominator = rhs.value.try_mul(N::from_part(factor.den())?)?;
    Ok(Scaled::new(numerator.try_div(denominator)?, rhs.ratio))
}

/// Sum at the left-hand ratio.
pub(crate) fn sum<N: Scalar>(lhs: Scaled<N>, rhs: Scaled<N>) -> QuantityResult<Scaled<N>> {
    let rhs = cast(rhs, lhs.ratio)?;
    Ok(Scaled::new(lhs.value.try_add(rhs)?, lhs.ratio))
}

/// Difference at the left-hand ratio.
pub(crate) fn difference<N: Scalar>(lhs: Scaled<N>, rhs: Scaled<N>) -> QuantityResult<Scaled<N>> {
    let rhs = cast(rhs, lhs.ratio)?;
    Ok(Scaled::new(lhs.value.try_sub(rhs)?, lhs.ratio))
}

/// Epsilon-bounded equality of true magnitudes.
pub(crate) fn equals<N: Scalar>(lhs: Scaled<N>, rhs: Scaled<N>) -> QuantityResult<bool> {
    let (a, b, _) = normalize(lhs, rhs)?;
    Ok(a.approx_eq(b))
}

/// Ordering of true magnitudes; `Equal` exactly when [`equals`] holds.
pub(crate) fn compare<N: Scalar>(lhs: Scaled<N>, rhs: Scaled<N>) -> QuantityResult<Option<Ordering>> {
    let (a, b, _) = normalize(lhs, rhs)?;
    if a.approx_eq(b) {
        return Ok(Some(Ordering::Equal));
    }
    Ok(a.partial_cmp(&b))
}

/// Ordering of the normalized raw values with no epsilon band.
///
/// Floats an epsilon apart are `Equal` under [`compare`] but ordered here.
pub(crate) fn strict_compare<N: Scalar>(
    lhs: Scaled<N>,
    rhs: Scaled<N>,
) -> QuantityResult<Option<Ordering>> {
    let (a, b, _) = normalize(lhs, rhs)?;
    Ok(a.partial_cmp(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: i64, num: i64, den: i64) -> Scaled<i64> {
        Scaled::new(value, Ratio::new(num, den).unwrap())
    }

    #[test]
    fn normalize_picks_the_finer_scale() {
        let (a, b, common) = normalize(s(1, 1, 1), s(1000, 1, 1000)).unwrap();
        assert_eq!((a, b), (1000, 1000));
        assert_eq!(common, Ratio::new(1, 1000).unwrap());
    }

    #[test]
    fn normalize_unrelated_scales() {
        // 3/4 and 5/6 meet at 1/12: 2 * 9 and 1 * 10.
        let (a, b, common) = normalize(s(2, 3, 4), s(1, 5, 6)).unwrap();
        assert_eq!((a, b), (18, 10));
        assert_eq!(common, Ratio::new(1, 12).unwrap());
    }

    #[test]
    fn product_squares_the_common_ratio() {
        let result = product(s(2, 1, 1), s(30, 1, 1000)).unwrap();
        assert_eq!(result.value, 60_000);
        assert_eq!(result.ratio, Ratio::new(1, 1_000_000).unwrap());
    }

    #[test]
    fn quotient_keeps_divisor_ratio() {
        let result = quotient(s(1000, 1, 1), s(2, 10, 1)).unwrap();
        assert_eq!(result.value, 5);
        assert_eq!(result.ratio, Ratio::integer(10));
    }

    #[test]
    fn quotient_by_zero() {
        assert_eq!(
            quotient(s(1, 1, 1), s(0, 1, 1)).unwrap_err(),
            QuantityError::DivisionByZero
        );
    }

    #[test]
    fn collapsed_quotient_uses_true_magnitudes() {
        // 1 km / 10 m = 100
        assert_eq!(collapsed_quotient(s(1, 1000, 1), s(10, 1, 1)).unwrap(), 100);
    }

    #[test]
    fn sum_and_difference_keep_left_ratio() {
        let total = sum(s(1, 1, 1), s(1, 1000, 1)).unwrap();
        assert_eq!((total.value, total.ratio), (1001, Ratio::ONE));

        let rest = difference(s(1, 1000, 1), s(1, 1, 1)).unwrap();
        // 1 m cast onto km truncates to 0 km for an integral payload.
        assert_eq!((rest.value, rest.ratio), (1, Ratio::integer(1000)));
    }

    #[test]
    fn cast_exact_flags_truncation() {
        assert_eq!(cast(s(1, 1, 1), Ratio::integer(1000)).unwrap(), 0);
        assert!(matches!(
            cast_exact(s(1, 1, 1), Ratio::integer(1000)),
            Err(QuantityError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn compare_by_magnitude() {
        assert_eq!(
            compare(s(10, 1000, 1), s(1000, 1, 1)).unwrap(),
            Some(Ordering::Greater)
        );
        assert_eq!(
            compare(s(1, 1000, 1), s(1000, 1, 1)).unwrap(),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn strict_compare_ignores_epsilon() {
        let zero = Scaled::new(0.0_f64, Ratio::ONE);
        let tiny = Scaled::new(f64::EPSILON / 2.0, Ratio::ONE);
        assert_eq!(compare(zero, tiny).unwrap(), Some(Ordering::Equal));
        assert_eq!(strict_compare(zero, tiny).unwrap(), Some(Ordering::Less));
        assert_eq!(
            strict_compare(s(1, 1000, 1), s(1000, 1, 1)).unwrap(),
            Some(Ordering::Equal)
        );
    }
}
