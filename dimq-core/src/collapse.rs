//! Result shape of exponent arithmetic.
//!
//! Multiplying or dividing two quantities of one dimension yields a new exponent at the type level. When
//! the exponents cancel the dimension disappears and the result is a plain number; otherwise it is a
//! quantity of the new exponent. [`Collapse`] maps each `typenum` integer to that result type.

use crate::dimension::Dimension;
use crate::error::QuantityResult;
use crate::quantity::Quantity;
use crate::ratio::Ratio;
use crate::scalar::Scalar;
use typenum::{Integer, NInt, NonZero, PInt, Unsigned, Z0};

/// Maps a type-level exponent to the value produced by an operation landing on it.
///
/// Implemented for every `typenum` integer:
///
/// | exponent | `Output`               |
/// |----------|------------------------|
/// | `Z0`     | `N` (true magnitude)   |
/// | `PInt`   | `Quantity<D, PInt, N>` |
/// | `NInt`   | `Quantity<D, NInt, N>` |
pub trait Collapse<D: Dimension, N: Scalar>: Integer {
    /// Value produced for this exponent.
    type Output;

    /// `true` when the dimension cancels out.
    const IS_SCALAR: bool;

    /// Builds the output from a raw value expressed at `ratio`.
    ///
    /// For a cancelled dimension the value is multiplied through by `ratio`.
    fn collapse(value: N, ratio: Ratio) -> QuantityResult<Self::Output>;
}

impl<D: Dimension, N: Scalar> Collapse<D, N> for Z0 {
    type Output = N;
    const IS_SCALAR: bool = true;

    #[inline]
    fn collapse(value: N, ratio: Ratio) -> QuantityResult<N> {
        value.scale(ratio)
    }
}

impl<D: Dimension, N: Scalar, U: Unsigned + NonZero> Collapse<D, N> for PInt<U> {
    type Output = Quantity<D, PInt<U>, N>;
    const IS_SCALAR: bool = false;

    #[inline]
    fn collapse(value: N, ratio: Ratio) -> QuantityResult<Self::Output> {
        Ok(Quantity::from_parts(value, ratio))
    }
}

impl<D: Dimension, N: Scalar, U: Unsigned + NonZero> Collapse<D, N> for NInt<U> {
    type Output = Quantity<D, NInt<U>, N>;
    const IS_SCALAR: bool = false;

    #[inline]
    fn collapse(value: N, ratio: Ratio) -> QuantityResult<Self::Output> {
        Ok(Quantity::from_parts(value, ratio))
    }
}
