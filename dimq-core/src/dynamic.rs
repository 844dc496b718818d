//! Runtime-tagged quantities.
//!
//! [`DynQuantity`] carries its dimension symbol and exponent as plain values instead of type parameters.
//! It is the form quantities take at boundaries where the static tags are not available (deserialized
//! records, heterogeneous collections), and it follows the same scale rules as [`Quantity`]. Mismatched
//! tags are reported as [`QuantityError::DimensionMismatch`] and [`QuantityError::ExponentMismatch`].
//!
//! ```rust
//! use dimq_core::prefix::KILO;
//! use dimq_core::units::Meters;
//! use dimq_core::{DynQuantity, QuantityError};
//!
//! let a = DynQuantity::from(Meters::<i64>::with_ratio(2, KILO).unwrap());
//! let b = DynQuantity::new('L', 1, 500_i64, dimq_core::Ratio::ONE).unwrap();
//! assert_eq!(a.try_add(b).unwrap().value(), 2);
//!
//! let t = DynQuantity::new('T', 1, 1_i64, dimq_core::Ratio::ONE).unwrap();
//! assert_eq!(
//!     a.try_add(t).unwrap_err(),
//!     QuantityError::DimensionMismatch { expected: 'L', found: 'T' }
//! );
//!
//! let back: Meters<i64> = a.try_into().unwrap();
//! assert_eq!(back.magnitude().unwrap(), 2000);
//! ```

use crate::dimension::Dimension;
use crate::error::{QuantityError, QuantityResult};
use crate::kernel::{self, Scaled};
use crate::quantity::{positive, Quantity};
use crate::ratio::Ratio;
use crate::scalar::Scalar;
use core::cmp::Ordering;
use core::fmt;
use typenum::Integer;

/// A quantity whose dimension and exponent are checked at runtime.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DynQuantity<N: Scalar> {
    value: N,
    ratio: Ratio,
    dimension: char,
    exponent: i32,
}

impl<N: Scalar> DynQuantity<N> {
    /// Creates a runtime-tagged quantity.
    ///
    /// # Errors
    ///
    /// [`QuantityError::InvalidScale`] if `ratio` is not strictly positive.
    pub fn new(dimension: char, exponent: i32, value: N, ratio: Ratio) -> QuantityResult<Self> {
        Ok(Self {
            value,
            ratio: positive(ratio)?,
            dimension,
            exponent,
        })
    }

    /// Raw value, in units of [`Self::ratio`].
    #[inline]
    pub fn value(&self) -> N {
        self.value
    }

    /// Scale ratio.
    #[inline]
    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Dimension symbol.
    #[inline]
    pub fn dimension(&self) -> char {
        self.dimension
    }

    /// Exponent of the dimension. Zero for a cancelled dimension.
    #[inline]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// `true` when the dimension has cancelled out.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.exponent == 0
    }

    /// The true magnitude `value × ratio`.
    #[inline]
    pub fn magnitude(&self) -> QuantityResult<N> {
        self.value.scale(self.ratio)
    }

    #[inline]
    fn scaled(self) -> Scaled<N> {
        Scaled::new(self.value, self.ratio)
    }

    fn with_scaled(self, exponent: i32, scaled: Scaled<N>) -> Self {
        Self {
            value: scaled.value,
            ratio: scaled.ratio,
            dimension: self.dimension,
            exponent,
        }
    }

    /// A cancelled dimension: the magnitude at unit ratio.
    fn dimensionless(self, value: N) -> Self {
        self.with_scaled(0, Scaled::new(value, Ratio::ONE))
    }

    fn same_dimension(&self, other: &Self) -> QuantityResult<()> {
        if self.dimension != other.dimension {
            return Err(QuantityError::DimensionMismatch {
                expected: self.dimension,
                found: other.dimension,
            });
        }
        Ok(())
    }

    fn same_tags(&self, other: &Self) -> QuantityResult<()> {
        self.same_dimension(other)?;
        if self.exponent != other.exponent {
            return Err(QuantityError::ExponentMismatch {
                expected: self.exponent,
                found: other.exponent,
            });
        }
        Ok(())
    }

    /// Re-expresses the quantity at another ratio, truncating integral values.
    pub fn to_ratio(self, target: Ratio) -> QuantityResult<Self> {
        let target = positive(target)?;
        let value = kernel::cast(self.scaled(), target)?;
        Ok(self.with_scaled(self.exponent, Scaled::new(value, target)))
    }

    /// Product; the exponents add. See [`Quantity::try_mul`].
    pub fn try_mul(self, rhs: Self) -> QuantityResult<Self> {
        self.same_dimension(&rhs)?;
        let exponent = self
            .exponent
            .checked_add(rhs.exponent)
            .ok_or(QuantityError::Overflow)?;
        let product = kernel::product(self.scaled(), rhs.scaled())?;
        if exponent == 0 {
            return Ok(self.dimensionless(product.value.scale(product.ratio)?));
        }
        Ok(self.with_scaled(exponent, product))
    }

    /// Quotient; the exponents subtract. See [`Quantity::try_div`].
    pub fn try_div(self, rhs: Self) -> QuantityResult<Self> {
        self.same_dimension(&rhs)?;
        let exponent = self
            .exponent
            .checked_sub(rhs.exponent)
            .ok_or(QuantityError::Overflow)?;
        if exponent == 0 {
            let value = kernel::collapsed_quotient(self.scaled(), rhs.scaled())?;
            return Ok(self.dimensionless(value));
        }
        let quotient = kernel::quotient(self.scaled(), rhs.scaled())?;
        Ok(self.with_scaled(exponent, quotient))
    }

    /// `lhs / self` for a bare number. See [`Quantity::try_rdiv`].
    pub fn try_rdiv(self, lhs: N) -> QuantityResult<Self> {
        let exponent = self
            .exponent
            .checked_neg()
            .ok_or(QuantityError::Overflow)?;
        let quotient = kernel::quotient(Scaled::new(lhs, Ratio::ONE), self.scaled())?;
        Ok(self.with_scaled(exponent, quotient))
    }

    /// Sum at the left operand's ratio.
    pub fn try_add(self, rhs: Self) -> QuantityResult<Self> {
        self.same_tags(&rhs)?;
        let sum = kernel::sum(self.scaled(), rhs.scaled())?;
        Ok(self.with_scaled(self.exponent, sum))
    }

    /// Difference at the left operand's ratio.
    pub fn try_sub(self, rhs: Self) -> QuantityResult<Self> {
        self.same_tags(&rhs)?;
        let diff = kernel::difference(self.scaled(), rhs.scaled())?;
        Ok(self.with_scaled(self.exponent, diff))
    }

    /// Negation.
    pub fn try_neg(self) -> QuantityResult<Self> {
        Ok(Self {
            value: self.value.try_neg()?,
            ..self
        })
    }

    /// Magnitude equality.
    ///
    /// # Errors
    ///
    /// Tag mismatches and normalization overflow.
    pub fn try_eq(&self, other: &Self) -> QuantityResult<bool> {
        self.same_tags(other)?;
        kernel::equals(self.scaled(), other.scaled())
    }

    /// Magnitude ordering, `Equal` exactly when [`Self::try_eq`] holds.
    pub fn try_partial_cmp(&self, other: &Self) -> QuantityResult<Option<Ordering>> {
        self.same_tags(other)?;
        kernel::compare(self.scaled(), other.scaled())
    }

    /// `self < other` on the normalized raw values, with no epsilon band.
    pub fn try_lt(&self, other: &Self) -> QuantityResult<bool> {
        self.same_tags(other)?;
        Ok(kernel::strict_compare(self.scaled(), other.scaled())? == Some(Ordering::Less))
    }

    /// `self > other` on the normalized raw values, with no epsilon band.
    pub fn try_gt(&self, other: &Self) -> QuantityResult<bool> {
        self.same_tags(other)?;
        Ok(kernel::strict_compare(self.scaled(), other.scaled())? == Some(Ordering::Greater))
    }
}

/// Tags must match; magnitudes are compared as for [`Quantity`].
impl<N: Scalar> PartialEq for DynQuantity<N> {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl<N: Scalar> PartialOrd for DynQuantity<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_partial_cmp(other).ok().flatten()
    }
}

impl<N: Scalar> fmt::Display for DynQuantity<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if !self.ratio.is_one() {
            match crate::prefix::symbol(self.ratio) {
                Some(symbol) => write!(f, " [{symbol}]")?,
                None => write!(f, " [{}]", self.ratio)?,
            }
        }
        match self.exponent {
            0 => Ok(()),
            1 => write!(f, " {}", self.dimension),
            exp => write!(f, " {}^{}", self.dimension, exp),
        }
    }
}

impl<D: Dimension, E: Integer, N: Scalar> From<Quantity<D, E, N>> for DynQuantity<N> {
    fn from(quantity: Quantity<D, E, N>) -> Self {
        Self {
            value: quantity.value(),
            ratio: quantity.ratio(),
            dimension: D::SYMBOL,
            exponent: E::I32,
        }
    }
}

impl<D: Dimension, E: Integer, N: Scalar> TryFrom<DynQuantity<N>> for Quantity<D, E, N> {
    type Error = QuantityError;

    fn try_from(dynamic: DynQuantity<N>) -> QuantityResult<Self> {
        if dynamic.dimension != D::SYMBOL {
            return Err(QuantityError::DimensionMismatch {
                expected: D::SYMBOL,
                found: dynamic.dimension,
            });
        }
        if dynamic.exponent != E::I32 {
            return Err(QuantityError::ExponentMismatch {
                expected: E::I32,
                found: dynamic.exponent,
            });
        }
        Quantity::with_ratio(dynamic.value, dynamic.ratio)
    }
}

#[cfg(feature = "serde")]
impl<'de, N: Scalar + serde::Deserialize<'de>> serde::Deserialize<'de> for DynQuantity<N> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Parts<N> {
            value: N,
            #[serde(default)]
            ratio: Ratio,
            dimension: char,
            exponent: i32,
        }

        let parts = Parts::<N>::deserialize(deserializer)?;
        DynQuantity::new(parts.dimension, parts.exponent, parts.value, parts.ratio)
            .map_err(serde::de::Error::custom)
    }
}
