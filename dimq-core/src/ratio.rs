//! Rational scale factors.
//!
//! A [`Ratio`] relates one unit of a quantity's raw value to the canonical base unit of its dimension
//! (`milli` is `1/1000`, `deca` is `10/1`). Ratios are kept in lowest terms with a positive denominator
//! after every operation, so repeated multiplication and division chains grow as slowly as possible.
//! Every product is range-checked: overflow is reported as [`QuantityError::Overflow`], never wrapped.
//!
//! ```rust
//! use dimq_core::Ratio;
//!
//! let deci = Ratio::new(1, 10).unwrap();
//! let centi = deci.checked_mul(deci).unwrap();
//! assert_eq!((centi.num(), centi.den()), (1, 100));
//!
//! assert_eq!(Ratio::new(-6, -8).unwrap(), Ratio::new(3, 4).unwrap());
//! ```

use crate::error::{QuantityError, QuantityResult};
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

/// Greatest common divisor (binary-free Euclid). `gcd(0, 0) == 0`.
#[inline]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// A reduced rational number `num / den` with `den > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RatioParts")
)]
pub struct Ratio {
    num: i64,
    den: i64,
}

impl Ratio {
    /// The ratio `1/1`, the scale of a canonical base unit.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Creates a ratio reduced to lowest terms.
    ///
    /// The sign is carried by the numerator; `0/d` becomes `0/1`.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DivisionByZero`] if `den == 0`, [`QuantityError::Overflow`] if moving the sign
    /// to the numerator overflows (`i64::MIN` parts).
    pub fn new(num: i64, den: i64) -> QuantityResult<Self> {
        if den == 0 {
            log::debug!("rejected ratio {num}/0");
            return Err(QuantityError::DivisionByZero);
        }
        if num == 0 {
            return Ok(Self::ONE.with_num(0));
        }

        let g = gcd(num.unsigned_abs(), den.unsigned_abs());
        // g >= 1 and divides both magnitudes; it only exceeds i64::MAX when both parts are i64::MIN.
        let (num, den) = match i64::try_from(g) {
            Ok(g) => (num / g, den / g),
            Err(_) => (1, 1),
        };

        if den < 0 {
            let num = num.checked_neg().ok_or(QuantityError::Overflow)?;
            let den = den.checked_neg().ok_or(QuantityError::Overflow)?;
            Ok(Self { num, den })
        } else {
            Ok(Self { num, den })
        }
    }

    /// Compile-time constructor for ratio constants.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `den == 0` or either part is `i64::MIN`.
    pub const fn new_const(num: i64, den: i64) -> Self {
        assert!(den != 0, "ratio denominator must be non-zero");
        assert!(num != i64::MIN && den != i64::MIN, "ratio parts out of range");
        if num == 0 {
            return Self { num: 0, den: 1 };
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        let (num, den) = (num / g, den / g);
        if den < 0 {
            Self {
                num: -num,
                den: -den,
            }
        } else {
            Self { num, den }
        }
    }

    /// Creates the integral ratio `n/1`.
    #[inline]
    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    #[inline]
    const fn with_num(self, num: i64) -> Self {
        Self { num, den: self.den }
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn num(self) -> i64 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn den(self) -> i64 {
        self.den
    }

    /// Returns `true` for `1/1`.
    #[inline]
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Returns `true` for `0/1`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Returns `true` when the ratio is strictly greater than zero.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.num > 0
    }

    /// Returns `true` when the denominator is one.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Lossy conversion to `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Product `self * rhs`, in lowest terms.
    ///
    /// Cross factors are cancelled before multiplying, so the intermediate products never exceed the
    /// size of the reduced result.
    ///
    /// ```rust
    /// use dimq_core::Ratio;
    ///
    /// let milli = Ratio::new(1, 1000).unwrap();
    /// let kilo = Ratio::integer(1000);
    /// assert_eq!(milli.checked_mul(kilo).unwrap(), Ratio::ONE);
    /// ```
    pub fn checked_mul(self, rhs: Self) -> QuantityResult<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ONE.with_num(0));
        }

        // Both operands are reduced, so only the cross pairs can share factors.
        let g1 = gcd(self.num.unsigned_abs(), rhs.den.unsigned_abs());
        let g2 = gcd(rhs.num.unsigned_abs(), self.den.unsigned_abs());

        let n1 = exact_div(self.num, g1)?;
        let d2 = exact_div(rhs.den, g1)?;
        let n2 = exact_div(rhs.num, g2)?;
        let d1 = exact_div(self.den, g2)?;

        let num = n1.checked_mul(n2).ok_or_else(|| overflow(self, rhs, "*"))?;
        let den = d1.checked_mul(d2).ok_or_else(|| overflow(self, rhs, "*"))?;
        Self::new(num, den)
    }

    /// Quotient `self / rhs`, in lowest terms.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DivisionByZero`] if `rhs` is zero, [`QuantityError::Overflow`] if the reduced
    /// result does not fit in `i64`.
    pub fn checked_div(self, rhs: Self) -> QuantityResult<Self> {
        self.checked_mul(rhs.recip()?)
    }

    /// Reciprocal `den / num`.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DivisionByZero`] for the zero ratio.
    pub fn recip(self) -> QuantityResult<Self> {
        if self.is_zero() {
            log::debug!("reciprocal of a zero ratio");
            return Err(QuantityError::DivisionByZero);
        }
        Self::new(self.den, self.num)
    }

    /// Square `self * self`.
    #[inline]
    pub fn checked_square(self) -> QuantityResult<Self> {
        self.checked_mul(self)
    }

    /// Largest ratio `c` such that both `self / c` and `other / c` are integers.
    ///
    /// For positive reduced ratios `a/b` and `c/d` this is `gcd(a, c) / lcm(b, d)`. Rescaling values onto
    /// the common ratio is therefore always an exact integral multiplication.
    ///
    /// ```rust
    /// use dimq_core::Ratio;
    ///
    /// let milli = Ratio::new(1, 1000).unwrap();
    /// let common = Ratio::ONE.common(milli).unwrap();
    /// assert_eq!(common, milli);
    ///
    /// let kilo = Ratio::integer(1000);
    /// let deca = Ratio::integer(10);
    /// assert_eq!(kilo.common(deca).unwrap(), deca);
    /// ```
    pub fn common(self, other: Self) -> QuantityResult<Self> {
        if self == other {
            return Ok(self);
        }

        let num = gcd(self.num.unsigned_abs(), other.num.unsigned_abs());
        let g = gcd(self.den.unsigned_abs(), other.den.unsigned_abs());
        let lcm = (self.den.unsigned_abs() / g)
            .checked_mul(other.den.unsigned_abs())
            .ok_or_else(|| overflow(self, other, "lcm"))?;

        let num = i64::try_from(num).map_err(|_| QuantityError::Overflow)?;
        let den = i64::try_from(lcm).map_err(|_| QuantityError::Overflow)?;
        Self::new(num, den)
    }
}

/// `value / divisor` where `divisor` is known to divide `value` exactly.
#[inline]
fn exact_div(value: i64, divisor: u64) -> QuantityResult<i64> {
    // divisor is a gcd of |value| and something else, so it is at most |value| (or |value| is 0).
    let divisor = i64::try_from(divisor).map_err(|_| QuantityError::Overflow)?;
    value.checked_div(divisor).ok_or(QuantityError::Overflow)
}

#[cold]
fn overflow(lhs: Ratio, rhs: Ratio, op: &str) -> QuantityError {
    log::debug!("ratio overflow: {lhs} {op} {rhs}");
    QuantityError::Overflow
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ONE
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross multiplication preserves the order; i128 cannot overflow.
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl From<i64> for Ratio {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl TryFrom<(i64, i64)> for Ratio {
    type Error = QuantityError;

    fn try_from((num, den): (i64, i64)) -> QuantityResult<Self> {
        Self::new(num, den)
    }
}

/// Unvalidated wire form of a [`Ratio`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RatioParts {
    num: i64,
    den: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RatioParts> for Ratio {
    type Error = QuantityError;

    fn try_from(parts: RatioParts) -> QuantityResult<Self> {
        Self::new(parts.num, parts.den)
    }
}
