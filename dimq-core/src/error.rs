//! Error types for quantity arithmetic.

/// Result type for fallible quantity and ratio operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error type for quantity and ratio operations.
///
/// Every fallible operation in this crate reports its failure before producing a result; no partially
/// computed value is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// Two runtime-tagged quantities carry different dimension symbols.
    #[error("Dimension mismatch: expected `{expected}`, found `{found}`")]
    DimensionMismatch {
        /// Symbol required by the operation.
        expected: char,
        /// Symbol actually supplied.
        found: char,
    },

    /// Two runtime-tagged quantities carry different exponents where equal ones are required.
    #[error("Exponent mismatch: expected {expected}, found {found}")]
    ExponentMismatch {
        /// Exponent required by the operation.
        expected: i32,
        /// Exponent actually supplied.
        found: i32,
    },

    /// A ratio or value computation left the range of its backing integer type.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Division by a zero raw value, a zero scalar, or a zero ratio denominator.
    #[error("Division by zero")]
    DivisionByZero,

    /// A quantity was given a scale ratio that is not strictly positive.
    #[error("Invalid scale {num}/{den}: scale ratios must be positive")]
    InvalidScale {
        /// Numerator of the rejected ratio.
        num: i64,
        /// Denominator of the rejected ratio.
        den: i64,
    },

    /// An exact cast of an integral value would have truncated.
    #[error("Cast by factor {num}/{den} is not exact for this value")]
    PrecisionLoss {
        /// Numerator of the conversion factor.
        num: i64,
        /// Denominator of the conversion factor.
        den: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_parts() {
        let err = QuantityError::DimensionMismatch {
            expected: 'L',
            found: 'T',
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected `L`, found `T`");

        let err = QuantityError::InvalidScale { num: -1, den: 10 };
        assert_eq!(
            err.to_string(),
            "Invalid scale -1/10: scale ratios must be positive"
        );
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(QuantityError::Overflow, QuantityError::Overflow);
        assert_ne!(QuantityError::Overflow, QuantityError::DivisionByZero);
    }
}
