//! Decimal SI prefixes as scale ratios.
//!
//! ```rust
//! use dimq_core::prefix::{self, KILO, MILLI};
//!
//! assert_eq!(KILO.checked_mul(MILLI).unwrap(), dimq_core::Ratio::ONE);
//! assert_eq!(prefix::symbol(KILO), Some("k"));
//! ```

use crate::ratio::Ratio;

/// 10⁻¹⁸
pub const ATTO: Ratio = Ratio::new_const(1, 1_000_000_000_000_000_000);
/// 10⁻¹⁵
pub const FEMTO: Ratio = Ratio::new_const(1, 1_000_000_000_000_000);
/// 10⁻¹²
pub const PICO: Ratio = Ratio::new_const(1, 1_000_000_000_000);
/// 10⁻⁹
pub const NANO: Ratio = Ratio::new_const(1, 1_000_000_000);
/// 10⁻⁶
pub const MICRO: Ratio = Ratio::new_const(1, 1_000_000);
/// 10⁻³
pub const MILLI: Ratio = Ratio::new_const(1, 1_000);
/// 10⁻²
pub const CENTI: Ratio = Ratio::new_const(1, 100);
/// 10⁻¹
pub const DECI: Ratio = Ratio::new_const(1, 10);
/// 10¹
pub const DECA: Ratio = Ratio::new_const(10, 1);
/// 10²
pub const HECTO: Ratio = Ratio::new_const(100, 1);
/// 10³
pub const KILO: Ratio = Ratio::new_const(1_000, 1);
/// 10⁶
pub const MEGA: Ratio = Ratio::new_const(1_000_000, 1);
/// 10⁹
pub const GIGA: Ratio = Ratio::new_const(1_000_000_000, 1);
/// 10¹²
pub const TERA: Ratio = Ratio::new_const(1_000_000_000_000, 1);
/// 10¹⁵
pub const PETA: Ratio = Ratio::new_const(1_000_000_000_000_000, 1);
/// 10¹⁸
pub const EXA: Ratio = Ratio::new_const(1_000_000_000_000_000_000, 1);

/// Every prefix with its symbol, smallest first.
pub const ALL: [(Ratio, &str); 16] = [
    (ATTO, "a"),
    (FEMTO, "f"),
    (PICO, "p"),
    (NANO, "n"),
    (MICRO, "µ"),
    (MILLI, "m"),
    (CENTI, "c"),
    (DECI, "d"),
    (DECA, "da"),
    (HECTO, "h"),
    (KILO, "k"),
    (MEGA, "M"),
    (GIGA, "G"),
    (TERA, "T"),
    (PETA, "P"),
    (EXA, "E"),
];

/// The prefix symbol for `ratio`, if it is exactly one of the SI prefixes.
pub fn symbol(ratio: Ratio) -> Option<&'static str> {
    ALL.iter()
        .find(|(candidate, _)| *candidate == ratio)
        .map(|(_, symbol)| *symbol)
}
