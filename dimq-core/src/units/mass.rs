//! Mass.
//!
//! The canonical scale is the gram, so the kilogram carries the [`KILO`] ratio.

use crate::prefix::KILO;
use crate::{Quantity, Ratio};
use dimq_derive::Dimension;
use typenum::P1;

/// Dimension tag for mass.
#[derive(Dimension)]
#[dimension(symbol = 'M', name = "mass")]
pub enum Mass {}

/// Mass in grams.
pub type Grams<N = f64> = Quantity<Mass, P1, N>;

/// One gram.
pub const GRAM: Grams = Quantity::from_parts(1.0, Ratio::ONE);
/// One kilogram.
pub const KILOGRAM: Grams = Quantity::from_parts(1.0, KILO);
