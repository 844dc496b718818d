//! Luminous intensity.

use crate::Quantity;
use dimq_derive::Dimension;
use typenum::P1;

/// Dimension tag for luminous intensity.
#[derive(Dimension)]
#[dimension(symbol = 'J', name = "luminous intensity")]
pub enum Luminosity {}

/// Luminous intensity in candelas.
pub type Candelas<N = f64> = Quantity<Luminosity, P1, N>;
