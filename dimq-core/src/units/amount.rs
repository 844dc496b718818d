//! Amount of substance.

use crate::Quantity;
use dimq_derive::Dimension;
use typenum::P1;

/// Dimension tag for amount of substance.
#[derive(Dimension)]
#[dimension(symbol = 'N', name = "amount")]
pub enum Amount {}

/// Amount in moles.
pub type Moles<N = f64> = Quantity<Amount, P1, N>;
