//! Electric current.

use crate::Quantity;
use dimq_derive::Dimension;
use typenum::P1;

/// Dimension tag for electric current.
#[derive(Dimension)]
#[dimension(symbol = 'I', name = "current")]
pub enum Current {}

/// Current in amperes.
pub type Amperes<N = f64> = Quantity<Current, P1, N>;
