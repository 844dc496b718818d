//! Length.
//!
//! The canonical scale is the metre. Areas and volumes are the same dimension at exponent 2 and 3.
//!
//! ```rust
//! use dimq_core::units::{Meters, SquareMeters, KILOMETER};
//!
//! let field: SquareMeters = KILOMETER * Meters::new(250.0);
//! assert_eq!(field.magnitude().unwrap(), 250_000.0);
//! ```

use crate::prefix::{CENTI, KILO, MILLI};
use crate::Quantity;
use dimq_derive::Dimension;
use typenum::{N1, P1, P2, P3};

/// Dimension tag for length.
#[derive(Dimension)]
#[dimension(symbol = 'L', name = "length")]
pub enum Length {}

/// Length in metres.
pub type Meters<N = f64> = Quantity<Length, P1, N>;
/// Area in square metres.
pub type SquareMeters<N = f64> = Quantity<Length, P2, N>;
/// Volume in cubic metres.
pub type CubicMeters<N = f64> = Quantity<Length, P3, N>;
/// Inverse length (wavenumber, per metre).
pub type PerMeter<N = f64> = Quantity<Length, N1, N>;

/// One metre.
pub const METER: Meters = Quantity::from_parts(1.0, crate::Ratio::ONE);
/// One kilometre.
pub const KILOMETER: Meters = Quantity::from_parts(1.0, KILO);
/// One centimetre.
pub const CENTIMETER: Meters = Quantity::from_parts(1.0, CENTI);
/// One millimetre.
pub const MILLIMETER: Meters = Quantity::from_parts(1.0, MILLI);
