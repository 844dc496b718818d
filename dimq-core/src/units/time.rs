//! Time.
//!
//! The canonical scale is the SI second. Minutes and hours are exact integral ratios, so integral
//! payloads convert between them without loss when the value allows it.
//!
//! ```rust
//! use dimq_core::units::{Seconds, HOUR};
//!
//! let hour = HOUR.to_base().unwrap();
//! assert_eq!(hour, Seconds::new(3600.0));
//! ```

use crate::prefix::MILLI;
use crate::{Quantity, Ratio};
use dimq_derive::Dimension;
use typenum::{N1, P1};

/// Dimension tag for time.
#[derive(Dimension)]
#[dimension(symbol = 'T', name = "time")]
pub enum Time {}

/// Duration in seconds.
pub type Seconds<N = f64> = Quantity<Time, P1, N>;
/// Frequency in hertz.
pub type Hertz<N = f64> = Quantity<Time, N1, N>;

/// Ratio of a minute to a second.
pub const MINUTE_RATIO: Ratio = Ratio::integer(60);
/// Ratio of an hour to a second.
pub const HOUR_RATIO: Ratio = Ratio::integer(3_600);

/// One second.
pub const SECOND: Seconds = Quantity::from_parts(1.0, Ratio::ONE);
/// One millisecond.
pub const MILLISECOND: Seconds = Quantity::from_parts(1.0, MILLI);
/// One minute.
pub const MINUTE: Seconds = Quantity::from_parts(1.0, MINUTE_RATIO);
/// One hour.
pub const HOUR: Seconds = Quantity::from_parts(1.0, HOUR_RATIO);
