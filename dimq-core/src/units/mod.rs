//! Predefined dimensions and quantity aliases.
//!
//! `dimq-core` ships six of the SI base dimensions so that
//! downstream crates can start without defining tags. Every alias defaults to an `f64` payload; pass
//! another [`Scalar`](crate::Scalar) explicitly (`Meters::<i64>`) for integral arithmetic.
//!
//! ## Modules
//!
//! - [`length`]: `L`, with metre-based aliases up to volume and inverse length.
//! - [`time`]: `T`, with second and hertz aliases.
//! - [`mass`]: `M`, gram-based.
//! - [`electric`]: `I`, ampere-based.
//! - [`amount`]: `N`, mole-based.
//! - [`luminous`]: `J`, candela-based.

pub mod amount;
pub mod electric;
pub mod length;
pub mod luminous;
pub mod mass;
pub mod time;

pub use amount::*;
pub use electric::*;
pub use length::*;
pub use luminous::*;
pub use mass::*;
pub use time::*;
