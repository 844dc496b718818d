//! Dimensioned quantities with checked, scale-aware arithmetic.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full API from `dimq-core` plus the
//! predefined dimensions (length, time, mass, …) and their quantity aliases at the crate root.
//!
//! A value is a `Quantity<D, E, N>`: a raw number `N` tagged at compile time with a dimension `D` and an
//! exponent `E`, and at runtime with a positive rational scale. Its magnitude is `value × scale`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can’t add metres to seconds) or exponents (metres to
//!   square metres).
//! - Exact arithmetic across scales for integral payloads: `2 dm × 30 m` is `600 cm²`, not a rounded float.
//! - Reports overflow and division by zero as errors (`try_*` methods) rather than wrapping.
//!
//! # What this crate does not try to solve
//!
//! - Products of different dimensions (`m·s`); multiplication and division stay within one dimension.
//! - Unit parsing or localized formatting.
//!
//! # Quick start
//!
//! ```rust
//! use dimq::prefix::{DECA, KILO};
//! use dimq::{Hertz, Meters, Seconds};
//!
//! let d = Meters::<i64>::new(1) + Meters::<i64>::with_ratio(1, KILO).unwrap();
//! assert_eq!(d.value(), 1001);
//! assert_eq!(d, Meters::<i64>::with_ratio(1001, dimq::Ratio::ONE).unwrap());
//!
//! let period = Seconds::<i64>::with_ratio(2, DECA).unwrap();
//! let f: Hertz<i64> = 1000 / period;
//! assert_eq!(f.to_string(), "5 [da] T^-1");
//! ```
//!
//! Errors instead of panics:
//!
//! ```rust
//! use dimq::{Meters, QuantityError};
//!
//! let big = Meters::<i64>::new(i64::MAX);
//! assert_eq!(big.try_mul(Meters::<i64>::new(2)).unwrap_err(), QuantityError::Overflow);
//! assert_eq!(big.try_div(Meters::<i64>::new(0)).unwrap_err(), QuantityError::DivisionByZero);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimq::{Meters, Seconds};
//!
//! let d = Meters::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add different dimensions
//! ```
//!
//! ```compile_fail
//! use dimq::{Meters, SquareMeters};
//!
//! let _ = Meters::new(1.0) + SquareMeters::new(1.0); // cannot add different exponents
//! ```
//!
//! # Custom dimensions
//!
//! A dimension is a marker type with two constants:
//!
//! ```rust
//! use dimq::{Dimension, Quantity, P1};
//!
//! pub enum Information {}
//! impl Dimension for Information {
//!     const SYMBOL: char = 'B';
//!     const NAME: &'static str = "information";
//! }
//!
//! type Bytes<N> = Quantity<Information, P1, N>;
//! let total = Bytes::<i64>::new(512) + Bytes::<i64>::with_ratio(1, dimq::prefix::KILO).unwrap();
//! assert_eq!(total.value(), 1512);
//! assert_eq!(total.dimension(), 'B');
//! ```
//!
//! The `Dimension` derive used for the predefined dimensions expands inside `dimq-core` only and is not
//! exported here:
//!
//! ```compile_fail
//! #[derive(dimq::Dimension)]
//! #[dimension(symbol = 'B')]
//! pub enum Information {}
//! ```
//!
//! # Modules
//!
//! Dimensions are grouped under modules (also re-exported at the crate root for convenience):
//!
//! - `dimq::length` (metres, square and cubic metres, per metre)
//! - `dimq::time` (seconds, hertz, minute and hour scales)
//! - `dimq::mass` (grams, kilograms)
//! - `dimq::units` (all of the above plus current, amount and luminous intensity)
//! - `dimq::prefix` (SI prefixes as [`Ratio`] constants)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimq-core`.
//! - `serde`: enables `serde` support; quantities serialize as `{value, ratio}`, and
//!   `serde_with_dimension` adds the dimension and exponent.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Fallible operations return [`QuantityResult`]. The arithmetic operators (`+ - * /` and unary `-`) panic
//! where the matching `try_*` method would return an error.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimq_core::*;

pub use dimq_core::units::amount::*;
pub use dimq_core::units::electric::*;
pub use dimq_core::units::length::*;
pub use dimq_core::units::luminous::*;
pub use dimq_core::units::mass::*;
pub use dimq_core::units::time::*;
