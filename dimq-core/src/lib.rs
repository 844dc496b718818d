//! Core type system for dimensioned quantities with checked, scale-aware arithmetic.
//!
//! `dimq-core` provides a small, exact model of a physical amount:
//!
//! - A *dimension* is a zero-sized marker type implementing [`Dimension`] (length, time, …).
//! - A value tagged with a dimension is a [`Quantity<D, E, N>`]: a raw value of any [`Scalar`] `N`, an
//!   exponent `E` (a `typenum` integer, so `m²` and `m⁻¹` are distinct types) and a runtime scale
//!   [`Ratio`].
//! - The true magnitude is `value × ratio`. Equality and ordering compare magnitudes, so one kilometre
//!   equals a thousand metres whatever the raw values are.
//! - Products and quotients re-express both operands on their common ratio, which for rational scales is
//!   an exact integral multiplication. When the exponents cancel the result is a bare `N`.
//! - The same rules are available on the runtime-tagged [`DynQuantity`], which reports mismatched tags as
//!   errors instead of compile failures.
//!
//! Most users should depend on `dimq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions and of exponents.
//! - Exact, overflow-checked arithmetic on integral payloads, and epsilon-aware comparison of floats.
//! - Mixing scales (kilo, milli, or any positive rational) without silently losing magnitude.
//!
//! # What this crate does not try to solve
//!
//! - Compound units that combine several dimensions (`m/s`); both operands of `*` and `/` must share a
//!   dimension.
//! - Affine scales such as temperature offsets.
//! - Parsing quantities from text.
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::prefix::{CENTI, DECI, KILO};
//! use dimq_core::units::{Meters, SquareMeters};
//! use dimq_core::Ratio;
//!
//! // 1 m + 1 km, expressed at the left operand's scale.
//! let total = Meters::<i64>::new(1) + Meters::<i64>::with_ratio(1, KILO).unwrap();
//! assert_eq!(total.value(), 1001);
//!
//! // 2 dm × 30 m = 600 cm²
//! let a = Meters::<i64>::with_ratio(2, DECI).unwrap();
//! let b = Meters::<i64>::with_ratio(1, Ratio::integer(30)).unwrap();
//! let area: SquareMeters<i64> = a * b;
//! assert_eq!((area.value(), area.ratio()), (600, CENTI));
//! assert_eq!(area.to_string(), "600 [c] L^2");
//!
//! // Same dimension and exponent: the result is a plain number.
//! let n: i64 = Meters::<i64>::with_ratio(1, KILO).unwrap() / Meters::<i64>::new(10);
//! assert_eq!(n, 100);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Ratio`], [`Quantity`] and [`DynQuantity`], plus the
//!   `serde_with_dimension` helper that also writes the dimension and exponent tags.
//!
//! # Panics and errors
//!
//! Every arithmetic operation has a `try_*` form returning [`QuantityResult`]; overflow, division by zero
//! and invalid scales are reported as [`QuantityError`]. The `std::ops` operators call these and panic on
//! an error, in the same way integer operators panic on overflow in debug builds. Equality and ordering
//! cannot fail: a comparison whose normalization overflows is simply unequal and unordered; use
//! [`Quantity::try_eq`] and [`Quantity::try_partial_cmp`] to observe the error.
//!
//! Floating-point payloads follow IEEE-754 for overflow (the value becomes infinite) but division by zero is
//! still an error.
//!
//! # Diagnostics
//!
//! Overflow and division-by-zero sites emit `log::debug!` records naming the operands.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod collapse;
mod dimension;
mod dynamic;
mod error;
mod kernel;
mod quantity;
mod ratio;
mod scalar;

pub mod prefix;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use collapse::Collapse;
pub use dimension::Dimension;
pub use dynamic::DynQuantity;
pub use error::{QuantityError, QuantityResult};
pub use quantity::{Product, Quantity, Quotient};
pub use ratio::{gcd, Ratio};
pub use scalar::{approx_eq, Scalar};

/// Type-level exponents.
pub use typenum::{N1, N2, N3, P1, P2, P3, Z0};

#[cfg(feature = "serde")]
pub use quantity::serde_with_dimension;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined dimensions (and their quantity aliases)
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::length;
pub use units::mass;
pub use units::time;
