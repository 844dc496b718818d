//! Dimension tags.

/// Marker trait for **dimensions** (length, time, mass, …).
///
/// A dimension is the category that keeps a metre apart from a second. Each dimension is modelled as
/// an empty enum carrying a one-character symbol; quantities of different dimension tags have
/// different types, so combining them is rejected by the compiler.
///
/// ```rust
/// use dimq_core::Dimension;
///
/// pub enum Length {}
/// impl Dimension for Length {
///     const SYMBOL: char = 'L';
///     const NAME: &'static str = "length";
/// }
/// ```
///
/// Inside this workspace the `#[derive(Dimension)]` macro generates the impl from a
/// `#[dimension(symbol = 'L', name = "length")]` attribute.
pub trait Dimension: 'static {
    /// Symbol used in formatting and in runtime-tagged quantities.
    const SYMBOL: char;

    /// Human-readable name.
    const NAME: &'static str;
}
