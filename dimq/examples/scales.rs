//! Scale handling: comparisons by magnitude, exact and truncating casts, checked arithmetic, and the
//! runtime-tagged form.

use dimq::prefix::{DECA, KILO, MILLI};
use dimq::{DynQuantity, Hertz, Meters, QuantityError, Ratio, Seconds};

fn main() -> Result<(), QuantityError> {
    // Equality and ordering compare true magnitudes.
    let km = Meters::<i64>::with_ratio(1, KILO)?;
    let thousand = Meters::<i64>::new(1000);
    assert_eq!(km, thousand);
    assert!(Meters::<i64>::with_ratio(10, KILO)? > thousand);

    // Integral casts truncate unless asked to be exact.
    let short = Meters::<i64>::with_ratio(1_234, MILLI)?;
    println!("{short} as metres: {}", short.to_ratio(Ratio::ONE)?);
    match short.to_ratio_exact(Ratio::ONE) {
        Err(err) => println!("exact cast refused: {err}"),
        Ok(q) => println!("exact cast: {q}"),
    }

    // Inverse quantities keep the divisor's scale.
    let period = Seconds::<i64>::with_ratio(2, DECA)?;
    let rate: Hertz<i64> = period.try_rdiv(1000)?;
    println!("1000 / {period} = {rate}");

    // Overflow is an error, not a wrapped value.
    let huge = Meters::<i64>::new(i64::MAX);
    assert_eq!(huge.try_add(Meters::<i64>::new(1)), Err(QuantityError::Overflow));

    // Runtime tags follow the same rules and report mismatches.
    let a = DynQuantity::from(km);
    let b = DynQuantity::from(period);
    if let Err(err) = a.try_add(b) {
        println!("{err}");
    }

    Ok(())
}
