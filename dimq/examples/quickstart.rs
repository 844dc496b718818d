//! Minimal end-to-end example: mix scales, multiply into an area, divide back to a plain number.

use dimq::prefix::{CENTI, DECI, KILO};
use dimq::{Meters, Ratio, SquareMeters};

fn main() {
    let walk = Meters::<i64>::new(1) + Meters::<i64>::with_ratio(1, KILO).unwrap();
    assert_eq!(walk.value(), 1001);
    println!("1 m + 1 km = {walk}");

    let width = Meters::<i64>::with_ratio(2, DECI).unwrap();
    let length = Meters::<i64>::with_ratio(1, Ratio::integer(30)).unwrap();
    let area: SquareMeters<i64> = width * length;
    assert_eq!((area.value(), area.ratio()), (600, CENTI));
    println!("{width} × {length} = {area}");

    let laps: i64 = Meters::<i64>::with_ratio(10, KILO).unwrap() / Meters::<i64>::new(400);
    assert_eq!(laps, 25);
    println!("10 km is {laps} laps of 400 m");
}
