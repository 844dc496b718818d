//! Example demonstrating the `serde_with_dimension` helper module.
//!
//! Run with: cargo run --example serde_with_dimension --features serde

#[cfg(feature = "serde")]
fn main() {
    use dimq::prefix::MILLI;
    use dimq::{Meters, Seconds};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct SensorData {
        #[serde(with = "dimq::serde_with_dimension")]
        max_range: Meters<i64>,
        current_distance: Meters<i64>,
        #[serde(with = "dimq::serde_with_dimension")]
        sample_period: Seconds,
    }

    let data = SensorData {
        max_range: Meters::<i64>::new(100),
        current_distance: Meters::<i64>::with_ratio(42_500, MILLI).unwrap(),
        sample_period: Seconds::new(0.5),
    };

    let json = serde_json::to_string_pretty(&data).unwrap();
    println!("{json}");

    let restored: SensorData = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.current_distance, data.current_distance);

    let wrong = r#"{
        "max_range": {"value": 1, "dimension": "T", "exponent": 1},
        "current_distance": {"value": 1},
        "sample_period": {"value": 1.0, "dimension": "T", "exponent": 1}
    }"#;
    match serde_json::from_str::<SensorData>(wrong) {
        Ok(_) => unreachable!("a time cannot be read as a length"),
        Err(err) => println!("rejected: {err}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature. Run with: cargo run --example serde_with_dimension --features serde");
}
