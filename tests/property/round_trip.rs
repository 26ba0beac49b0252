//! Textual round trips.

use proptest::prelude::*;

use super::common::{config, ParsePercentError, Percent};
use validity::laws::{round_trip_laws, round_trip_laws_on, round_trip_laws_with};

#[test]
fn test_percent_round_trips_on_every_tier() {
    let report = round_trip_laws::<Percent>("Percent").run(&config());
    assert!(report.is_success(), "{}", report);
    assert_eq!(report.outcomes.len(), 3);
}

#[test]
fn test_integer_example() {
    assert_eq!(Percent(42).to_string(), "42%");
    assert_eq!("42%".parse::<Percent>(), Ok(Percent(42)));
    assert_eq!("42".parse::<Percent>(), Err(ParsePercentError::MissingSign));
    round_trip_laws_on("i32", || any::<i32>()).assert_holds_with(&config());
}

#[test]
fn test_hex_render_needs_hex_parse() {
    round_trip_laws_with(
        "hex",
        || any::<u32>(),
        |x: &u32| format!("{:x}", x),
        |text: &str| u32::from_str_radix(text, 16),
    )
    .assert_holds_with(&config());

    let report = round_trip_laws_with(
        "hex parsed as decimal",
        || 10u32..1000,
        |x: &u32| format!("{:x}", x),
        |text: &str| text.parse::<u32>(),
    )
    .run(&config());
    assert!(!report.is_success());
}
