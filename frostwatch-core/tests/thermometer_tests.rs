// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::NaiveDateTime;
use frostwatch_core::{
    FrostwatchError, ReadingSource, SamplingRange, SimulatedThermometer, ThermometerSettings,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn antarctic_settings() -> anyhow::Result<ThermometerSettings> {
    let range = SamplingRange::new(-18.0, -16.0)?;
    Ok(ThermometerSettings::new(range, 1, FORMAT)?)
}

#[test]
fn test_readings_stay_in_range_and_precision() -> anyhow::Result<()> {
    // Arrange
    let mut thermometer = SimulatedThermometer::seeded(antarctic_settings()?, 42);

    // Act & Assert
    for _ in 0..500 {
        let reading = thermometer.next_reading()?;
        let value = reading.value();

        assert!((-18.0..=-16.0).contains(&value), "{value} out of range");
        let tenths = value * 10.0;
        assert!((tenths - tenths.round()).abs() < 1e-9, "{value} not rounded");
    }
    Ok(())
}

#[test]
fn test_timestamp_uses_configured_format() -> anyhow::Result<()> {
    let mut thermometer = SimulatedThermometer::new(antarctic_settings()?)?;

    let reading = thermometer.next_reading()?;

    assert_eq!(reading.timestamp().len(), 19);
    NaiveDateTime::parse_from_str(reading.timestamp(), FORMAT)?;
    Ok(())
}

#[test]
fn test_same_seed_same_values() -> anyhow::Result<()> {
    let mut first = SimulatedThermometer::seeded(antarctic_settings()?, 7);
    let mut second = SimulatedThermometer::seeded(antarctic_settings()?, 7);

    for _ in 0..20 {
        assert_eq!(first.next_reading()?.value(), second.next_reading()?.value());
    }
    Ok(())
}

#[test]
fn test_custom_generator_matches_seeded_thermometer() -> anyhow::Result<()> {
    // Arrange
    let mut custom =
        SimulatedThermometer::with_rng(antarctic_settings()?, StdRng::seed_from_u64(11));
    let mut seeded = SimulatedThermometer::seeded(antarctic_settings()?, 11);

    // Act & Assert
    for _ in 0..20 {
        assert_eq!(custom.next_reading()?.value(), seeded.next_reading()?.value());
    }
    Ok(())
}

#[test]
fn test_degenerate_range_always_yields_bound() -> anyhow::Result<()> {
    let range = SamplingRange::new(-17.0, -17.0)?;
    let settings = ThermometerSettings::new(range, 2, FORMAT)?;
    let mut thermometer = SimulatedThermometer::seeded(settings, 1);

    for _ in 0..10 {
        assert_eq!(thermometer.next_reading()?.value(), -17.0);
    }
    Ok(())
}

#[test]
fn test_rounding_precision() -> anyhow::Result<()> {
    let range = SamplingRange::new(-18.0, -16.0)?;

    let zero = ThermometerSettings::new(range, 0, FORMAT)?;
    let two = ThermometerSettings::new(range, 2, FORMAT)?;

    assert_eq!(zero.round(-16.6), -17.0);
    assert_eq!(two.round(-16.456), -16.46);
    assert_eq!(two.round(-16.454), -16.45);
    Ok(())
}

#[test]
fn test_inverted_range_is_rejected() {
    let err = SamplingRange::new(-16.0, -18.0).unwrap_err();

    assert!(matches!(err, FrostwatchError::Config { .. }));
    assert!(err.to_string().contains("exceeds maximum"));
}

#[test]
fn test_non_finite_range_is_rejected() {
    assert!(SamplingRange::new(f64::NAN, 0.0).is_err());
    assert!(SamplingRange::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn test_invalid_settings_are_rejected() -> anyhow::Result<()> {
    let range = SamplingRange::new(-18.0, -16.0)?;

    assert!(ThermometerSettings::new(range, 10, FORMAT).is_err());
    assert!(ThermometerSettings::new(range, 1, "%Y-%Q").is_err());
    Ok(())
}

#[test]
fn test_range_too_wide_to_span_is_rejected() {
    let err = SamplingRange::new(-1e308, 1e308).unwrap_err();

    assert!(matches!(err, FrostwatchError::Config { .. }));
    assert!(err.to_string().contains("too wide"));
}

#[test]
fn test_unrepresentable_sample_fails_the_reading_without_panicking() -> anyhow::Result<()> {
    // Arrange
    let range = SamplingRange::new(1e308, 1.7e308)?;
    let settings = ThermometerSettings::new(range, 9, FORMAT)?;
    let mut thermometer = SimulatedThermometer::seeded(settings, 5);

    // Act
    let result = thermometer.next_reading();

    // Assert
    match result {
        Err(err @ FrostwatchError::Source { .. }) => assert!(!err.is_permanent()),
        other => panic!("expected a source error, got {other:?}"),
    }
    Ok(())
}
