// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use frostwatch_core::Reading;

pub fn reading(value: f64, timestamp: &str) -> Reading {
    Reading::new(value, timestamp)
}

pub fn reading_t1() -> Reading {
    reading(-18.0, "2025-01-01 12:00:01")
}

pub fn reading_t2() -> Reading {
    reading(-17.0, "2025-01-01 12:00:02")
}

pub fn reading_t3() -> Reading {
    reading(-16.0, "2025-01-01 12:00:03")
}

pub fn reading_t4() -> Reading {
    reading(-15.0, "2025-01-01 12:00:04")
}

/// Four readings warming by one degree per second.
pub fn warming_trend() -> Vec<Reading> {
    vec![reading_t1(), reading_t2(), reading_t3(), reading_t4()]
}

/// `count` readings with distinct values and timestamps, starting at -18.0.
pub fn distinct_readings(count: u32) -> Vec<Reading> {
    (0..count)
        .map(|i| {
            reading(
                -18.0 + f64::from(i % 20) / 10.0,
                &format!("2025-01-01 12:{:02}:{:02}", i / 60, i % 60),
            )
        })
        .collect()
}
