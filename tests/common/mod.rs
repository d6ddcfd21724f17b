//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use enviro_monitor::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// 2024-03-09 (a Saturday) at `hour:30`.
pub fn saturday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|d| d.and_hms_opt(hour, 30, 0))
        .expect("valid date")
}

/// 2024-03-11 (a Monday) at `hour:30`.
pub fn monday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 11)
        .and_then(|d| d.and_hms_opt(hour, 30, 0))
        .expect("valid date")
}

/// Advances one second on every read so each reading gets a unique stamp.
pub struct SteppingClock {
    start: NaiveDateTime,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { start, ticks: AtomicI64::new(0) }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        self.start + Duration::seconds(self.ticks.fetch_add(1, Ordering::SeqCst))
    }
}

/// Every draw returns the same unit value.
pub struct ConstantRandom(pub f64);

impl enviro_monitor::RandomSource for ConstantRandom {
    fn next_unit(&self) -> f64 {
        self.0
    }
}
