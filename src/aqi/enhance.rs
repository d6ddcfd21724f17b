//! AQI Enhancement Engine
//!
//! Scales a base AQI reading by traffic, weather, time-of-day and industrial
//! multipliers. Stateless apart from the clock and random source it reads.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::clock::Clock;
use crate::random::RandomSource;
use crate::utils::{round_to, round_whole};

/// Ceiling of the AQI scale.
pub const MAX_AQI: i64 = 500;

pub const DEFAULT_BASE_AQI: f64 = 50.0;

/// Accepted with every request but not used by the computation yet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhanceRequest {
    pub base_aqi: f64,
    pub location: Location,
}

impl Default for EnhanceRequest {
    fn default() -> Self {
        Self { base_aqi: DEFAULT_BASE_AQI, location: Location::default() }
    }
}

impl EnhanceRequest {
    /// Lenient read of a JSON object body. Missing or non-numeric fields
    /// fall back to their defaults.
    pub fn from_json(body: &Value) -> Self {
        let base_aqi = body.get("base_aqi").and_then(Value::as_f64).unwrap_or(DEFAULT_BASE_AQI);
        let location = body
            .get("location")
            .and_then(|v| serde_json::from_value::<Location>(v.clone()).ok())
            .unwrap_or_default();
        Self { base_aqi, location }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnhancementFactors {
    pub traffic: f64,
    pub weather: f64,
    pub time_of_day: f64,
    pub industrial: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementResult {
    pub original_aqi: f64,
    pub enhanced_aqi: i64,
    pub factors: EnhancementFactors,
    #[serde(with = "crate::utils::timestamp")]
    pub timestamp: NaiveDateTime,
}

pub fn is_rush_hour(hour: u32) -> bool {
    (7..=9).contains(&hour) || (16..=19).contains(&hour)
}

pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Diurnal multiplier. Rush-hour bands are checked before the night band.
pub fn time_of_day_factor(hour: u32) -> f64 {
    if (7..=9).contains(&hour) {
        1.3
    } else if (16..=19).contains(&hour) {
        1.2
    } else if hour >= 22 || hour <= 5 {
        0.8
    } else {
        1.0
    }
}

/// Traffic multiplier. A weekend rush hour is still scaled as rush hour.
pub fn traffic_factor(hour: u32, weekend: bool, rng: &dyn RandomSource) -> f64 {
    let base = rng.uniform(0.8, 1.5);
    if is_rush_hour(hour) {
        base * rng.uniform(1.2, 1.5)
    } else if weekend {
        base * rng.uniform(0.6, 0.9)
    } else {
        base
    }
}

pub struct AqiEnhancer {
    rng: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl AqiEnhancer {
    pub fn new(rng: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self { rng, clock }
    }

    pub fn enhance(&self, request: &EnhanceRequest) -> EnhancementResult {
        let now = self.clock.now();
        let hour = now.hour();
        let rng = self.rng.as_ref();

        let traffic = traffic_factor(hour, is_weekend(now.weekday()), rng);
        let weather = rng.uniform(0.9, 1.2);
        let time_of_day = time_of_day_factor(hour);
        let industrial = rng.uniform(1.0, 1.3);

        let scaled = request.base_aqi * traffic * weather * time_of_day * industrial;
        let enhanced_aqi = round_whole(scaled).min(MAX_AQI);
        debug!(base = request.base_aqi, enhanced = enhanced_aqi, hour, "enhanced aqi");

        EnhancementResult {
            original_aqi: request.base_aqi,
            enhanced_aqi,
            factors: EnhancementFactors {
                traffic: round_to(traffic, 2),
                weather: round_to(weather, 2),
                time_of_day: round_to(time_of_day, 2),
                industrial: round_to(industrial, 2),
            },
            timestamp: now,
        }
    }
}
