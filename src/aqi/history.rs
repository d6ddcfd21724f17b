//! AQI History
//!
//! Hourly AQI readings with their dominant pollutant. Seeded at start-up and
//! served read-only.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::series::SeriesStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "O3")]
    O3,
    #[serde(rename = "NO2")]
    No2,
}

impl Pollutant {
    pub const ALL: [Pollutant; 4] = [Pollutant::Pm25, Pollutant::Pm10, Pollutant::O3, Pollutant::No2];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiRecord {
    #[serde(with = "crate::utils::timestamp")]
    pub timestamp: NaiveDateTime,
    pub value: u32,
    pub dominant_pollutant: Pollutant,
}

pub fn seed_aqi_history(rng: &dyn RandomSource, now: NaiveDateTime) -> SeriesStore<AqiRecord> {
    SeriesStore::seeded(now, |timestamp| AqiRecord {
        timestamp,
        value: rng.int_in(20, 150) as u32,
        dominant_pollutant: rng.pick(&Pollutant::ALL).copied().unwrap_or(Pollutant::Pm25),
    })
}
