//! Traffic Signal
//!
//! Vehicle throughput, congestion tier and the pollution multiplier traffic
//! contributes at the monitored location.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Signal;
use crate::random::RandomSource;
use crate::utils::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CongestionLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl CongestionLevel {
    pub const ALL: [CongestionLevel; 4] = [
        CongestionLevel::Low,
        CongestionLevel::Moderate,
        CongestionLevel::High,
        CongestionLevel::Severe,
    ];

    fn draw(rng: &dyn RandomSource) -> Self {
        rng.pick(&Self::ALL).copied().unwrap_or(CongestionLevel::Moderate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    pub vehicles_per_hour: u32,
    pub congestion_level: CongestionLevel,
    #[serde(with = "crate::utils::timestamp")]
    pub last_updated: NaiveDateTime,
    pub pollution_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRecord {
    #[serde(with = "crate::utils::timestamp")]
    pub timestamp: NaiveDateTime,
    pub vehicles_per_hour: u32,
    pub congestion_level: CongestionLevel,
    pub pollution_factor: f64,
}

/// Traffic signal marker.
pub struct Traffic;

struct TrafficDraw {
    vehicles_per_hour: u32,
    congestion_level: CongestionLevel,
    pollution_factor: f64,
}

impl TrafficDraw {
    fn sample(rng: &dyn RandomSource) -> Self {
        Self {
            vehicles_per_hour: rng.int_in(200, 1000) as u32,
            congestion_level: CongestionLevel::draw(rng),
            pollution_factor: round_to(rng.uniform(0.8, 3.0), 1),
        }
    }
}

impl Signal for Traffic {
    type Snapshot = TrafficSnapshot;
    type Record = TrafficRecord;

    const NAME: &'static str = "traffic";

    fn initial_snapshot(now: NaiveDateTime) -> TrafficSnapshot {
        TrafficSnapshot {
            vehicles_per_hour: 350,
            congestion_level: CongestionLevel::Moderate,
            last_updated: now,
            pollution_factor: 1.2,
        }
    }

    fn regenerate(snapshot: &mut TrafficSnapshot, rng: &dyn RandomSource, now: NaiveDateTime) {
        let draw = TrafficDraw::sample(rng);
        snapshot.vehicles_per_hour = draw.vehicles_per_hour;
        snapshot.congestion_level = draw.congestion_level;
        snapshot.last_updated = now;
        snapshot.pollution_factor = draw.pollution_factor;
    }

    fn record(snapshot: &TrafficSnapshot) -> TrafficRecord {
        TrafficRecord {
            timestamp: snapshot.last_updated,
            vehicles_per_hour: snapshot.vehicles_per_hour,
            congestion_level: snapshot.congestion_level,
            pollution_factor: snapshot.pollution_factor,
        }
    }

    fn seed_record(rng: &dyn RandomSource, timestamp: NaiveDateTime) -> TrafficRecord {
        let draw = TrafficDraw::sample(rng);
        TrafficRecord {
            timestamp,
            vehicles_per_hour: draw.vehicles_per_hour,
            congestion_level: draw.congestion_level,
            pollution_factor: draw.pollution_factor,
        }
    }
}
