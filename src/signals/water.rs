//! Water Quality Signal
//!
//! A composite quality index plus the chemical parameters behind it. The
//! status tier and safety flag follow from the index alone.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Signal;
use crate::random::RandomSource;
use crate::utils::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl WaterStatus {
    /// Step function over the quality index. Only `Poor` is unsafe.
    pub fn from_index(index: u32) -> Self {
        if index <= 25 {
            WaterStatus::Excellent
        } else if index <= 50 {
            WaterStatus::Good
        } else if index <= 75 {
            WaterStatus::Fair
        } else {
            WaterStatus::Poor
        }
    }

    pub fn is_safe(self) -> bool {
        !matches!(self, WaterStatus::Poor)
    }

    pub fn description(self) -> &'static str {
        match self {
            WaterStatus::Excellent => "Water quality is excellent. Suitable for all uses.",
            WaterStatus::Good => "Water quality is good. Suitable for most uses.",
            WaterStatus::Fair => "Water quality is fair. Some treatment may be required for certain uses.",
            WaterStatus::Poor => "Water quality is poor. Avoid use without proper treatment.",
        }
    }
}

/// Status, safety and plain-language description for one index value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterEvaluation {
    pub index: u32,
    pub status: WaterStatus,
    pub description: String,
    pub safe: bool,
}

impl WaterEvaluation {
    pub fn for_index(index: u32) -> Self {
        let status = WaterStatus::from_index(index);
        Self { index, status, description: status.description().to_string(), safe: status.is_safe() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterParameters {
    pub ph: f64,
    pub turbidity: f64,
    pub dissolved_oxygen: f64,
    pub conductivity: u32,
    pub nitrates: f64,
    pub e_coli: f64,
}

impl WaterParameters {
    fn sample(rng: &dyn RandomSource) -> Self {
        Self {
            ph: round_to(rng.uniform(6.5, 8.5), 1),
            turbidity: round_to(rng.uniform(0.5, 5.0), 1),
            dissolved_oxygen: round_to(rng.uniform(6.0, 10.0), 1),
            conductivity: rng.int_in(300, 600) as u32,
            nitrates: round_to(rng.uniform(0.5, 10.0), 1),
            e_coli: round_to(rng.uniform(1.0, 20.0), 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterSnapshot {
    pub index: u32,
    pub parameters: WaterParameters,
    #[serde(with = "crate::utils::timestamp")]
    pub last_updated: NaiveDateTime,
    pub status: WaterStatus,
    pub safe: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterRecord {
    #[serde(with = "crate::utils::timestamp")]
    pub timestamp: NaiveDateTime,
    pub index: u32,
    pub status: WaterStatus,
    pub safe: bool,
}

/// Water quality signal marker.
pub struct Water;

fn draw_index(rng: &dyn RandomSource) -> u32 {
    rng.int_in(10, 100) as u32
}

impl Signal for Water {
    type Snapshot = WaterSnapshot;
    type Record = WaterRecord;

    const NAME: &'static str = "water";

    fn initial_snapshot(now: NaiveDateTime) -> WaterSnapshot {
        WaterSnapshot {
            index: 35,
            parameters: WaterParameters {
                ph: 7.2,
                turbidity: 1.8,
                dissolved_oxygen: 8.5,
                conductivity: 450,
                nitrates: 2.1,
                e_coli: 5.2,
            },
            last_updated: now,
            status: WaterStatus::Good,
            safe: true,
        }
    }

    fn regenerate(snapshot: &mut WaterSnapshot, rng: &dyn RandomSource, now: NaiveDateTime) {
        let index = draw_index(rng);
        let status = WaterStatus::from_index(index);

        snapshot.index = index;
        snapshot.parameters = WaterParameters::sample(rng);
        snapshot.last_updated = now;
        snapshot.status = status;
        snapshot.safe = status.is_safe();
    }

    fn record(snapshot: &WaterSnapshot) -> WaterRecord {
        WaterRecord {
            timestamp: snapshot.last_updated,
            index: snapshot.index,
            status: snapshot.status,
            safe: snapshot.safe,
        }
    }

    fn seed_record(rng: &dyn RandomSource, timestamp: NaiveDateTime) -> WaterRecord {
        let index = draw_index(rng);
        let status = WaterStatus::from_index(index);
        WaterRecord { timestamp, index, status, safe: status.is_safe() }
    }
}
