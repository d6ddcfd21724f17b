//! ISO-8601 Timestamps
//! 
//! Wire format for every reading timestamp: `YYYY-MM-DDTHH:MM:SS.ffffff`,
//! with the fraction left off entirely when the microseconds are zero.
//! Use as `#[serde(with = "crate::utils::timestamp")]`.

use chrono::{NaiveDateTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serializer};

const WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const MICROSECONDS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format(timestamp: &NaiveDateTime) -> String {
    let pattern = if timestamp.nanosecond() / 1_000 == 0 { WHOLE_SECONDS } else { MICROSECONDS };
    timestamp.format(pattern).to_string()
}

pub fn serialize<S: Serializer>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format(timestamp))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse::<NaiveDateTime>().map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_micros(micros: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 11)
            .and_then(|d| d.and_hms_micro_opt(12, 30, 0, micros))
            .expect("valid date")
    }

    #[test]
    fn test_fraction_keeps_six_digits() {
        assert_eq!(format(&at_micros(120_000)), "2024-03-11T12:30:00.120000");
        assert_eq!(format(&at_micros(7)), "2024-03-11T12:30:00.000007");
    }

    #[test]
    fn test_whole_seconds_have_no_fraction() {
        assert_eq!(format(&at_micros(0)), "2024-03-11T12:30:00");
    }

    #[test]
    fn test_parses_back() {
        let json = serde_json::to_string(&format(&at_micros(120_000))).expect("serialize");
        let mut de = serde_json::Deserializer::from_str(&json);
        assert_eq!(deserialize(&mut de).expect("parse"), at_micros(120_000));
    }
}
