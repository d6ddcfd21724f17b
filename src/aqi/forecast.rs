//! AQI Forecast
//!
//! Projects the next 24 hours from a current reading using a diurnal
//! variation band per hour, plus a coarser five-day outlook.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::utils::round_whole;

pub const FORECAST_HOURS: u32 = 24;
pub const FORECAST_DAYS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub hour: u32,
    pub aqi: i64,
}

fn hourly_variation(hour: u32, rng: &dyn RandomSource) -> f64 {
    let u = rng.next_unit();
    match hour {
        5..=8 => -u * 10.0,
        11..=14 => u * 15.0,
        17..=19 => u * 10.0,
        h if h >= 22 || h <= 4 => -u * 8.0,
        _ => u * 10.0 - 5.0,
    }
}

/// One entry per hour starting at `current_hour`, wrapping past midnight.
/// Predictions never drop below 1.
pub fn hourly_forecast(current_aqi: f64, current_hour: u32, rng: &dyn RandomSource) -> Vec<HourlyForecast> {
    (0..FORECAST_HOURS)
        .map(|i| {
            let hour = (current_hour + i) % 24;
            let aqi = round_whole(current_aqi + hourly_variation(hour, rng)).max(1);
            HourlyForecast { hour, aqi }
        })
        .collect()
}

/// The three hours with the lowest predicted AQI, best first.
pub fn best_hours(forecast: &[HourlyForecast]) -> Vec<u32> {
    let mut sorted = forecast.to_vec();
    sorted.sort_by_key(|f| f.aqi);
    sorted.into_iter().take(3).map(|f| f.hour).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub day: String,
    pub aqi: i64,
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Five days starting with `today`, each within ±15 of the current reading
/// and never below 1.
pub fn daily_forecast(current_aqi: f64, today: NaiveDate, rng: &dyn RandomSource) -> Vec<DailyForecast> {
    (0..FORECAST_DAYS)
        .map(|i| {
            let date = today + Duration::days(i);
            let variation = rng.next_unit() * 30.0 - 15.0;
            DailyForecast {
                day: weekday_name(date.weekday()).to_string(),
                aqi: round_whole(current_aqi + variation).max(1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    #[test]
    fn test_forecast_wraps_hours() {
        let forecast = hourly_forecast(60.0, 20, &SeededRandom::from_seed(1));
        assert_eq!(forecast.len(), 24);
        assert_eq!(forecast[0].hour, 20);
        assert_eq!(forecast[4].hour, 0);
        assert_eq!(forecast[23].hour, 19);
    }

    #[test]
    fn test_forecast_floor_is_one() {
        let forecast = hourly_forecast(0.0, 0, &SeededRandom::from_seed(2));
        assert!(forecast.iter().all(|f| f.aqi >= 1));
    }

    #[test]
    fn test_variation_bands() {
        let rng = SeededRandom::from_seed(3);
        for f in hourly_forecast(100.0, 0, &rng) {
            match f.hour {
                5..=8 => assert!((90..=100).contains(&f.aqi)),
                11..=14 => assert!((100..=115).contains(&f.aqi)),
                17..=19 => assert!((100..=110).contains(&f.aqi)),
                h if h >= 22 || h <= 4 => assert!((92..=100).contains(&f.aqi)),
                _ => assert!((95..=105).contains(&f.aqi)),
            }
        }
    }

    #[test]
    fn test_best_hours_picks_lowest() {
        let forecast = vec![
            HourlyForecast { hour: 9, aqi: 80 },
            HourlyForecast { hour: 10, aqi: 40 },
            HourlyForecast { hour: 11, aqi: 95 },
            HourlyForecast { hour: 12, aqi: 30 },
            HourlyForecast { hour: 13, aqi: 55 },
        ];
        assert_eq!(best_hours(&forecast), vec![12, 10, 13]);
    }

    #[test]
    fn test_daily_forecast_names_five_days() {
        // 2024-03-09 is a Saturday.
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        let days: Vec<String> = daily_forecast(60.0, today, &SeededRandom::from_seed(4))
            .into_iter()
            .map(|d| d.day)
            .collect();
        assert_eq!(days, vec!["Saturday", "Sunday", "Monday", "Tuesday", "Wednesday"]);
    }

    #[test]
    fn test_daily_forecast_stays_within_band() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 11).expect("valid date");
        let rng = SeededRandom::from_seed(5);
        for _ in 0..50 {
            for day in daily_forecast(80.0, today, &rng) {
                assert!((65..=95).contains(&day.aqi), "aqi {}", day.aqi);
            }
        }
        assert!(daily_forecast(3.0, today, &rng).iter().all(|d| d.aqi >= 1));
    }
}
