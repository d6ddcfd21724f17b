//! Air Quality Index
//!
//! Enhancement of base readings, category advice, hourly and daily
//! forecasts, personalized outdoor advice and the seeded reading history.

pub mod category;
pub mod enhance;
pub mod forecast;
pub mod history;
pub mod personal;

pub use category::{Advisory, AqiCategory};
pub use enhance::{AqiEnhancer, EnhanceRequest, EnhancementFactors, EnhancementResult, Location, MAX_AQI};
pub use forecast::{best_hours, daily_forecast, hourly_forecast, DailyForecast, HourlyForecast};
pub use history::{seed_aqi_history, AqiRecord, Pollutant};
pub use personal::{personalized_advice, ActivityLevel, PersonalAdvice, UserProfile};
