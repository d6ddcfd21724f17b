//! Environmental Monitor
//! 
//! Simulated environmental signals served over HTTP:
//! - Traffic and water quality readings with bounded rolling history
//! - AQI enhancement from traffic, weather, time-of-day and industrial factors
//! - AQI category advice and hourly forecast
//! - Injectable clock and seedable random source

pub mod aqi;
pub mod clock;
pub mod config;
pub mod random;
pub mod series;
pub mod server;
pub mod signals;
pub mod utils;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::MonitorConfig;
pub use random::{RandomSource, SeededRandom};
pub use series::{SeriesStore, HISTORY_CAPACITY, SEED_HOURS};
pub use server::{router, run_server, AppState};
