//! Environmental Monitor
//! 
//! HTTP service exposing simulated traffic and water quality readings with
//! rolling history, plus AQI enhancement and advice.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use enviro_monitor::{run_server, AppState, Clock, MonitorConfig, RandomSource, SeededRandom, SystemClock};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("enviro_monitor=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = MonitorConfig::from_env()?;

    let rng: Arc<dyn RandomSource> = match config.seed {
        Some(seed) => {
            info!("Using fixed random seed {}", seed);
            Arc::new(SeededRandom::from_seed(seed))
        }
        None => Arc::new(SeededRandom::from_entropy()),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let state = AppState::new(rng, clock);
    info!(
        traffic = state.traffic.history_len(),
        water = state.water.history_len(),
        aqi = state.aqi_history.len(),
        "Seeded signal history"
    );

    run_server(&config, state).await
}
