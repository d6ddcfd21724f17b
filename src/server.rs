use anyhow::Result;
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::aqi::{
    best_hours, daily_forecast, enhance::DEFAULT_BASE_AQI, hourly_forecast, personalized_advice, seed_aqi_history,
    Advisory, AqiEnhancer, AqiRecord, DailyForecast, EnhanceRequest, EnhancementResult, HourlyForecast,
    PersonalAdvice, UserProfile,
};
use crate::clock::Clock;
use crate::config::MonitorConfig;
use crate::random::RandomSource;
use crate::series::SeriesStore;
use crate::signals::{
    TrafficMonitor, TrafficRecord, TrafficSnapshot, WaterEvaluation, WaterMonitor, WaterRecord, WaterSnapshot,
};
use crate::utils::round_whole;

/// Client-facing request errors. Rendered as `{ "error": ... }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body is not valid JSON: {0}")]
    InvalidBody(String),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("invalid request field: {0}")]
    InvalidField(String),
    #[error("invalid query string: {0}")]
    InvalidQuery(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Rejected request: {}", self);
        (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

/// Per-process state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub traffic: Arc<TrafficMonitor>,
    pub water: Arc<WaterMonitor>,
    pub aqi_history: Arc<SeriesStore<AqiRecord>>,
    pub enhancer: Arc<AqiEnhancer>,
    pub rng: Arc<dyn RandomSource>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(rng: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        let aqi_history = seed_aqi_history(rng.as_ref(), clock.now());
        Self {
            traffic: Arc::new(TrafficMonitor::new(rng.clone(), clock.clone())),
            water: Arc::new(WaterMonitor::new(rng.clone(), clock.clone())),
            aqi_history: Arc::new(aqi_history),
            enhancer: Arc::new(AqiEnhancer::new(rng.clone(), clock.clone())),
            rng,
            clock,
        }
    }
}

#[derive(Deserialize)]
struct AqiQuery {
    aqi: Option<f64>,
}

impl AqiQuery {
    fn aqi(&self) -> f64 {
        self.aqi.unwrap_or(DEFAULT_BASE_AQI)
    }
}

#[derive(Deserialize)]
struct WaterQuery {
    index: u32,
}

#[derive(Serialize)]
struct ForecastResponse {
    current_aqi: f64,
    hourly: Vec<HourlyForecast>,
    best_hours: Vec<u32>,
    daily: Vec<DailyForecast>,
}

/// Body of `POST /api/aqi/recommendations`. Every field is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct PersonalRequest {
    aqi: Option<f64>,
    #[serde(flatten)]
    profile: UserProfile,
}

#[derive(Serialize)]
struct PersonalResponse {
    current_aqi: f64,
    hourly: Vec<HourlyForecast>,
    #[serde(flatten)]
    advice: PersonalAdvice,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/traffic/current", get(traffic_current))
        .route("/api/traffic/history", get(traffic_history))
        .route("/api/water/current", get(water_current))
        .route("/api/water/history", get(water_history))
        .route("/api/water/evaluation", get(water_evaluation))
        .route("/api/aqi/enhance", post(enhance_aqi))
        .route("/api/aqi/history", get(aqi_history))
        .route("/api/aqi/forecast", get(aqi_forecast))
        .route("/api/aqi/recommendations", get(aqi_recommendations).post(personal_recommendations))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: &MonitorConfig, state: AppState) -> Result<()> {
    let app = router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Environmental monitor listening at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Environmental monitor stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn traffic_current(State(state): State<AppState>) -> Json<TrafficSnapshot> {
    Json(state.traffic.current())
}

async fn traffic_history(State(state): State<AppState>) -> Json<Vec<TrafficRecord>> {
    Json(state.traffic.history())
}

async fn water_current(State(state): State<AppState>) -> Json<WaterSnapshot> {
    Json(state.water.current())
}

async fn water_history(State(state): State<AppState>) -> Json<Vec<WaterRecord>> {
    Json(state.water.history())
}

async fn water_evaluation(
    query: Result<Query<WaterQuery>, QueryRejection>,
) -> Result<Json<WaterEvaluation>, ApiError> {
    let Query(query) = query?;
    Ok(Json(WaterEvaluation::for_index(query.index)))
}

async fn aqi_history(State(state): State<AppState>) -> Json<Vec<AqiRecord>> {
    Json(state.aqi_history.snapshot())
}

async fn enhance_aqi(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EnhancementResult>, ApiError> {
    let request = parse_enhance_body(&body)?;
    Ok(Json(state.enhancer.enhance(&request)))
}

/// `None` for an empty body; anything else must be a JSON object.
fn parse_object_body(body: &[u8]) -> Result<Option<Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: Value = serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    if !value.is_object() {
        return Err(ApiError::NotAnObject);
    }
    Ok(Some(value))
}

fn parse_enhance_body(body: &[u8]) -> Result<EnhanceRequest, ApiError> {
    Ok(parse_object_body(body)?.map(|v| EnhanceRequest::from_json(&v)).unwrap_or_default())
}

fn parse_personal_body(body: &[u8]) -> Result<PersonalRequest, ApiError> {
    match parse_object_body(body)? {
        Some(value) => serde_json::from_value(value).map_err(|e| ApiError::InvalidField(e.to_string())),
        None => Ok(PersonalRequest::default()),
    }
}

async fn aqi_forecast(
    State(state): State<AppState>,
    query: Result<Query<AqiQuery>, QueryRejection>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let Query(query) = query?;
    let current_aqi = query.aqi();
    let now = state.clock.now();
    let hourly = hourly_forecast(current_aqi, now.hour(), state.rng.as_ref());
    let best_hours = best_hours(&hourly);
    let daily = daily_forecast(current_aqi, now.date(), state.rng.as_ref());

    Ok(Json(ForecastResponse { current_aqi, hourly, best_hours, daily }))
}

async fn aqi_recommendations(
    query: Result<Query<AqiQuery>, QueryRejection>,
) -> Result<Json<Advisory>, ApiError> {
    let Query(query) = query?;
    Ok(Json(Advisory::for_aqi(round_whole(query.aqi()))))
}

async fn personal_recommendations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PersonalResponse>, ApiError> {
    let request = parse_personal_body(&body)?;
    let current_aqi = request.aqi.unwrap_or(DEFAULT_BASE_AQI);
    let hourly = hourly_forecast(current_aqi, state.clock.now().hour(), state.rng.as_ref());
    let advice = personalized_advice(&hourly, &request.profile);

    Ok(Json(PersonalResponse { current_aqi, hourly, advice }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        assert_eq!(parse_enhance_body(b"").unwrap(), EnhanceRequest::default());
        assert_eq!(parse_enhance_body(b"  \n").unwrap(), EnhanceRequest::default());
    }

    #[test]
    fn test_malformed_bodies_rejected() {
        assert!(matches!(parse_enhance_body(b"{base_aqi: 3"), Err(ApiError::InvalidBody(_))));
        assert!(matches!(parse_enhance_body(b"[1, 2]"), Err(ApiError::NotAnObject)));
        assert!(matches!(parse_enhance_body(b"42"), Err(ApiError::NotAnObject)));
    }

    #[test]
    fn test_personal_body_defaults_and_fields() {
        assert_eq!(parse_personal_body(b"").unwrap(), PersonalRequest::default());

        let request =
            parse_personal_body(br#"{"aqi": 42, "has_sensitivities": true, "typical_outdoor_hours": [7, 8]}"#)
                .unwrap();
        assert_eq!(request.aqi, Some(42.0));
        assert!(request.profile.has_sensitivities);
        assert_eq!(request.profile.typical_outdoor_hours, vec![7, 8]);
    }

    #[test]
    fn test_personal_body_rejects_bad_fields() {
        assert!(matches!(parse_personal_body(br#"{"activity_level": "extreme"}"#), Err(ApiError::InvalidField(_))));
        assert!(matches!(parse_personal_body(b"[7]"), Err(ApiError::NotAnObject)));
    }

    #[test]
    fn test_object_body_parsed() {
        let request = parse_enhance_body(br#"{"base_aqi": 75}"#).unwrap();
        assert_eq!(request.base_aqi, 75.0);
    }
}
