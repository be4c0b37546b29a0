use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;

use super::{page, AppState};
use crate::bridge::{ChartUpdate, ControlEvent, DashboardLayout, OutputId, RawControls};
use crate::models::ChartDescription;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side; clients only see a generic message.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Page
// ============================================================

pub async fn index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    page::render_index(state.bridge.layout())
        .map(Html)
        .map_err(internal_error)
}

pub async fn get_layout(State(state): State<AppState>) -> Json<DashboardLayout> {
    Json(state.bridge.layout().clone())
}

// ============================================================
// Charts
// ============================================================

/// Both charts at the default control values, as drawn on page load.
pub async fn get_initial_charts(
    State(state): State<AppState>,
) -> Result<Json<ChartUpdate>, (StatusCode, String)> {
    let event = ControlEvent::new(None, state.bridge.default_controls());
    state
        .dispatcher
        .dispatch(event)
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Recompute the outputs that depend on the control that changed.
pub async fn callback(
    State(state): State<AppState>,
    Json(event): Json<ControlEvent>,
) -> Result<Json<ChartUpdate>, (StatusCode, String)> {
    state
        .dispatcher
        .dispatch(event)
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Query parameters for fetching a single chart.
/// Omitted values fall back to the control defaults.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ChartQuery {
    fn into_controls(self, defaults: RawControls) -> RawControls {
        let [default_low, default_high] = defaults.payload;
        RawControls {
            site: self.site.unwrap_or(defaults.site),
            payload: [
                self.low.unwrap_or(default_low),
                self.high.unwrap_or(default_high),
            ],
        }
    }
}

pub async fn get_success_pie(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Json<ChartDescription> {
    let controls = query.into_controls(state.bridge.default_controls());
    Json(state.bridge.chart(OutputId::SuccessPieChart, &controls))
}

pub async fn get_payload_scatter(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Json<ChartDescription> {
    let controls = query.into_controls(state.bridge.default_controls());
    Json(state.bridge.chart(OutputId::SuccessPayloadScatterChart, &controls))
}
