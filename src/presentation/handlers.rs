// HTTP request handlers for the dashboard surface
use crate::application::poll_loop::PollState;
use crate::domain::view::DashboardView;
use crate::presentation::app_state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct MetricRequest {
    pub key: String,
}

#[derive(Deserialize)]
pub struct StateRequest {
    pub state: String,
}

#[derive(Deserialize)]
pub struct MaterialRequest {
    pub material: String,
}

#[derive(Deserialize)]
pub struct SectionRequest {
    pub section: String,
}

#[derive(Deserialize)]
pub struct AlarmRequest {
    pub alarm: String,
}

#[derive(Deserialize)]
pub struct SafetyBarrierRequest {
    pub is_open: bool,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub poll: PollState,
    #[serde(flatten)]
    pub view: DashboardView,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current chart, status indicator, selectors and readouts
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        poll: state.poll.state(),
        view: state.session.read().await.view(),
    })
}

/// Switch the charted metric
pub async fn select_metric(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MetricRequest>,
) -> Json<DashboardView> {
    let mut session = state.session.write().await;
    session.select_metric(&request.key);
    Json(session.view())
}

// Control handlers answer before the backend does; the next poll shows the effect.

pub async fn set_state(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StateRequest>,
) -> StatusCode {
    state.dispatcher.set_state(&request.state);
    StatusCode::ACCEPTED
}

pub async fn set_material(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MaterialRequest>,
) -> StatusCode {
    state.dispatcher.set_material(&request.material);
    StatusCode::ACCEPTED
}

pub async fn set_section(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SectionRequest>,
) -> StatusCode {
    state.dispatcher.set_section(&request.section);
    StatusCode::ACCEPTED
}

pub async fn set_alarm(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AlarmRequest>,
) -> StatusCode {
    state.dispatcher.set_alarm(&request.alarm);
    StatusCode::ACCEPTED
}

pub async fn reset_alarm(State(state): State<Arc<AppState>>) -> StatusCode {
    state.dispatcher.reset_alarm();
    StatusCode::ACCEPTED
}

pub async fn set_safety_barrier(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SafetyBarrierRequest>,
) -> StatusCode {
    state.dispatcher.set_safety_barrier(request.is_open);
    StatusCode::ACCEPTED
}
