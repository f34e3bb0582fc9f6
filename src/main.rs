// Main entry point - Dependency injection, poll loop and dashboard server
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::chart_adapter::ChartAdapter;
use crate::application::poll_loop::PollLoop;
use crate::application::session::DashboardSession;
use crate::application::settings_dispatcher::SettingsDispatcher;
use crate::domain::metric::MetricSelector;
use crate::infrastructure::chart_renderer::TracingChartRenderer;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_gateway::HttpMachineGateway;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, health_check, reset_alarm, select_metric, set_alarm, set_material,
    set_safety_barrier, set_section, set_state,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config().context("Failed to load dashboard configuration")?;

    // Create gateway (infrastructure layer)
    let gateway = Arc::new(HttpMachineGateway::new(&config.backend)?);

    // Create session and services (application layer)
    let selector = MetricSelector::new(config.chart.metrics.clone(), &config.chart.default_metric);
    let chart = if config.chart.render {
        ChartAdapter::new(Arc::new(TracingChartRenderer), None)
    } else {
        ChartAdapter::detached(None)
    };
    let session = DashboardSession::new(selector, chart).shared();

    let dispatcher = SettingsDispatcher::new(gateway.clone(), config.backend.endpoints.clone());
    let poll = PollLoop::new(gateway, session.clone(), config.poll.schedule());
    let poll_handle = poll.clone().spawn();

    let state = Arc::new(AppState {
        session,
        dispatcher,
        poll,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/metric", put(select_metric))
        .route("/controls/state", post(set_state))
        .route("/controls/material", post(set_material))
        .route("/controls/section", post(set_section))
        .route("/controls/alarm", post(set_alarm))
        .route("/controls/alarm/reset", post(reset_alarm))
        .route("/controls/safety-barrier", post(set_safety_barrier))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!(
        "Starting bandsaw-dashboard on {} (backend {})",
        addr,
        config.backend.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    poll_handle.abort();
    tracing::info!("Dashboard stopped");

    Ok(())
}
