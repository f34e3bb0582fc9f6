use crate::application::poll_loop::PollSchedule;
use crate::domain::controls::ControlEndpoint;
use crate::domain::metric::{default_schema, MetricSpec, DEFAULT_METRIC};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub poll: PollSettings,
    #[serde(default)]
    pub chart: ChartSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    pub request_timeout_ms: u64,
    pub endpoints: EndpointMap,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_ms: 5000,
            endpoints: EndpointMap::default(),
        }
    }
}

/// Backend paths, one per data source or control
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EndpointMap {
    pub data: String,
    pub set_state: String,
    pub set_material: String,
    pub set_section: String,
    pub set_alarm: String,
    pub reset_alarm: String,
    pub set_safety_barrier: String,
}

impl Default for EndpointMap {
    fn default() -> Self {
        Self {
            data: "/api/data".to_string(),
            set_state: "/api/set_state".to_string(),
            set_material: "/api/set_material".to_string(),
            set_section: "/api/set_section".to_string(),
            set_alarm: "/api/set_alarm".to_string(),
            reset_alarm: "/api/reset_alarm".to_string(),
            set_safety_barrier: "/api/set_safety_barrier".to_string(),
        }
    }
}

impl EndpointMap {
    pub fn path_for(&self, endpoint: ControlEndpoint) -> &str {
        match endpoint {
            ControlEndpoint::SetState => &self.set_state,
            ControlEndpoint::SetMaterial => &self.set_material,
            ControlEndpoint::SetSection => &self.set_section,
            ControlEndpoint::SetAlarm => &self.set_alarm,
            ControlEndpoint::ResetAlarm => &self.reset_alarm,
            ControlEndpoint::SetSafetyBarrier => &self.set_safety_barrier,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PollSettings {
    pub initial_delay_ms: u64,
    pub period_ms: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            initial_delay_ms: 1000,
            period_ms: 1000,
        }
    }
}

impl PollSettings {
    pub fn schedule(&self) -> PollSchedule {
        PollSchedule {
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            period: Duration::from_millis(self.period_ms),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartSettings {
    pub default_metric: String,
    pub metrics: Vec<MetricSpec>,
    /// Log each chart frame; when off the series is still kept for `/dashboard`
    pub render: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            default_metric: DEFAULT_METRIC.to_string(),
            metrics: default_schema(),
            render: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Load `config/dashboard.*` (optional) overlaid with `DASHBOARD__*` environment variables
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Join the backend base URL and an endpoint path
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
