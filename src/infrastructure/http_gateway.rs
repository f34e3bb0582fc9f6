// HTTP gateway to the machine backend
use crate::application::machine_gateway::{GatewayError, MachineGateway};
use crate::domain::snapshot::MachineSnapshot;
use crate::infrastructure::config::{endpoint_url, BackendSettings};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpMachineGateway {
    client: reqwest::Client,
    base_url: String,
    data_path: String,
}

impl HttpMachineGateway {
    pub fn new(settings: &BackendSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            data_path: settings.endpoints.data.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

fn transport(endpoint: &str, e: reqwest::Error) -> GatewayError {
    GatewayError::Transport {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl MachineGateway for HttpMachineGateway {
    async fn fetch_snapshot(&self) -> Result<MachineSnapshot, GatewayError> {
        let url = self.url(&self.data_path);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        if !response.status().is_success() {
            return Err(GatewayError::Status {
                endpoint: url,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| transport(&url, e))?;
        // `null` or an empty body means the backend had nothing to report
        if body.trim().is_empty() {
            return Err(GatewayError::Empty);
        }
        let snapshot: Option<MachineSnapshot> = serde_json::from_str(&body)?;
        snapshot.ok_or(GatewayError::Empty)
    }

    async fn post_command(&self, path: &str, payload: &Value) -> Result<(), GatewayError> {
        let url = self.url(path);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        if !response.status().is_success() {
            return Err(GatewayError::Status {
                endpoint: url,
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
