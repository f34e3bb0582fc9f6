// Gateway trait for machine backend access
use crate::domain::snapshot::MachineSnapshot;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("malformed snapshot body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("empty snapshot payload")]
    Empty,
}

#[async_trait]
pub trait MachineGateway: Send + Sync {
    /// Fetch the current machine snapshot
    async fn fetch_snapshot(&self) -> Result<MachineSnapshot, GatewayError>;

    /// Post a command body to a backend path. The response body is ignored.
    async fn post_command(&self, path: &str, payload: &Value) -> Result<(), GatewayError>;
}
