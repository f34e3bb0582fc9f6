// In-process gateway double for service tests
use crate::application::machine_gateway::{GatewayError, MachineGateway};
use crate::domain::snapshot::MachineSnapshot;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub(crate) enum Scripted {
    Snapshot(&'static str),
    Fail,
}

/// Serves scripted snapshots in order, then repeats the fallback
#[derive(Default)]
pub(crate) struct FakeGateway {
    script: Mutex<VecDeque<(Duration, Scripted)>>,
    fallback: Option<&'static str>,
    fail_commands: bool,
    pub fetches: Mutex<usize>,
    pub commands: Mutex<Vec<(String, Value)>>,
}

impl FakeGateway {
    pub fn always(body: &'static str) -> Self {
        Self {
            fallback: Some(body),
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            fail_commands: true,
            ..Default::default()
        }
    }

    pub fn then(self, delay: Duration, step: Scripted) -> Self {
        self.script.lock().unwrap().push_back((delay, step));
        self
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }

    pub fn sent(&self) -> Vec<(String, Value)> {
        self.commands.lock().unwrap().clone()
    }
}

fn transport_error(endpoint: &str) -> GatewayError {
    GatewayError::Transport {
        endpoint: endpoint.to_string(),
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl MachineGateway for FakeGateway {
    async fn fetch_snapshot(&self) -> Result<MachineSnapshot, GatewayError> {
        *self.fetches.lock().unwrap() += 1;
        let next = self.script.lock().unwrap().pop_front();
        let step = match next {
            Some((delay, step)) => {
                tokio::time::sleep(delay).await;
                step
            }
            None => match self.fallback {
                Some(body) => Scripted::Snapshot(body),
                None => Scripted::Fail,
            },
        };
        match step {
            Scripted::Snapshot(body) => Ok(serde_json::from_str(body)?),
            Scripted::Fail => Err(transport_error("/api/data")),
        }
    }

    async fn post_command(&self, path: &str, payload: &Value) -> Result<(), GatewayError> {
        self.commands
            .lock()
            .unwrap()
            .push((path.to_string(), payload.clone()));
        if self.fail_commands {
            return Err(transport_error(path));
        }
        Ok(())
    }
}
