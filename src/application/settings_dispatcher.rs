// Settings dispatcher - Fire-and-forget operator commands
use crate::application::machine_gateway::MachineGateway;
use crate::domain::controls::{ControlCommand, ControlEndpoint};
use crate::infrastructure::config::EndpointMap;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct SettingsDispatcher {
    gateway: Arc<dyn MachineGateway>,
    endpoints: EndpointMap,
}

impl SettingsDispatcher {
    pub fn new(gateway: Arc<dyn MachineGateway>, endpoints: EndpointMap) -> Self {
        Self { gateway, endpoints }
    }

    /// Send `payload` to the endpoint on a background task.
    ///
    /// Nothing is retried and the session is not touched; the next poll shows
    /// whether the backend took the change. The handle is only useful to tests.
    pub fn dispatch(&self, endpoint: ControlEndpoint, payload: Value) -> JoinHandle<()> {
        let gateway = self.gateway.clone();
        let path = self.endpoints.path_for(endpoint).to_string();

        tokio::spawn(async move {
            match gateway.post_command(&path, &payload).await {
                Ok(()) => tracing::debug!("Sent {} {} to {}", endpoint.name(), payload, path),
                Err(e) => tracing::warn!("Error sending {} to {}: {}", endpoint.name(), path, e),
            }
        })
    }

    pub fn send(&self, command: ControlCommand) -> JoinHandle<()> {
        self.dispatch(command.endpoint(), command.payload())
    }

    pub fn set_state(&self, state: &str) -> JoinHandle<()> {
        self.send(ControlCommand::State(state.to_string()))
    }

    pub fn set_material(&self, material: &str) -> JoinHandle<()> {
        self.send(ControlCommand::Material(material.to_string()))
    }

    pub fn set_section(&self, section: &str) -> JoinHandle<()> {
        self.send(ControlCommand::Section(section.to_string()))
    }

    pub fn set_alarm(&self, alarm: &str) -> JoinHandle<()> {
        self.send(ControlCommand::Alarm(alarm.to_string()))
    }

    pub fn reset_alarm(&self) -> JoinHandle<()> {
        self.send(ControlCommand::ResetAlarm)
    }

    pub fn set_safety_barrier(&self, is_open: bool) -> JoinHandle<()> {
        self.send(ControlCommand::SafetyBarrier { is_open })
    }
}
