// Dashboard view model: what the UI regions display
use super::severity::SeverityState;
use super::snapshot::{display_fixed, display_whole, MachineSnapshot};
use serde::Serialize;

/// Values bound to the state/material/section selectors
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selectors {
    pub state: Option<String>,
    pub material: Option<String>,
    pub section: Option<String>,
}

impl Selectors {
    pub fn from_snapshot(snapshot: &MachineSnapshot) -> Self {
        Self {
            state: snapshot.state.clone(),
            material: snapshot.material.clone(),
            section: snapshot.section.clone(),
        }
    }
}

/// Formatted readouts shown beside the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readouts {
    pub tensile_strength: String,
    pub cutting_speed: String,
    pub feed_rate: String,
    pub pieces: String,
    pub temperature: String,
    pub consumption: String,
    pub blade_wear: String,
    pub coolant_level: String,
}

impl Readouts {
    pub fn from_snapshot(snapshot: &MachineSnapshot) -> Self {
        Self {
            tensile_strength: display_whole(snapshot.tensile_strength),
            cutting_speed: display_fixed(snapshot.cutting_speed, 1),
            feed_rate: display_fixed(snapshot.feed_rate, 3),
            pieces: display_whole(snapshot.pieces),
            temperature: display_fixed(snapshot.temperature, 1),
            consumption: display_fixed(snapshot.consumption, 1),
            blade_wear: display_fixed(snapshot.blade_wear, 1),
            coolant_level: display_fixed(snapshot.coolant_level, 1),
        }
    }
}

impl Default for Readouts {
    fn default() -> Self {
        Self::from_snapshot(&MachineSnapshot::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusIndicator {
    pub class: &'static str,
    pub message: Option<String>,
    pub message_visible: bool,
}

impl From<&SeverityState> for StatusIndicator {
    fn from(state: &SeverityState) -> Self {
        Self {
            class: state.severity.style_class(),
            message: state.message.clone(),
            message_visible: state.message_visible(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub metric: String,
    pub label: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub chart: ChartView,
    pub status: StatusIndicator,
    pub selectors: Selectors,
    pub readouts: Readouts,
}
