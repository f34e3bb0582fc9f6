// Machine snapshot domain model
use serde::Deserialize;
use std::collections::HashMap;

/// Operating state reported by the machine.
///
/// The backend speaks Italian labels; English aliases are accepted too.
/// Labels must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    Inactive,
    Running,
    Error,
    Alarm,
    Paused,
    EmergencyStop,
    BreakIn,
    Unknown,
}

impl MachineState {
    pub fn from_label(label: &str) -> Self {
        match label {
            "inattiva" | "idle" | "inactive" => Self::Inactive,
            "in funzione" | "running" => Self::Running,
            "errore" | "error" => Self::Error,
            "allarme" | "alarm" => Self::Alarm,
            "in pausa" | "paused" => Self::Paused,
            "arresto emergenza" | "emergency_stop" => Self::EmergencyStop,
            "rodaggio lama" | "break_in" => Self::BreakIn,
            _ => Self::Unknown,
        }
    }
}

/// One telemetry reading from the backend.
///
/// Every field is optional on the wire. Defaults are applied here and
/// nowhere else: numeric readings fall back to `0`, display strings to
/// `"0"`, and a missing alarm type to `"Unknown"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MachineSnapshot {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub alarm_type: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub cutting_speed: Option<f64>,
    #[serde(default)]
    pub feed_rate: Option<f64>,
    #[serde(default)]
    pub pieces: Option<f64>,
    #[serde(default)]
    pub tensile_strength: Option<f64>,
    #[serde(default)]
    pub blade_wear: Option<f64>,
    #[serde(default)]
    pub coolant_level: Option<f64>,
    #[serde(default)]
    pub consumption: Option<f64>,
    /// Fields not modelled above, kept so configured metrics can use them
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

pub const UNKNOWN_ALARM: &str = "Unknown";

impl MachineSnapshot {
    pub fn machine_state(&self) -> MachineState {
        self.state
            .as_deref()
            .map(MachineState::from_label)
            .unwrap_or(MachineState::Unknown)
    }

    pub fn alarm_label(&self) -> &str {
        match self.alarm_type.as_deref() {
            Some(alarm) if !alarm.is_empty() => alarm,
            _ => UNKNOWN_ALARM,
        }
    }

    /// Look up a numeric field by its wire name
    pub fn metric(&self, field: &str) -> Option<f64> {
        match field {
            "temperature" => self.temperature,
            "cutting_speed" => self.cutting_speed,
            "feed_rate" => self.feed_rate,
            "pieces" => self.pieces,
            "tensile_strength" => self.tensile_strength,
            "blade_wear" => self.blade_wear,
            "coolant_level" => self.coolant_level,
            "consumption" => self.consumption,
            other => self.extra.get(other).and_then(|v| v.as_f64()),
        }
    }

    /// Numeric value of a field, `0` when absent
    pub fn reading(&self, field: &str) -> f64 {
        self.metric(field).unwrap_or(0.0)
    }
}

/// Fixed-precision display of an optional reading
pub fn display_fixed(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}", decimals, v),
        _ => "0".to_string(),
    }
}

/// Display of counters and table values: integers without a fraction
pub fn display_whole(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) if v.is_finite() => v.to_string(),
        _ => "0".to_string(),
    }
}
