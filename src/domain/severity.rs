// Alarm classification: machine state to visual severity
use crate::domain::snapshot::{MachineSnapshot, MachineState};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Alarm,
}

impl Severity {
    /// Style class applied to the status indicator
    pub fn style_class(&self) -> &'static str {
        match self {
            Severity::Normal => "no-alarm",
            Severity::Warning => "error-active",
            Severity::Alarm => "alarm-active",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityState {
    pub severity: Severity,
    pub message: Option<String>,
}

impl SeverityState {
    pub fn normal() -> Self {
        Self {
            severity: Severity::Normal,
            message: None,
        }
    }

    pub fn message_visible(&self) -> bool {
        self.message.is_some()
    }
}

impl Default for SeverityState {
    fn default() -> Self {
        Self::normal()
    }
}

/// Classify a snapshot. Pure: the previous severity plays no part.
pub fn classify(snapshot: &MachineSnapshot) -> SeverityState {
    match snapshot.machine_state() {
        MachineState::Alarm => SeverityState {
            severity: Severity::Alarm,
            message: Some(format!("Alarm: {}", snapshot.alarm_label())),
        },
        MachineState::Error => SeverityState {
            severity: Severity::Warning,
            message: Some(format!("Error: {}", snapshot.alarm_label())),
        },
        _ => SeverityState::normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reported(state: Option<&str>, alarm_type: Option<&str>) -> MachineSnapshot {
        MachineSnapshot {
            state: state.map(str::to_string),
            alarm_type: alarm_type.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_alarm_state() {
        let result = classify(&reported(Some("allarme"), Some("BLADE")));
        assert_eq!(result.severity, Severity::Alarm);
        assert_eq!(result.message.as_deref(), Some("Alarm: BLADE"));
        assert!(result.message_visible());
        assert_eq!(result.severity.style_class(), "alarm-active");
    }

    #[test]
    fn test_error_state_without_alarm_type() {
        let result = classify(&reported(Some("errore"), None));
        assert_eq!(result.severity, Severity::Warning);
        assert_eq!(result.message.as_deref(), Some("Error: Unknown"));
        assert!(result.message_visible());
        assert_eq!(result.severity.style_class(), "error-active");
    }

    #[test]
    fn test_other_states_are_normal() {
        for state in [Some("idle"), Some("in funzione"), Some("in pausa"), Some(""), None] {
            let result = classify(&reported(state, None));
            assert_eq!(result, SeverityState::normal());
            assert!(!result.message_visible());
        }
        // alarm type alone does not raise severity
        let running = reported(Some("in funzione"), Some("usura lama"));
        assert_eq!(classify(&running).severity, Severity::Normal);
    }

    #[test]
    fn test_english_aliases() {
        let alarm = classify(&reported(Some("alarm"), Some("coolant")));
        assert_eq!(alarm.message.as_deref(), Some("Alarm: coolant"));
        let error = classify(&reported(Some("error"), Some("")));
        assert_eq!(error.message.as_deref(), Some("Error: Unknown"));
    }

    #[test]
    fn test_state_must_match_exactly() {
        assert_eq!(classify(&reported(Some("ALLARME "), Some("BLADE"))), SeverityState::normal());
        assert_eq!(classify(&reported(Some("Errore"), None)), SeverityState::normal());
    }

    #[test]
    fn test_each_call_is_independent() {
        let _ = classify(&reported(Some("allarme"), Some("BLADE")));
        assert_eq!(classify(&reported(Some("idle"), None)).severity, Severity::Normal);
    }
}
