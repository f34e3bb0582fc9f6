// Operator controls that map to backend command endpoints
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEndpoint {
    SetState,
    SetMaterial,
    SetSection,
    SetAlarm,
    ResetAlarm,
    SetSafetyBarrier,
}

impl ControlEndpoint {
    pub fn name(&self) -> &'static str {
        match self {
            ControlEndpoint::SetState => "set_state",
            ControlEndpoint::SetMaterial => "set_material",
            ControlEndpoint::SetSection => "set_section",
            ControlEndpoint::SetAlarm => "set_alarm",
            ControlEndpoint::ResetAlarm => "reset_alarm",
            ControlEndpoint::SetSafetyBarrier => "set_safety_barrier",
        }
    }
}

/// A single operator action together with its JSON body
#[derive(Debug, Clone, PartialEq)]
pub enum ControlCommand {
    State(String),
    Material(String),
    Section(String),
    Alarm(String),
    ResetAlarm,
    SafetyBarrier { is_open: bool },
}

impl ControlCommand {
    pub fn endpoint(&self) -> ControlEndpoint {
        match self {
            ControlCommand::State(_) => ControlEndpoint::SetState,
            ControlCommand::Material(_) => ControlEndpoint::SetMaterial,
            ControlCommand::Section(_) => ControlEndpoint::SetSection,
            ControlCommand::Alarm(_) => ControlEndpoint::SetAlarm,
            ControlCommand::ResetAlarm => ControlEndpoint::ResetAlarm,
            ControlCommand::SafetyBarrier { .. } => ControlEndpoint::SetSafetyBarrier,
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            ControlCommand::State(state) => json!({ "state": state }),
            ControlCommand::Material(material) => json!({ "material": material }),
            ControlCommand::Section(section) => json!({ "section": section }),
            ControlCommand::Alarm(alarm) => json!({ "alarm": alarm }),
            ControlCommand::ResetAlarm => json!({}),
            ControlCommand::SafetyBarrier { is_open } => json!({ "is_open": is_open }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads_are_single_key() {
        assert_eq!(
            ControlCommand::Material("steel".into()).payload().to_string(),
            r#"{"material":"steel"}"#
        );
        assert_eq!(ControlCommand::Alarm("usura lama".into()).payload(), json!({"alarm": "usura lama"}));
        assert_eq!(ControlCommand::ResetAlarm.payload().to_string(), "{}");
        assert_eq!(
            ControlCommand::SafetyBarrier { is_open: true }.payload(),
            json!({"is_open": true})
        );
    }

    #[test]
    fn test_endpoint_names() {
        assert_eq!(ControlCommand::State("in funzione".into()).endpoint().name(), "set_state");
        assert_eq!(ControlCommand::ResetAlarm.endpoint().name(), "reset_alarm");
        assert_eq!(
            ControlCommand::SafetyBarrier { is_open: false }.endpoint(),
            ControlEndpoint::SetSafetyBarrier
        );
    }
}
