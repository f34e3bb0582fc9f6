// Selectable chart metrics
use crate::domain::series::TelemetrySeries;
use crate::domain::snapshot::MachineSnapshot;
use serde::{Deserialize, Serialize};

pub const DEFAULT_METRIC: &str = "temperature";

/// One entry of the metric schema: selector key, snapshot field, chart label
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetricSpec {
    pub key: String,
    pub field: String,
    pub label: String,
}

impl MetricSpec {
    pub fn new(key: &str, field: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            field: field.to_string(),
            label: label.to_string(),
        }
    }
}

pub fn default_schema() -> Vec<MetricSpec> {
    vec![
        MetricSpec::new("temperature", "temperature", "Temperature (°C)"),
        MetricSpec::new("consumption", "consumption", "Power Consumption (W)"),
        MetricSpec::new("pieces", "pieces", "Piece Count"),
        MetricSpec::new("cutting_speed", "cutting_speed", "Cutting Speed (m/min)"),
        MetricSpec::new("feed_rate", "feed_rate", "Feed Rate (mm/tooth)"),
        MetricSpec::new("blade_wear", "blade_wear", "Blade Wear (%)"),
        MetricSpec::new("coolant_level", "coolant_level", "Coolant Level (%)"),
    ]
}

#[derive(Debug, Clone)]
pub struct MetricSelector {
    schema: Vec<MetricSpec>,
    active: String,
}

impl MetricSelector {
    pub fn new(schema: Vec<MetricSpec>, default_key: &str) -> Self {
        Self {
            schema,
            active: default_key.to_string(),
        }
    }

    pub fn active_key(&self) -> &str {
        &self.active
    }

    fn lookup(&self, key: &str) -> Option<&MetricSpec> {
        self.schema.iter().find(|m| m.key == key)
    }

    /// Chart label of the active metric; `None` for keys outside the schema
    pub fn label(&self) -> Option<&str> {
        self.lookup(&self.active).map(|m| m.label.as_str())
    }

    /// Snapshot field of the active metric. Unknown keys read the field of the same name.
    pub fn field(&self) -> &str {
        self.lookup(&self.active)
            .map(|m| m.field.as_str())
            .unwrap_or(self.active.as_str())
    }

    pub fn extract(&self, snapshot: &MachineSnapshot) -> f64 {
        snapshot.reading(self.field())
    }

    /// Switch the active metric and clear the series it was feeding.
    ///
    /// Returns the new chart label.
    pub fn select(&mut self, key: &str, series: &mut TelemetrySeries) -> Option<&str> {
        self.active = key.to_string();
        series.reset();
        self.label()
    }
}

impl Default for MetricSelector {
    fn default() -> Self {
        Self::new(default_schema(), DEFAULT_METRIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selector = MetricSelector::default();
        assert_eq!(selector.active_key(), "temperature");
        assert_eq!(selector.label(), Some("Temperature (°C)"));
        assert_eq!(selector.field(), "temperature");
    }

    #[test]
    fn test_select_resets_series() {
        let mut selector = MetricSelector::default();
        let mut series = TelemetrySeries::new();
        series.append("10:00:00", 21.0);
        series.append("10:00:01", 22.0);

        let label = selector.select("consumption", &mut series).map(str::to_string);

        assert_eq!(label.as_deref(), Some("Power Consumption (W)"));
        assert!(series.is_empty());
        assert_eq!(selector.active_key(), "consumption");
    }

    #[test]
    fn test_unknown_key_is_tolerated() {
        let mut selector = MetricSelector::default();
        let mut series = TelemetrySeries::new();

        assert_eq!(selector.select("scrap_pieces", &mut series), None);
        assert_eq!(selector.field(), "scrap_pieces");

        let snapshot: MachineSnapshot = serde_json::from_str(r#"{"scrap_pieces": 4}"#).unwrap();
        assert_eq!(selector.extract(&snapshot), 4.0);
        assert_eq!(selector.extract(&MachineSnapshot::default()), 0.0);
    }

    #[test]
    fn test_field_mapping_from_schema() {
        let schema = vec![MetricSpec::new("power", "consumption", "Power (W)")];
        let selector = MetricSelector::new(schema, "power");
        let snapshot: MachineSnapshot = serde_json::from_str(r#"{"consumption": 1200.5}"#).unwrap();

        assert_eq!(selector.extract(&snapshot), 1200.5);
    }
}
