// Bridge between the telemetry series and the chart rendering surface
use crate::domain::series::{TelemetryPoint, TelemetrySeries};
use std::sync::Arc;

/// Rendering surface: consumes a point array, produces pixels (or text).
pub trait ChartRenderer: Send + Sync {
    fn render(&self, label: Option<&str>, points: &[TelemetryPoint]);
}

#[derive(Clone, Default)]
pub struct ChartAdapter {
    renderer: Option<Arc<dyn ChartRenderer>>,
    label: Option<String>,
}

impl ChartAdapter {
    pub fn new(renderer: Arc<dyn ChartRenderer>, label: Option<&str>) -> Self {
        Self {
            renderer: Some(renderer),
            label: label.map(str::to_string),
        }
    }

    /// Adapter with no surface attached; rendering is skipped
    pub fn detached(label: Option<&str>) -> Self {
        Self {
            renderer: None,
            label: label.map(str::to_string),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<&str>) {
        self.label = label.map(str::to_string);
    }

    pub fn render(&self, series: &TelemetrySeries) {
        let Some(renderer) = &self.renderer else {
            return;
        };
        let points: Vec<TelemetryPoint> = series.points().cloned().collect();
        renderer.render(self.label.as_deref(), &points);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Renderer that records every frame it is asked to draw
    #[derive(Default)]
    pub(crate) struct RecordingRenderer {
        pub frames: Mutex<Vec<(Option<String>, Vec<f64>)>>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&self, label: Option<&str>, points: &[TelemetryPoint]) {
            self.frames
                .lock()
                .unwrap()
                .push((label.map(str::to_string), points.iter().map(|p| p.value).collect()));
        }
    }

    #[test]
    fn test_render_pushes_series_and_label() {
        let renderer = Arc::new(RecordingRenderer::default());
        let adapter = ChartAdapter::new(renderer.clone(), Some("Temperature (°C)"));
        let mut series = TelemetrySeries::new();
        series.append("10:00:00", 20.0);
        series.append("10:00:01", 20.5);

        adapter.render(&series);

        let frames = renderer.frames.lock().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].0.as_deref(), Some("Temperature (°C)"));
        assert_eq!(frames[0].1, vec![20.0, 20.5]);
    }

    #[test]
    fn test_detached_adapter_keeps_label_but_draws_nothing() {
        let mut adapter = ChartAdapter::detached(Some("Temperature (°C)"));
        let mut series = TelemetrySeries::new();
        series.append("10:00:00", 20.0);

        adapter.render(&series);
        adapter.set_label(Some("Piece Count"));
        adapter.render(&series);

        assert_eq!(adapter.label(), Some("Piece Count"));
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_relabel_applies_to_next_frame() {
        let renderer = Arc::new(RecordingRenderer::default());
        let mut adapter = ChartAdapter::new(renderer.clone(), Some("Temperature (°C)"));
        let series = TelemetrySeries::new();

        adapter.set_label(None);
        adapter.render(&series);

        let frames = renderer.frames.lock().unwrap();
        assert_eq!(frames[0], (None, vec![]));
    }
}
