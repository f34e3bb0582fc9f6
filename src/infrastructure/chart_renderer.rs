// Headless chart surface: renders the series as a log line with a sparkline
use crate::application::chart_adapter::ChartRenderer;
use crate::domain::series::TelemetryPoint;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, Default)]
pub struct TracingChartRenderer;

impl ChartRenderer for TracingChartRenderer {
    fn render(&self, label: Option<&str>, points: &[TelemetryPoint]) {
        let label = label.unwrap_or("-");
        match points.last() {
            Some(last) => tracing::debug!(
                "{} [{}] {} @ {} ({} points)",
                label,
                sparkline(points),
                last.value,
                last.timestamp,
                points.len()
            ),
            None => tracing::debug!("{} (no data)", label),
        }
    }
}

/// One bar per point, scaled between the window minimum and maximum
pub fn sparkline(points: &[TelemetryPoint]) -> String {
    let (min, max) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.value), hi.max(p.value))
    });
    let span = max - min;

    points
        .iter()
        .map(|p| {
            if !span.is_finite() || span == 0.0 {
                return BARS[0];
            }
            let idx = ((p.value - min) / span * (BARS.len() - 1) as f64).round() as usize;
            BARS[idx.min(BARS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<TelemetryPoint> {
        values
            .iter()
            .map(|v| TelemetryPoint::new("12:00:00", *v))
            .collect()
    }

    #[test]
    fn test_sparkline_scales_to_window() {
        assert_eq!(sparkline(&points(&[0.0, 7.0])), "▁█");
        assert_eq!(sparkline(&points(&[10.0, 20.0, 30.0])).chars().count(), 3);
    }

    #[test]
    fn test_sparkline_flat_and_empty() {
        assert_eq!(sparkline(&points(&[5.0, 5.0, 5.0])), "▁▁▁");
        assert_eq!(sparkline(&[]), "");
    }
}
