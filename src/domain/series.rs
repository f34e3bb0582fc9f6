// Rolling telemetry series feeding the chart
use serde::Serialize;
use std::collections::VecDeque;

/// Number of points kept in the rolling window
pub const SERIES_CAPACITY: usize = 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryPoint {
    pub timestamp: String,
    pub value: f64,
}

impl TelemetryPoint {
    pub fn new(timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            value,
        }
    }
}

/// Bounded FIFO buffer of telemetry points.
///
/// Points are kept in arrival order. Once the window holds
/// [`SERIES_CAPACITY`] points, every append evicts the oldest one.
#[derive(Debug, Clone, Default)]
pub struct TelemetrySeries {
    points: VecDeque<TelemetryPoint>,
}

impl TelemetrySeries {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(SERIES_CAPACITY + 1),
        }
    }

    pub fn append(&mut self, timestamp: impl Into<String>, value: f64) {
        self.points.push_back(TelemetryPoint::new(timestamp, value));
        if self.points.len() > SERIES_CAPACITY {
            self.points.pop_front();
        }
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &TelemetryPoint> {
        self.points.iter()
    }

    /// Timestamp labels, in lockstep with [`TelemetrySeries::values`]
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.timestamp.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}
