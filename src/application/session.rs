// Dashboard session - Owns the series, metric selection and displayed state
use crate::application::chart_adapter::ChartAdapter;
use crate::domain::metric::MetricSelector;
use crate::domain::series::TelemetrySeries;
use crate::domain::severity::{classify, SeverityState};
use crate::domain::snapshot::MachineSnapshot;
use crate::domain::view::{ChartView, DashboardView, Readouts, Selectors, StatusIndicator};
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedSession = Arc<RwLock<DashboardSession>>;

pub struct DashboardSession {
    series: TelemetrySeries,
    selector: MetricSelector,
    chart: ChartAdapter,
    severity: SeverityState,
    selectors: Selectors,
    readouts: Readouts,
    last_applied_tick: Option<u64>,
}

impl DashboardSession {
    pub fn new(selector: MetricSelector, mut chart: ChartAdapter) -> Self {
        chart.set_label(selector.label());
        Self {
            series: TelemetrySeries::new(),
            selector,
            chart,
            severity: SeverityState::normal(),
            selectors: Selectors::default(),
            readouts: Readouts::default(),
            last_applied_tick: None,
        }
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    /// Apply a snapshot fetched by `tick`.
    ///
    /// Responses from a tick older than the last applied one are dropped, so a
    /// slow response can never overwrite fresher state. Returns whether the
    /// snapshot was applied.
    pub fn reconcile(&mut self, tick: u64, timestamp: &str, snapshot: &MachineSnapshot) -> bool {
        if matches!(self.last_applied_tick, Some(last) if tick < last) {
            tracing::debug!(
                "Discarding stale snapshot from tick {} (already applied {:?})",
                tick,
                self.last_applied_tick
            );
            return false;
        }
        self.last_applied_tick = Some(tick);

        let value = self.selector.extract(snapshot);
        self.series.append(timestamp, value);
        self.chart.render(&self.series);

        self.severity = classify(snapshot);
        self.selectors = Selectors::from_snapshot(snapshot);
        self.readouts = Readouts::from_snapshot(snapshot);

        tracing::debug!(
            "Tick {} applied: {}={} severity={:?}",
            tick,
            self.selector.active_key(),
            value,
            self.severity.severity
        );
        true
    }

    /// Change the charted metric; the series restarts empty
    pub fn select_metric(&mut self, key: &str) {
        if !self.series.is_empty() {
            tracing::debug!(
                "Dropping {} points of {} for {}",
                self.series.len(),
                self.selector.active_key(),
                key
            );
        }
        let label = self
            .selector
            .select(key, &mut self.series)
            .map(str::to_string);
        if label.is_none() {
            tracing::debug!("Metric {} is not in the schema, charting it unlabelled", key);
        }
        self.chart.set_label(label.as_deref());
        self.chart.render(&self.series);
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            chart: ChartView {
                metric: self.selector.active_key().to_string(),
                label: self.chart.label().map(str::to_string),
                labels: self.series.labels(),
                values: self.series.values(),
            },
            status: StatusIndicator::from(&self.severity),
            selectors: self.selectors.clone(),
            readouts: self.readouts.clone(),
        }
    }
}

#[cfg(test)]
impl DashboardSession {
    pub fn series(&self) -> &TelemetrySeries {
        &self.series
    }

    pub fn severity(&self) -> &SeverityState {
        &self.severity
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    pub fn active_metric(&self) -> &str {
        self.selector.active_key()
    }

    pub fn last_applied_tick(&self) -> Option<u64> {
        self.last_applied_tick
    }
}
