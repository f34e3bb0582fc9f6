// Poll loop - Fetches snapshots on a fixed cadence and reconciles the session
use crate::application::machine_gateway::MachineGateway;
use crate::application::session::SharedSession;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const MIN_PERIOD: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub initial_delay: Duration,
    pub period: Duration,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            period: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PollState {
    /// No tick issued yet
    Idle,
    Polling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Applied,
    /// A newer tick had already been applied
    Stale,
    /// Fetch failed; nothing was touched
    Skipped,
}

#[derive(Clone)]
pub struct PollLoop {
    gateway: Arc<dyn MachineGateway>,
    session: SharedSession,
    schedule: PollSchedule,
    issued: Arc<AtomicU64>,
}

impl PollLoop {
    pub fn new(gateway: Arc<dyn MachineGateway>, session: SharedSession, schedule: PollSchedule) -> Self {
        Self {
            gateway,
            session,
            schedule,
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn state(&self) -> PollState {
        match self.issued.load(Ordering::SeqCst) {
            0 => PollState::Idle,
            _ => PollState::Polling,
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Wait the initial delay, then tick forever.
    ///
    /// Every tick fetches on its own task, so a slow backend never holds up
    /// the schedule. Failures are logged and the next tick runs as planned.
    pub async fn run(self) {
        tracing::info!(
            "Polling every {:?} after {:?}",
            self.schedule.period,
            self.schedule.initial_delay
        );
        tokio::time::sleep(self.schedule.initial_delay).await;

        let mut interval = tokio::time::interval(self.schedule.period.max(MIN_PERIOD));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            let tick = self.issue_tick();
            let this = self.clone();
            tokio::spawn(async move {
                this.poll_once(tick).await;
            });
        }
    }

    fn issue_tick(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Issue and complete a single tick
    #[cfg(test)]
    pub async fn tick(&self) -> TickOutcome {
        let tick = self.issue_tick();
        self.poll_once(tick).await
    }

    pub async fn poll_once(&self, tick: u64) -> TickOutcome {
        match self.gateway.fetch_snapshot().await {
            Ok(snapshot) => {
                let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
                let mut session = self.session.write().await;
                if session.reconcile(tick, &timestamp, &snapshot) {
                    TickOutcome::Applied
                } else {
                    TickOutcome::Stale
                }
            }
            Err(e) => {
                tracing::warn!("Tick {} skipped: {}", tick, e);
                TickOutcome::Skipped
            }
        }
    }
}
