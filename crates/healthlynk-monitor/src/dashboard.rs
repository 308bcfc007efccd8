//! Live dashboard state and its periodic tick task
//!
//! The tick task is owned by a `TickHandle`. It runs while the dashboard is
//! started and has active conditions, follows condition changes (including
//! from none to some), and is stopped by `dispose` or by dropping the
//! dashboard.

use crate::alerts::{AlertGenerator, AlertLog, HealthAlert};
use crate::config::MonitorConfig;
use crate::estimator::estimate;
use crate::metrics::{default_metrics, seed_conditions, HealthCondition, HealthMetric};
use crate::random::RandomSource;
use healthlynk_core::Severity;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Everything the dashboard displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub metrics: Vec<HealthMetric>,
    pub alerts: AlertLog,
    pub conditions: Vec<HealthCondition>,
    /// Ticks applied so far
    pub ticks: u64,
}

impl DashboardState {
    /// Starting metrics, the two seed conditions and two seed alerts
    pub fn seeded(alert_capacity: usize) -> Self {
        let mut alerts = AlertLog::new(alert_capacity);
        alerts.push(HealthAlert::new(
            Severity::Moderate,
            "Blood pressure slightly elevated. Monitor for changes.",
        ));
        alerts.push(HealthAlert::new(
            Severity::Mild,
            "Increased stress levels detected. Consider taking a break.",
        ));

        Self {
            metrics: default_metrics(),
            alerts,
            conditions: seed_conditions(),
            ticks: 0,
        }
    }

    /// Apply one tick: re-estimate every metric, then draw alerts
    pub fn tick(&mut self, generator: &AlertGenerator, rng: &mut dyn RandomSource) {
        self.metrics = self
            .metrics
            .iter()
            .map(|m| estimate(m, &self.conditions, rng))
            .collect();

        for alert in generator.generate(&self.conditions, rng) {
            self.alerts.push(alert);
        }
        self.ticks += 1;
    }

    pub fn metric(&self, name: &str) -> Option<&HealthMetric> {
        self.metrics.iter().find(|m| m.name == name)
    }
}

struct Shared {
    state: DashboardState,
    rng: Box<dyn RandomSource>,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Running tick task; aborted on drop
struct TickHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl TickHandle {
    fn stop(self) {
        let _ = self.shutdown_tx.try_send(());
        self.task.abort();
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct Dashboard {
    shared: Arc<Mutex<Shared>>,
    config: MonitorConfig,
    generator: AlertGenerator,
    ticker: Option<TickHandle>,
    /// `start` was called and `stop` has not been called since
    started: bool,
    disposed: bool,
}

impl Dashboard {
    /// A dashboard over the seeded state. Call `start` to begin ticking.
    pub fn new(config: MonitorConfig, rng: Box<dyn RandomSource>) -> Self {
        let state = DashboardState::seeded(config.alert_capacity);
        Self::with_state(config, state, rng)
    }

    pub fn with_state(
        config: MonitorConfig,
        state: DashboardState,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let generator = AlertGenerator::new(config.alert_threshold);
        Self {
            shared: Arc::new(Mutex::new(Shared { state, rng })),
            config,
            generator,
            ticker: None,
            started: false,
            disposed: false,
        }
    }

    /// Begin ticking. With no active conditions the dashboard stays idle
    /// until `set_conditions` supplies some. Does nothing once disposed.
    /// Must be called within a tokio runtime.
    pub fn start(&mut self) {
        if self.disposed {
            return;
        }
        self.started = true;
        self.spawn_ticker();
    }

    fn spawn_ticker(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        if lock(&self.shared).state.conditions.is_empty() {
            debug!("no active conditions, dashboard idle");
            return;
        }

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let shared = Arc::clone(&self.shared);
        let generator = self.generator;
        // interval_at panics on a zero period
        let period = self.config.tick_interval.max(Duration::from_millis(1));

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let mut guard = lock(&shared);
                        let Shared { state, rng } = &mut *guard;
                        state.tick(&generator, rng.as_mut());
                        debug!(tick = state.ticks, alerts = state.alerts.len(), "dashboard tick");
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("dashboard tick task received shutdown signal");
                        break;
                    }
                }
            }
        });

        info!(interval_ms = period.as_millis() as u64, "dashboard started");
        self.ticker = Some(TickHandle { shutdown_tx, task });
    }

    /// Stop ticking without disposing; `start` may be called again
    pub fn stop(&mut self) {
        self.started = false;
        self.stop_ticker();
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    /// Replace the active conditions. A started dashboard restarts its tick
    /// task, or goes idle when `conditions` is empty.
    pub fn set_conditions(&mut self, conditions: Vec<HealthCondition>) {
        self.stop_ticker();
        lock(&self.shared).state.conditions = conditions;
        if self.started && !self.disposed {
            self.spawn_ticker();
        }
    }

    /// Apply one tick immediately, outside the timer
    pub fn tick_now(&self) {
        let mut guard = lock(&self.shared);
        let Shared { state, rng } = &mut *guard;
        state.tick(&self.generator, rng.as_mut());
    }

    pub fn snapshot(&self) -> DashboardState {
        lock(&self.shared).state.clone()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Stop the tick task for good
    pub fn dispose(&mut self) {
        self.stop();
        if !self.disposed {
            self.disposed = true;
            info!("dashboard disposed");
        }
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
