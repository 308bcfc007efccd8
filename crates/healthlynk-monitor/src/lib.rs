//! Simulated live health dashboard: metric estimation and condition alerts

mod alerts;
mod config;
mod dashboard;
mod estimator;
mod metrics;
mod random;

pub use alerts::{AlertGenerator, AlertLog, HealthAlert};
pub use config::MonitorConfig;
pub use dashboard::{Dashboard, DashboardState};
pub use estimator::{estimate, severity_multiplier};
pub use metrics::{
    default_metrics, seed_conditions, HealthCondition, HealthMetric, MetricProfile, MetricStatus,
    NormalRange, Trend, BLOOD_PRESSURE, BODY_TEMPERATURE, HEART_RATE, STRESS_LEVEL,
};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
