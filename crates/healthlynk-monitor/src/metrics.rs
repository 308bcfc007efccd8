//! Vital-sign metrics and the conditions that drive them

use healthlynk_core::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const HEART_RATE: &str = "Heart Rate";
pub const BLOOD_PRESSURE: &str = "Blood Pressure";
pub const BODY_TEMPERATURE: &str = "Body Temperature";
pub const STRESS_LEVEL: &str = "Stress Level";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Normal,
    Warning,
    Critical,
}

impl MetricStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricStatus::Normal => "normal",
            MetricStatus::Warning => "warning",
            MetricStatus::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub status: MetricStatus,
    pub trend: Trend,
    pub normal_range: NormalRange,
}

impl HealthMetric {
    pub fn new(name: &str, value: f64, unit: &str, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            status: MetricStatus::Normal,
            trend: Trend::Stable,
            normal_range: NormalRange { min, max },
        }
    }
}

/// Active condition fed to the estimator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCondition {
    pub name: String,
    pub severity: Severity,
    pub affected_metrics: BTreeSet<String>,
}

impl HealthCondition {
    pub fn new(name: &str, severity: Severity, affected: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            severity,
            affected_metrics: affected.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn affects(&self, metric: &str) -> bool {
        self.affected_metrics.contains(metric)
    }
}

/// Baseline and escalation thresholds for a known metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricProfile {
    pub baseline: f64,
    /// Values above this are a warning
    pub warning: f64,
    /// Values above this are critical
    pub critical: f64,
}

impl MetricProfile {
    pub fn for_metric(name: &str) -> Option<Self> {
        let (baseline, warning, critical) = match name {
            HEART_RATE => (75.0, 100.0, 120.0),
            BLOOD_PRESSURE => (120.0, 140.0, 160.0),
            BODY_TEMPERATURE => (37.2, 38.5, 39.5),
            STRESS_LEVEL => (45.0, 70.0, 85.0),
            _ => return None,
        };
        Some(Self {
            baseline,
            warning,
            critical,
        })
    }

    pub fn status_for(&self, value: f64) -> MetricStatus {
        if value > self.critical {
            MetricStatus::Critical
        } else if value > self.warning {
            MetricStatus::Warning
        } else {
            MetricStatus::Normal
        }
    }
}

/// The four dashboard metrics at their starting values
pub fn default_metrics() -> Vec<HealthMetric> {
    let mut stress = HealthMetric::new(STRESS_LEVEL, 45.0, "%", 0.0, 50.0);
    stress.status = MetricStatus::Warning;
    stress.trend = Trend::Up;

    vec![
        HealthMetric::new(HEART_RATE, 75.0, "bpm", 60.0, 100.0),
        HealthMetric::new(BLOOD_PRESSURE, 120.0, "mmHg", 90.0, 140.0),
        HealthMetric::new(BODY_TEMPERATURE, 37.2, "°C", 36.1, 37.2),
        stress,
    ]
}

pub fn seed_conditions() -> Vec<HealthCondition> {
    vec![
        HealthCondition::new("Headache", Severity::Mild, &[STRESS_LEVEL, HEART_RATE]),
        HealthCondition::new("Fever", Severity::Moderate, &[BODY_TEMPERATURE, HEART_RATE]),
    ]
}
