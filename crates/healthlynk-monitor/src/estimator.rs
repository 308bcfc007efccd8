//! Per-tick metric estimation from active conditions

use crate::metrics::{HealthCondition, HealthMetric, MetricProfile, MetricStatus, Trend};
use crate::random::RandomSource;
use healthlynk_core::Severity;

pub fn severity_multiplier(severity: Severity) -> f64 {
    match severity {
        Severity::Severe => 1.5,
        Severity::Moderate => 1.2,
        Severity::Mild => 1.1,
    }
}

/// Recompute one metric from the conditions that affect it.
///
/// With no affecting condition the value is kept and only status/trend reset.
/// Otherwise the severity multipliers are multiplied together and applied to
/// the metric's baseline. Unknown metrics keep their value.
pub fn estimate(
    metric: &HealthMetric,
    conditions: &[HealthCondition],
    rng: &mut dyn RandomSource,
) -> HealthMetric {
    let relevant: Vec<&HealthCondition> =
        conditions.iter().filter(|c| c.affects(&metric.name)).collect();

    let mut updated = HealthMetric {
        status: MetricStatus::Normal,
        trend: Trend::Stable,
        ..metric.clone()
    };
    if relevant.is_empty() {
        return updated;
    }

    let impact: f64 = relevant
        .iter()
        .map(|c| severity_multiplier(c.severity))
        .product();

    if let Some(profile) = MetricProfile::for_metric(&metric.name) {
        updated.value = profile.baseline * impact;
        updated.status = profile.status_for(updated.value);
    }

    let has_severe = relevant.iter().any(|c| c.severity == Severity::Severe);
    let has_moderate = relevant.iter().any(|c| c.severity == Severity::Moderate);
    // moderate conditions only draw when nothing is severe
    updated.trend = if has_severe || (has_moderate && rng.next_f64() > 0.5) {
        Trend::Up
    } else {
        Trend::Stable
    };

    updated
}
