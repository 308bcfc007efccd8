//! Condition alerts and the bounded alert log

use crate::metrics::HealthCondition;
use crate::random::RandomSource;
use chrono::{DateTime, Utc};
use healthlynk_core::Severity;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthAlert {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            severity,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn for_condition(condition: &HealthCondition) -> Self {
        Self::new(
            condition.severity,
            format!(
                "{} symptoms are {}. Monitor your health.",
                condition.name, condition.severity
            ),
        )
    }
}

/// Newest-first log that evicts the oldest alert past capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertLog {
    alerts: VecDeque<HealthAlert>,
    capacity: usize,
}

impl AlertLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            alerts: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, alert: HealthAlert) {
        self.alerts.push_front(alert);
        self.alerts.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HealthAlert> {
        self.alerts.iter()
    }

    pub fn latest(&self) -> Option<&HealthAlert> {
        self.alerts.front()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Emits an alert per condition when a draw exceeds the threshold
#[derive(Debug, Clone, Copy)]
pub struct AlertGenerator {
    threshold: f64,
}

impl AlertGenerator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// One independent draw per condition, in order
    pub fn generate(
        &self,
        conditions: &[HealthCondition],
        rng: &mut dyn RandomSource,
    ) -> Vec<HealthAlert> {
        conditions
            .iter()
            .filter(|_| rng.next_f64() > self.threshold)
            .map(HealthAlert::for_condition)
            .collect()
    }
}

impl Default for AlertGenerator {
    fn default() -> Self {
        Self::new(0.7)
    }
}
