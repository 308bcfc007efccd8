//! Configuration for the dashboard tick

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Time between ticks
    pub tick_interval: Duration,

    /// An alert fires when a draw in [0, 1) exceeds this
    pub alert_threshold: f64,

    /// Max alerts kept, newest first
    pub alert_capacity: usize,
}

impl MonitorConfig {
    pub fn new() -> Self {
        Self {
            tick_interval: Duration::from_millis(5000),
            alert_threshold: 0.7,
            alert_capacity: 5,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new()
    }
}
