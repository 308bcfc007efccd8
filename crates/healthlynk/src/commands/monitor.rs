use healthlynk_monitor::{Dashboard, DashboardState, MonitorConfig, RandomSource, SeededRandom};
use std::fmt::Write;
use std::time::Duration;

const POLL: Duration = Duration::from_millis(50);

pub fn render(state: &DashboardState) -> String {
    let mut out = format!("Tick {}\n", state.ticks);
    for metric in &state.metrics {
        let _ = writeln!(
            out,
            "  {:<18} {:>7.1} {:<5} {:<8} {}",
            metric.name,
            metric.value,
            metric.unit,
            metric.status.as_str(),
            metric.trend.arrow()
        );
    }

    out.push_str("  Alerts:\n");
    for alert in state.alerts.iter() {
        let _ = writeln!(
            out,
            "    [{}] {} {}",
            alert.severity,
            alert.timestamp.format("%H:%M:%S"),
            alert.message
        );
    }
    out
}

pub fn run(ticks: u64, seed: Option<u64>, interval_ms: Option<u64>) -> anyhow::Result<()> {
    let mut config = MonitorConfig::new();
    if let Some(ms) = interval_ms {
        config.tick_interval = Duration::from_millis(ms.max(1));
    }
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::seeded(seed)),
        None => Box::new(SeededRandom::from_entropy()),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let mut dashboard = Dashboard::new(config, rng);
        print!("{}", render(&dashboard.snapshot()));

        dashboard.start();
        if !dashboard.is_running() {
            println!("No active conditions.");
            return;
        }

        let mut shown = 0;
        while shown < ticks {
            tokio::time::sleep(POLL).await;
            let state = dashboard.snapshot();
            if state.ticks > shown {
                shown = state.ticks;
                print!("{}", render(&state));
            }
        }
        dashboard.dispose();
    });
    Ok(())
}
