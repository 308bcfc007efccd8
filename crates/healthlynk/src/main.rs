mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            patient,
            save,
            offline,
        } => commands::chat::run(patient, save, offline),
        Commands::Classify { text, json } => commands::classify::run(&text.join(" "), json),
        Commands::Monitor {
            ticks,
            seed,
            interval_ms,
        } => commands::monitor::run(ticks, seed, interval_ms),
        Commands::History { remedies, referrals } => commands::history::run(remedies, referrals),
        Commands::Guidance {
            condition,
            severity,
        } => commands::guidance::run(&condition, severity.as_deref()),
        Commands::Export {
            input,
            output,
            patient,
        } => commands::export::run(&input, output, patient),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Version => commands::version::run(),
    }
}
