use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthlynk")]
#[command(version)]
#[command(about = "Symptom chat assistant and simulated health dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive consultation (reads lines from stdin)
    Chat {
        /// Name printed on exported transcripts
        #[arg(long)]
        patient: Option<String>,

        /// Write the transcript as JSON on exit
        #[arg(long)]
        save: Option<PathBuf>,

        /// Use local rule-based replies even when an API key is set
        #[arg(long)]
        offline: bool,
    },

    /// Classify a message and show the matching guidance
    Classify {
        /// Message text
        #[arg(required = true)]
        text: Vec<String>,

        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the live health dashboard
    Monitor {
        /// Stop after this many ticks
        #[arg(short, long, default_value_t = 3)]
        ticks: u64,

        /// Seed for reproducible readings
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds between ticks
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Show past consultations
    History {
        /// Only consultations resolved with a home remedy
        #[arg(long, conflicts_with = "referrals")]
        remedies: bool,

        /// Only consultations referred to a doctor
        #[arg(long)]
        referrals: bool,
    },

    /// Show remedies or doctors for a condition
    Guidance {
        /// Condition id, e.g. headache
        condition: String,

        /// Override the condition's severity
        #[arg(long)]
        severity: Option<String>,
    },

    /// Export a saved JSON transcript to PDF
    Export {
        /// Transcript written by `chat --save`
        input: PathBuf,

        /// Output file (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        patient: Option<String>,
    },

    /// Show or change preferences
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print current settings
    Show,
    /// Change one setting
    Set { key: String, value: String },
    /// Restore defaults
    Reset,
}
