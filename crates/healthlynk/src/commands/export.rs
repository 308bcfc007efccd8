use super::console;
use anyhow::{bail, Context};
use healthlynk_chat::{export_conversation, SessionProfile};
use healthlynk_core::Message;
use healthlynk_records::{default_export_name, Paths, Settings};
use std::path::{Path, PathBuf};

/// Exports directory entry named for today's date
pub fn default_output(paths: &Paths) -> PathBuf {
    paths
        .exports_dir()
        .join(default_export_name(chrono::Local::now().date_naive()))
}

pub fn profile_for(patient: Option<String>) -> SessionProfile {
    match patient {
        Some(name) => SessionProfile::signed_in(name),
        None => SessionProfile::guest(),
    }
}

pub fn run(input: &Path, output: Option<PathBuf>, patient: Option<String>) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = Settings::load(&paths)?;

    let contents = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read transcript {}", input.display()))?;
    let messages: Vec<Message> = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a saved transcript", input.display()))?;

    let output = output.unwrap_or_else(|| default_output(&paths));
    let notifier = console::notifier(&settings);
    if !export_conversation(&messages, &profile_for(patient), &output, notifier.as_ref()) {
        bail!("export to {} failed", output.display());
    }

    println!("{}", output.display());
    Ok(())
}
