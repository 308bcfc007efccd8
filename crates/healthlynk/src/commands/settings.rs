use crate::cli::SettingsAction;
use anyhow::{bail, Context};
use healthlynk_records::{Paths, Settings};

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => bail!("expected on/off, got '{}'", other),
    }
}

/// Apply `key = value` to `settings`
fn apply(settings: &mut Settings, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "notifications" => settings.notifications_enabled = parse_bool(value)?,
        "location" => settings.location_enabled = parse_bool(value)?,
        "voice" => settings.voice_enabled = parse_bool(value)?,
        "dark-theme" => settings.dark_theme = parse_bool(value)?,
        "volume" => {
            let volume: u8 = value
                .parse()
                .with_context(|| format!("invalid volume '{}'", value))?;
            if volume > 100 {
                bail!("volume must be between 0 and 100");
            }
            settings.voice_volume = volume;
        }
        other => bail!(
            "unknown setting '{}' (notifications, location, voice, volume, dark-theme)",
            other
        ),
    }
    Ok(())
}

fn show(settings: &Settings) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

pub fn run(action: Option<SettingsAction>) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let mut settings = Settings::load(&paths)?;

    match action {
        Some(SettingsAction::Show) | None => show(&settings),
        Some(SettingsAction::Set { key, value }) => {
            apply(&mut settings, &key, &value)?;
            settings.save(&paths)?;
            show(&settings)
        }
        Some(SettingsAction::Reset) => {
            let defaults = Settings::default();
            defaults.save(&paths)?;
            show(&defaults)
        }
    }
}
