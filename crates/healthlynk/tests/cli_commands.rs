mod common;

use common::{healthlynk, healthlynk_with_stdin, stderr, stdout};
use tempfile::TempDir;

#[test]
fn test_classify_prints_condition_and_guidance() {
    let home = TempDir::new().unwrap();
    let output = healthlynk(home.path(), &["classify", "I", "have", "a", "bad", "cough"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Condition: cough"));
    assert!(text.contains("Severity: mild"));
    assert!(text.contains("Cough Management"));
}

#[test]
fn test_classify_json() {
    let home = TempDir::new().unwrap();
    let output = healthlynk(home.path(), &["classify", "--json", "I can't breathe"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["condition"], "emergency");
    assert_eq!(value["severity"], "severe");
}

#[test]
fn test_classify_miss_json_is_null() {
    let home = TempDir::new().unwrap();
    let output = healthlynk(home.path(), &["classify", "--json", "all good"]);

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(value["condition"].is_null());
    assert!(value["severity"].is_null());
}

#[test]
fn test_guidance_for_moderate_lists_doctors() {
    let home = TempDir::new().unwrap();
    let output = healthlynk(home.path(), &["guidance", "fever"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Symptom: fever (moderate)"));
    assert!(text.contains("Dr. Sarah Johnson"));
}

#[test]
fn test_guidance_unknown_condition_fails() {
    let home = TempDir::new().unwrap();
    let output = healthlynk(home.path(), &["guidance", "rash"]);
    assert!(!output.status.success());
}

#[test]
fn test_history_referrals() {
    let home = TempDir::new().unwrap();
    let output = healthlynk(home.path(), &["history", "--referrals"]);

    let text = stdout(&output);
    assert!(text.starts_with("Doctor referrals (1)"));
    assert!(text.contains("High Fever with Rash"));
    assert!(!text.contains("Tension Headache"));
}

#[test]
fn test_settings_round_trip() {
    let home = TempDir::new().unwrap();

    let output = healthlynk(home.path(), &["settings", "set", "volume", "35"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(home.path().join("settings.json").exists());

    let output = healthlynk(home.path(), &["settings"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["voiceVolume"], 35);
    assert_eq!(value["voiceEnabled"], true);

    let output = healthlynk(home.path(), &["settings", "reset"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["voiceVolume"], 80);
}

#[test]
fn test_settings_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = healthlynk(home.path(), &["settings", "set", "font", "12"]);
    assert!(!output.status.success());
    assert!(!home.path().join("settings.json").exists());
}

#[test]
fn test_monitor_runs_fixed_ticks() {
    let home = TempDir::new().unwrap();
    let output = healthlynk(
        home.path(),
        &["monitor", "--ticks", "2", "--seed", "7", "--interval-ms", "20"],
    );

    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("Tick 0\n"));
    assert!(text.contains("Body Temperature"));
    assert!(text.contains("Alerts:"));
}

#[test]
fn test_offline_chat_session_and_export() {
    let home = TempDir::new().unwrap();
    let transcript = home.path().join("transcript.json");
    let pdf = home.path().join("consultation.pdf");
    let input = "I have a headache\n\n/guidance\nthanks\n/quit\n";

    let output = healthlynk_with_stdin(
        home.path(),
        &[
            "chat",
            "--offline",
            "--save",
            transcript.to_str().unwrap(),
        ],
        input,
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Assistant: Hello! I'm your healthcare assistant."));
    assert!(text.contains("Assistant: Can you describe the intensity and location of your headache?"));
    assert!(text.contains("Headache Relief"));
    assert!(text.contains("Assistant: You're welcome!"));

    let saved: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&transcript).unwrap()).unwrap();
    // greeting + two exchanges; the blank line sends nothing
    assert_eq!(saved.len(), 5);
    assert_eq!(saved[1]["role"], "user");

    let output = healthlynk(
        home.path(),
        &[
            "export",
            transcript.to_str().unwrap(),
            "--output",
            pdf.to_str().unwrap(),
            "--patient",
            "Ada",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(std::fs::read(&pdf).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_chat_voice_reports_unsupported() {
    let home = TempDir::new().unwrap();
    let output = healthlynk_with_stdin(home.path(), &["chat", "--offline"], "/voice\n/quit\n");

    assert!(output.status.success());
    assert!(stderr(&output).contains("Voice Recognition Not Supported"));
}
