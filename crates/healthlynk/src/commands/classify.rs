use healthlynk_core::{CareGuide, Classifier};

pub fn run(text: &str, json: bool) -> anyhow::Result<()> {
    let classifier = Classifier::default();

    if json {
        let classification = classifier.classify(text);
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    print!("{}", describe(&classifier, text));
    Ok(())
}

fn describe(classifier: &Classifier, text: &str) -> String {
    let Some(pattern) = classifier.detect(text) else {
        return "No condition detected.\n".to_string();
    };

    let mut out = format!(
        "Condition: {}\nSeverity: {}\nFollow-up: {}\n\n",
        pattern.id, pattern.severity, pattern.follow_up
    );
    if let Some(symptom) = classifier.current_symptom(text) {
        out.push_str(&super::guidance::render(&CareGuide::builtin(), &symptom));
    }
    out
}
