use anyhow::bail;
use healthlynk_core::{CareGuide, CurrentSymptom, Guidance, PatternTable, Severity};
use std::fmt::Write;

/// Text rendering of the guidance panel for a symptom
pub fn render(guide: &CareGuide, symptom: &CurrentSymptom) -> String {
    let mut out = format!("Symptom: {} ({})\n", symptom.name, symptom.severity);

    match guide.for_symptom(symptom) {
        Guidance::HomeRemedy(remedy) => {
            let _ = writeln!(out, "\n{}\n{}", remedy.title, remedy.description);
            for (i, step) in remedy.steps.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, step);
            }
        }
        Guidance::SeeDoctor(doctors) => {
            if symptom.severity == Severity::Severe {
                out.push_str("\nSeek immediate medical attention.\n");
            } else {
                out.push_str("\nWe recommend seeing a doctor.\n");
            }
            out.push_str("Nearby doctors:\n");
            for doctor in doctors {
                let _ = writeln!(
                    out,
                    "  {} - {} ({})\n    {}, {}\n    {}",
                    doctor.name,
                    doctor.specialty,
                    doctor.distance,
                    doctor.address,
                    doctor.phone,
                    doctor.availability
                );
            }
        }
        Guidance::General => {
            out.push_str(
                "\nNo specific remedy on file. Monitor your symptoms and consult a doctor if they get worse.\n",
            );
        }
    }
    out
}

/// Resolve a condition id (or display label) to a symptom, with an optional severity override
fn resolve(table: &PatternTable, condition: &str, severity: Option<Severity>) -> Option<CurrentSymptom> {
    let pattern = table.get(condition).or_else(|| {
        table
            .patterns()
            .iter()
            .find(|p| p.display_name().eq_ignore_ascii_case(condition))
    });

    match (pattern, severity) {
        (Some(p), severity) => Some(CurrentSymptom {
            name: p.display_name().to_string(),
            severity: severity.unwrap_or_else(|| p.effective_severity()),
        }),
        (None, Some(severity)) => Some(CurrentSymptom {
            name: condition.to_string(),
            severity,
        }),
        (None, None) => None,
    }
}

pub fn run(condition: &str, severity: Option<&str>) -> anyhow::Result<()> {
    let severity = severity.map(str::parse::<Severity>).transpose()?;
    let table = PatternTable::builtin();

    let Some(symptom) = resolve(&table, condition, severity) else {
        bail!(
            "unknown condition '{}' (pass --severity to look it up anyway)",
            condition
        );
    };

    print!("{}", render(&CareGuide::builtin(), &symptom));
    Ok(())
}
