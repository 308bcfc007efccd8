use healthlynk_records::{referral_history, remedy_history, sample_history, ConsultationRecord};

fn format_records(title: &str, records: &[&ConsultationRecord]) -> String {
    let mut out = format!("{} ({})\n", title, records.len());
    for record in records {
        out.push_str(&format!(
            "  {:<22} {:<22} {}\n",
            record.date, record.symptom, record.severity
        ));
    }
    out
}

pub fn run(remedies: bool, referrals: bool) -> anyhow::Result<()> {
    let records = sample_history();

    let output = if remedies {
        format_records("Home remedies", &remedy_history(&records))
    } else if referrals {
        format_records("Doctor referrals", &referral_history(&records))
    } else {
        let all: Vec<&ConsultationRecord> = records.iter().collect();
        format_records("Consultation history", &all)
    };

    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_records() {
        let records = sample_history();
        let referrals = referral_history(&records);
        let text = format_records("Doctor referrals", &referrals);
        assert!(text.starts_with("Doctor referrals (1)\n"));
        assert!(text.contains("High Fever with Rash"));
        assert!(text.trim_end().ends_with("severe"));
    }
}
