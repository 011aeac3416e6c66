//! Sexual-health standardization
//!
//! The partner-count band is a categorical answer and passes through
//! unchanged. Tracked infections share the illness entry shape, including
//! the `<ns>.<key>.status` / `<ns>.<key>.year_dx` metadata convention.

use super::illnesses::per_item_metadata;
use crate::convert::select_labels;
use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::{Answers, IllnessEntry, SexualHealthRecord};

pub fn build(answers: &Answers, registry: &TerminologyRegistry) -> SexualHealthRecord {
    let partners_band = answers.text("sex.partners_band");

    let infections = select_labels(answers, "sex.sti.list")
        .into_iter()
        .map(|label| {
            let resolved = registry.infection(&label);
            let (status, year) = match resolved.key.as_deref() {
                Some(key) => per_item_metadata(answers, registry, "sex.sti", key),
                None => (None, None),
            };
            IllnessEntry {
                key: resolved.key,
                coding: resolved.coding,
                status,
                year,
            }
        })
        .collect();

    SexualHealthRecord {
        partners_band,
        infections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_hra_types::CodeSystem;
    use pretty_assertions::assert_eq;

    fn registry() -> TerminologyRegistry {
        TerminologyRegistry::builtin().unwrap()
    }

    #[test]
    fn infections_map_with_status_and_year() {
        let answers = Answers::from([
            ("sex.partners_band", "2-4".into()),
            ("sex.sti.list", r#"["Hepatitis B","Chlamydia"]"#.into()),
            ("sex.sti.hbv.status", "Active".into()),
            ("sex.sti.hbv.year_dx", 2019.into()),
        ]);
        let record = build(&answers, &registry());

        assert_eq!(record.partners_band.as_deref(), Some("2-4"));
        assert_eq!(record.infections.len(), 2);

        let hbv = &record.infections[0];
        assert_eq!(hbv.key.as_deref(), Some("hbv"));
        assert_eq!(hbv.coding.system, CodeSystem::SnomedCt);
        assert_eq!(hbv.coding.code, "66071002");
        assert_eq!(hbv.status.as_deref(), Some("active"));
        assert_eq!(hbv.year, Some(2019));

        let chlamydia = &record.infections[1];
        assert_eq!(chlamydia.key.as_deref(), Some("chlamydia"));
        assert_eq!(chlamydia.status, None);
    }

    #[test]
    fn polish_abbreviation_resolves_to_same_infection() {
        let en = Answers::from([("sex.sti.list", r#"["Hepatitis B"]"#.into())]);
        let pl = Answers::from([("sex.sti.list", r#"["WZW B"]"#.into())]);
        let registry = registry();
        let en_coding = &build(&en, &registry).infections[0].coding;
        let pl_coding = &build(&pl, &registry).infections[0].coding;
        assert_eq!(en_coding.code, pl_coding.code);
        // Each record keeps the label the user actually selected
        assert_eq!(pl_coding.source, "WZW B");
    }

    #[test]
    fn resolved_polish_status_normalizes() {
        let answers = Answers::from([
            ("sex.sti.list", r#"["WZW C"]"#.into()),
            ("sex.sti.hcv.status", "Wyleczone".into()),
        ]);
        let record = build(&answers, &registry());
        assert_eq!(record.infections[0].status.as_deref(), Some("resolved"));
    }

    #[test]
    fn unknown_infection_lands_in_other_bucket() {
        let answers = Answers::from([("sex.sti.list", r#"["Scarlet fever"]"#.into())]);
        let record = build(&answers, &registry());
        assert!(record.infections[0].coding.is_other());
        assert_eq!(record.infections[0].key, None);
    }

    #[test]
    fn band_survives_without_infections() {
        let answers = Answers::from([("sex.partners_band", "10+".into())]);
        let record = build(&answers, &registry());
        assert_eq!(record.partners_band.as_deref(), Some("10+"));
        assert!(record.infections.is_empty());
    }
}
