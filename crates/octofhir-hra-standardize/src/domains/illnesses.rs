//! Illness standardization
//!
//! Decodes the `cond.list` multi-select and resolves each selected label to
//! a SNOMED CT coding. Per-item metadata is re-keyed to the normalized
//! names: the questionnaire's `cond.<key>.year_dx` becomes the entry's
//! `year` and `cond.<key>.status` its normalized `status`.

use crate::convert::{select_labels, year_of};
use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::{Answers, IllnessEntry};

pub fn build(answers: &Answers, registry: &TerminologyRegistry) -> Vec<IllnessEntry> {
    select_labels(answers, "cond.list")
        .into_iter()
        .map(|label| {
            let resolved = registry.illness(&label);
            let (status, year) = match resolved.key.as_deref() {
                Some(key) => per_item_metadata(answers, registry, "cond", key),
                None => (None, None),
            };
            IllnessEntry {
                key: resolved.key,
                coding: resolved.coding,
                status,
                year,
            }
        })
        .collect()
}

/// Status and diagnosis-year sub-answers for one keyed item.
///
/// Shared with the sexual-health builder, whose infections carry the same
/// `<ns>.<key>.status` / `<ns>.<key>.year_dx` shape.
pub(crate) fn per_item_metadata(
    answers: &Answers,
    registry: &TerminologyRegistry,
    namespace: &str,
    key: &str,
) -> (Option<String>, Option<i32>) {
    let status = answers
        .text(&format!("{namespace}.{key}.status"))
        .map(|label| normalize_status(registry, label));
    let year = answers
        .get(&format!("{namespace}.{key}.year_dx"))
        .and_then(year_of);
    (status, year)
}

/// Locale-neutral status key when the label is recognized, the raw label
/// otherwise (preserved, never dropped).
fn normalize_status(registry: &TerminologyRegistry, label: String) -> String {
    match registry.illness_status(&label) {
        Some(key) => key,
        None => {
            log::debug!("unmapped status label kept verbatim: {label:?}");
            label
        }
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
    fn maps_labels_and_rekeys_metadata() {
        let answers = Answers::from([
            ("cond.list", r#"["Inflammatory bowel disease","Asthma"]"#.into()),
            ("cond.ibd.year_dx", 2015.into()),
            ("cond.ibd.status", "Active".into()),
        ]);
        let illnesses = build(&answers, &registry());

        assert_eq!(illnesses.len(), 2);
        let ibd = &illnesses[0];
        assert_eq!(ibd.key.as_deref(), Some("ibd"));
        assert_eq!(ibd.coding.system, CodeSystem::SnomedCt);
        assert_eq!(ibd.coding.code, "24526004");
        assert_eq!(ibd.year, Some(2015));
        assert_eq!(ibd.status.as_deref(), Some("active"));

        let asthma = &illnesses[1];
        assert_eq!(asthma.key.as_deref(), Some("asthma"));
        assert_eq!(asthma.year, None);
        assert_eq!(asthma.status, None);
    }

    #[test]
    fn polish_metadata_normalizes_identically() {
        let answers = Answers::from([
            ("cond.list", r#"["Nieswoista choroba zapalna jelit"]"#.into()),
            ("cond.ibd.year_dx", "2015".into()),
            ("cond.ibd.status", "W trakcie leczenia".into()),
        ]);
        let illnesses = build(&answers, &registry());
        assert_eq!(illnesses[0].year, Some(2015));
        assert_eq!(illnesses[0].status.as_deref(), Some("active"));
    }

    #[test]
    fn unknown_labels_land_in_other_bucket() {
        let answers = Answers::from([("cond.list", r#"["Chronic hiccups"]"#.into())]);
        let illnesses = build(&answers, &registry());
        assert_eq!(illnesses.len(), 1);
        assert!(illnesses[0].coding.is_other());
        assert_eq!(illnesses[0].key, None);
        assert_eq!(illnesses[0].coding.source, "Chronic hiccups");
    }

    #[test]
    fn malformed_list_degrades_to_empty() {
        let answers = Answers::from([("cond.list", "not json".into())]);
        assert!(build(&answers, &registry()).is_empty());
        assert!(build(&Answers::new(), &registry()).is_empty());
    }

    #[test]
    fn bad_year_is_dropped_not_fatal() {
        let answers = Answers::from([
            ("cond.list", r#"["Type 2 diabetes"]"#.into()),
            ("cond.t2d.year_dx", "unsure".into()),
        ]);
        let illnesses = build(&answers, &registry());
        assert_eq!(illnesses[0].key.as_deref(), Some("t2d"));
        assert_eq!(illnesses[0].year, None);
    }
}
