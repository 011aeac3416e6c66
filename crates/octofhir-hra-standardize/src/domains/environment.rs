//! Environmental exposures
//!
//! The radon answer arrives as a locale-dependent band label and is
//! rewritten to the canonical English band so that downstream rules match
//! one vocabulary. Exposure selections resolve to internal codes, each
//! carrying its optional `env.<key>.years` duration.

use crate::convert::{select_labels, years_of};
use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::{Answers, EnvironmentRecord, ExposureEntry};

pub fn build(answers: &Answers, registry: &TerminologyRegistry) -> EnvironmentRecord {
    let radon_band = answers
        .text("env.radon.level_cat")
        .map(|label| match registry.radon_band(&label) {
            Some(canonical) => canonical,
            None => {
                log::debug!("unmapped radon band kept verbatim: {label:?}");
                label
            }
        });

    let exposures = select_labels(answers, "env.exposures")
        .into_iter()
        .map(|label| {
            let coding = registry.exposure(&label);
            // Duration sub-answers are keyed by the normalized exposure
            // code; an unmapped label has no such key
            let years = if coding.is_other() {
                None
            } else {
                answers
                    .get(&format!("env.{}.years", coding.code))
                    .and_then(years_of)
            };
            ExposureEntry { coding, years }
        })
        .collect();

    EnvironmentRecord {
        radon_band,
        exposures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn registry() -> TerminologyRegistry {
        TerminologyRegistry::builtin().unwrap()
    }

    #[rstest]
    #[case("High (>=300)", "High (>=300)")]
    #[case("Wysoki (>=300)", "High (>=300)")]
    #[case("Średni (100-299)", "Moderate (100-299)")]
    #[case("Niski (<100)", "Low")]
    #[case("Low", "Low")]
    fn radon_bands_canonicalize(#[case] label: &str, #[case] canonical: &str) {
        let answers = Answers::from([("env.radon.level_cat", label.into())]);
        let env = build(&answers, &registry());
        assert_eq!(env.radon_band.as_deref(), Some(canonical));
    }

    #[test]
    fn unmapped_radon_band_is_kept_verbatim() {
        let answers = Answers::from([("env.radon.level_cat", "somewhere around 250".into())]);
        let env = build(&answers, &registry());
        assert_eq!(env.radon_band.as_deref(), Some("somewhere around 250"));
    }

    #[test]
    fn exposures_pick_up_their_durations() {
        let answers = Answers::from([
            ("env.exposures", r#"["Azbest","Silica dust"]"#.into()),
            ("env.asbestos.years", 12.into()),
            ("env.silica_dust.years", "3.5".into()),
        ]);
        let env = build(&answers, &registry());

        assert_eq!(env.exposures.len(), 2);
        assert_eq!(env.exposures[0].coding.code, "asbestos");
        assert_eq!(env.exposures[0].years, Some(12.0));
        assert_eq!(env.exposures[1].coding.code, "silica_dust");
        assert_eq!(env.exposures[1].years, Some(3.5));
    }

    #[test]
    fn unknown_exposure_keeps_label_without_duration() {
        let answers = Answers::from([
            ("env.exposures", r#"["Moon dust"]"#.into()),
            ("env.moon_dust.years", 4.into()),
        ]);
        let env = build(&answers, &registry());

        assert_eq!(env.exposures.len(), 1);
        assert!(env.exposures[0].coding.is_other());
        assert_eq!(env.exposures[0].coding.source, "Moon dust");
        assert_eq!(env.exposures[0].years, None);
    }

    #[test]
    fn empty_answers_yield_default_record() {
        let env = build(&Answers::new(), &registry());
        assert_eq!(env, EnvironmentRecord::default());
    }
}
