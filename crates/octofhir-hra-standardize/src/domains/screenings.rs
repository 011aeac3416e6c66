//! Screening and immunization history
//!
//! Screening labels collapse to locale-neutral kind keys so the per-test
//! year sub-answer (`scr.<kind>.year`) can be found regardless of the
//! questionnaire language. An unrecognized label keeps its text as the
//! kind; it then has no year sub-answer to look up.

use crate::convert::{select_labels, year_of};
use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::{Answers, ScreeningEntry, ScreeningRecord};

pub fn build(answers: &Answers, registry: &TerminologyRegistry) -> ScreeningRecord {
    let tests = select_labels(answers, "scr.list")
        .into_iter()
        .map(|label| match registry.screening_kind(&label) {
            Some(kind) => {
                let year = answers
                    .get(&format!("scr.{kind}.year"))
                    .and_then(year_of);
                ScreeningEntry { kind, year }
            }
            None => {
                log::debug!("unmapped screening label kept verbatim: {label:?}");
                ScreeningEntry {
                    kind: label,
                    year: None,
                }
            }
        })
        .collect();

    let immunizations = select_labels(answers, "imm.list")
        .into_iter()
        .map(|label| registry.immunization(&label))
        .collect();

    ScreeningRecord {
        tests,
        immunizations,
    }
}
