//! Core demographics: date of birth and sex at birth

use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::{Answers, CoreRecord, Dob};

pub fn build(answers: &Answers, registry: &TerminologyRegistry) -> CoreRecord {
    let dob = answers.text("dob").and_then(|raw| {
        let parsed = Dob::parse(&raw);
        if parsed.is_none() {
            log::debug!("unparseable dob answer: {raw:?}");
        }
        parsed
    });
    let sex_at_birth = answers
        .text("sex_at_birth")
        .map(|label| registry.sex_at_birth(&label));

    CoreRecord { dob, sex_at_birth }
}
