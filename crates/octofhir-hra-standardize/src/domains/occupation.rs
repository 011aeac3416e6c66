//! Occupational history
//!
//! A reported job title resolves to an ISCO-08 code, which in turn pulls
//! implied exposures from the job-exposure matrix. JEM entries are coded
//! internally with the job label as their source so a record shows where
//! each implied exposure came from.

use crate::convert::years_of;
use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::{Answers, CodeSystem, Coding, OccupationRecord};

pub fn build(answers: &Answers, registry: &TerminologyRegistry) -> OccupationRecord {
    let job = answers
        .text("occ.job_title")
        .map(|label| registry.occupation(&label));

    let jem_exposures = match &job {
        Some(coding) if !coding.is_other() => registry
            .job_exposures(&coding.code)
            .into_iter()
            .map(|exposure| Coding::new(CodeSystem::Internal, exposure, coding.source.clone()))
            .collect(),
        _ => Vec::new(),
    };

    let years = answers.get("occ.years").and_then(years_of);

    OccupationRecord {
        job,
        jem_exposures,
        years,
    }
}
