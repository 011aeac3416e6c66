//! The standardization pass over one answer set

use crate::domains;
use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::{AdvancedRecord, Answers, StandardizedRecord};

/// Rewrites raw questionnaire answers into a [`StandardizedRecord`].
///
/// The pass is total: it never fails and never drops a reported item.
/// Labels the vocabulary does not know land in the `other` bucket with
/// their source text preserved verbatim.
#[derive(Debug, Clone)]
pub struct Standardizer {
    registry: TerminologyRegistry,
}

impl Standardizer {
    /// Create a standardizer over a terminology registry
    pub fn new(registry: TerminologyRegistry) -> Self {
        Self { registry }
    }

    /// The registry this standardizer resolves labels against
    pub fn registry(&self) -> &TerminologyRegistry {
        &self.registry
    }

    /// Standardize one answer set
    pub fn standardize(&self, answers: &Answers) -> StandardizedRecord {
        let registry = &self.registry;
        StandardizedRecord {
            core: domains::core::build(answers, registry),
            advanced: AdvancedRecord {
                illnesses: domains::illnesses::build(answers, registry),
                genetics: domains::genetics::build(answers, registry),
                environment: domains::environment::build(answers, registry),
                sexual_health: domains::sexual_health::build(answers, registry),
                screenings: domains::screenings::build(answers, registry),
                occupation: domains::occupation::build(answers, registry),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_answers_standardize_to_default_record() {
        let standardizer = Standardizer::new(TerminologyRegistry::builtin().unwrap());
        assert_eq!(
            standardizer.standardize(&Answers::new()),
            StandardizedRecord::default()
        );
    }

    #[test]
    fn domains_are_assembled_side_by_side() {
        let answers = Answers::from([
            ("dob", "1970-01-20".into()),
            ("cond.list", r#"["Asthma"]"#.into()),
            ("occ.job_title", "Welder".into()),
        ]);
        let standardizer = Standardizer::new(TerminologyRegistry::builtin().unwrap());
        let record = standardizer.standardize(&answers);

        assert_eq!(record.core.dob.map(|d| d.year()), Some(1970));
        assert_eq!(record.advanced.illnesses.len(), 1);
        assert_eq!(record.advanced.occupation.job.unwrap().code, "7212");
    }
}
