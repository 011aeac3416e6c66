//! The standardized record produced from raw answers
//!
//! Standardization turns the flat answer map into this two-part structure:
//! `core` holds flat demographic facts, `advanced` groups the normalized
//! domain sub-records. The record is produced once per answer set and never
//! mutated; every derived-variable computation reads from it.

use crate::code::Coding;
use crate::dob::Dob;
use serde::{Deserialize, Serialize};

/// Sex assigned at birth, normalized from localized answer labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SexAtBirth {
    Female,
    Male,
    /// Intersex or any label the normalizer does not recognize
    Other,
}

impl SexAtBirth {
    /// Locale-neutral key used by derived variables and rule conditions
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
        }
    }
}

/// Flat demographic facts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreRecord {
    /// Parsed date of birth, if the answer was present and parseable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<Dob>,
    /// Normalized sex at birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex_at_birth: Option<SexAtBirth>,
}

/// One reported illness with its per-item metadata.
///
/// `year` is the normalized name for the questionnaire's per-condition
/// `year_dx` sub-answer; duration-based rules downstream depend on this
/// field, not on the source key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IllnessEntry {
    /// Questionnaire key (e.g. `ibd`), absent for unmapped labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Standardized condition code ([`Coding::other`] when unmapped)
    pub coding: Coding,
    /// Reported status label (e.g. an active-infection status), if asked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Year of diagnosis, if asked and parseable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Genetic-testing history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneticsRecord {
    /// Whether the user reported having had genetic testing
    pub tested: bool,
    /// Tested genes; panel selections are expanded into member genes, with
    /// the panel label preserved in each coding's `source`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genes: Vec<Coding>,
}

/// One environmental or occupational exposure with its duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureEntry {
    /// Standardized exposure code
    pub coding: Coding,
    /// Exposure duration in years, normalized from `env.<key>.years`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<f64>,
}

/// Environmental exposures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    /// Reported radon level band label, normalized to the canonical
    /// English band vocabulary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radon_band: Option<String>,
    /// Reported exposures with durations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exposures: Vec<ExposureEntry>,
}

/// Sexual-health answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SexualHealthRecord {
    /// Partner-count band label, kept categorical
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partners_band: Option<String>,
    /// Tracked infections with status and diagnosis year
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infections: Vec<IllnessEntry>,
}

/// One screening test with the year it was last performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningEntry {
    /// Screening kind key (e.g. `colonoscopy`)
    pub kind: String,
    /// Year last performed, normalized from `scr.<kind>.year`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Screening and immunization history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    /// Screenings the user reported ever having had
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<ScreeningEntry>,
    /// Reported immunizations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub immunizations: Vec<Coding>,
}

/// Occupational history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OccupationRecord {
    /// Job title standardized to an ISCO-08 classification code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Coding>,
    /// Exposures implied by the occupation via the job-exposure matrix
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jem_exposures: Vec<Coding>,
    /// Years in the occupation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<f64>,
}

/// Domain-grouped normalized sub-records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedRecord {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub illnesses: Vec<IllnessEntry>,
    #[serde(default)]
    pub genetics: GeneticsRecord,
    #[serde(default)]
    pub environment: EnvironmentRecord,
    #[serde(default)]
    pub sexual_health: SexualHealthRecord,
    #[serde(default)]
    pub screenings: ScreeningRecord,
    #[serde(default)]
    pub occupation: OccupationRecord,
}

/// The standardized view of one answer set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardizedRecord {
    /// Flat demographic facts
    #[serde(default)]
    pub core: CoreRecord,
    /// Domain-grouped normalized sub-records
    #[serde(default)]
    pub advanced: AdvancedRecord,
}

impl StandardizedRecord {
    /// Illness entry for a questionnaire condition key, if reported
    pub fn illness(&self, key: &str) -> Option<&IllnessEntry> {
        self.advanced
            .illnesses
            .iter()
            .find(|entry| entry.key.as_deref() == Some(key))
    }

    /// Tracked infection entry for a questionnaire key, if reported
    pub fn infection(&self, key: &str) -> Option<&IllnessEntry> {
        self.advanced
            .sexual_health
            .infections
            .iter()
            .find(|entry| entry.key.as_deref() == Some(key))
    }

    /// Screening entry for a screening kind, if reported
    pub fn screening(&self, kind: &str) -> Option<&ScreeningEntry> {
        self.advanced
            .screenings
            .tests
            .iter()
            .find(|entry| entry.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::CodeSystem;

    #[test]
    fn default_record_is_empty() {
        let record = StandardizedRecord::default();
        assert!(record.core.dob.is_none());
        assert!(record.advanced.illnesses.is_empty());
        assert!(!record.advanced.genetics.tested);
    }

    #[test]
    fn empty_sections_are_omitted_from_wire_form() {
        let record = StandardizedRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["advanced"]["illnesses"].is_null());
        assert_eq!(json["advanced"]["genetics"]["tested"], false);
    }

    #[test]
    fn sex_at_birth_keys_are_locale_neutral() {
        assert_eq!(SexAtBirth::Female.as_key(), "female");
        assert_eq!(
            serde_json::to_string(&SexAtBirth::Female).unwrap(),
            r#""female""#
        );
    }

    #[test]
    fn illness_lookup_uses_questionnaire_keys() {
        let record = StandardizedRecord {
            advanced: AdvancedRecord {
                illnesses: vec![
                    IllnessEntry {
                        key: Some("ibd".to_string()),
                        coding: Coding::new(CodeSystem::SnomedCt, "24526004", "IBD"),
                        status: None,
                        year: Some(2010),
                    },
                    IllnessEntry {
                        key: None,
                        coding: Coding::other("Some rare condition"),
                        status: None,
                        year: None,
                    },
                ],
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(record.illness("ibd").and_then(|e| e.year), Some(2010));
        assert!(record.illness("24526004").is_none());
        assert!(record.illness("other").is_none());
    }
}
